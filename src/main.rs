use clap::Parser;
use form_autofill::cli::commands::{cmd_ask, cmd_detect, cmd_fill};
use form_autofill::cli::config::{Cli, Commands, load_config, resolve_endpoint};
use form_autofill::trace::logger::TraceLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());
    let endpoint = resolve_endpoint(cli.endpoint.as_deref(), &config);

    let tracer = if config.trace.enabled {
        TraceLogger::new(&config.trace.path)
    } else {
        TraceLogger::disabled()
    };

    match cli.command {
        Commands::Detect {
            snapshot,
            form,
            highlight,
        } => {
            cmd_detect(&snapshot, form.as_deref(), highlight, cli.verbose, &tracer)?;
        }
        Commands::Fill {
            snapshot,
            profile,
            form,
            overwrite,
        } => {
            let authenticated = cmd_fill(
                &snapshot,
                profile.as_deref(),
                form.as_deref(),
                overwrite || config.fill.overwrite,
                &endpoint,
                &config,
                cli.verbose,
                &tracer,
            )?;
            if !authenticated {
                std::process::exit(1);
            }
        }
        Commands::Ask { snapshot, question } => {
            cmd_ask(&snapshot, &question, &endpoint, &config, cli.verbose, &tracer)?;
        }
    }

    Ok(())
}
