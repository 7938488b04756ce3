use crate::cli::config::AppConfig;
use crate::detect::detector::DetectionSession;
use crate::error::EngineError;
use crate::fill::executor::FillOptions;
use crate::fill::profile::UserProfile;
use crate::page::document::Document;
use crate::relay::generate::{GenerationService, HttpGenerationService, request_from_page};
use crate::relay::provider::{HttpProfileProvider, ProfileProvider};
use crate::report::console::{format_detection_report, format_fill_report};
use crate::trace::logger::TraceLogger;
use crate::trace::trace::TraceEvent;

// ============================================================================
// detect subcommand
// ============================================================================

pub fn cmd_detect(
    snapshot_path: &str,
    form_id: Option<&str>,
    highlight: bool,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    if verbose > 0 {
        eprintln!("Scanning snapshot: {}", snapshot_path);
    }

    let document = Document::from_json_file(snapshot_path)?;
    let mut session = DetectionSession::new(document);

    let detection = match form_id {
        Some(id) => session.detect_form(id).clone(),
        None => session.detect().clone(),
    };

    tracer.record(
        &TraceEvent::now(
            "detectForm",
            if detection.is_empty() { "no_form" } else { "detected" },
        )
        .with_field_count(detection.field_count() as u32)
        .with_fingerprint(&detection.fingerprint),
    );

    if highlight {
        session.highlight_detected();
    }

    print!("{}", format_detection_report(&session.document, &detection));
    Ok(())
}

// ============================================================================
// fill subcommand
// ============================================================================

/// Detect and fill. Returns false on the not-authenticated outcome so the
/// caller can exit non-zero with a user-actionable message.
pub fn cmd_fill(
    snapshot_path: &str,
    profile_path: Option<&str>,
    form_id: Option<&str>,
    overwrite: bool,
    endpoint: &str,
    config: &AppConfig,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<bool, Box<dyn std::error::Error>> {
    let document = Document::from_json_file(snapshot_path)?;
    let mut session = DetectionSession::new(document);

    // Profile resolution: file beats backend fetch.
    let profile: Option<UserProfile> = match profile_path {
        Some(path) => Some(UserProfile::from_json_file(path)?),
        None => {
            if verbose > 0 {
                eprintln!("Fetching profile from {}", endpoint);
            }
            let provider =
                HttpProfileProvider::new(endpoint, config.service.cookie.clone())?;
            provider.fetch()?
        }
    };

    let Some(profile) = profile else {
        tracer.record(&TraceEvent::now("autoFill", "not_authenticated"));
        eprintln!("Not authenticated: sign in to the dashboard and retry.");
        return Ok(false);
    };
    session.profile = Some(profile);

    let detection = match form_id {
        Some(id) => session.detect_form(id).clone(),
        None => session.detect().clone(),
    };
    print!("{}", format_detection_report(&session.document, &detection));

    let options = FillOptions { overwrite };
    let report = match session.autofill(&options) {
        Ok(r) => r,
        Err(EngineError::NotAuthenticated) => {
            eprintln!("Not authenticated: sign in to the dashboard and retry.");
            return Ok(false);
        }
        Err(e) => return Err(Box::new(e)),
    };

    tracer.record(
        &TraceEvent::now("autoFill", "filled")
            .with_field_count(report.matched)
            .with_filled_count(report.filled),
    );

    println!();
    print!("{}", format_fill_report(&report));

    if verbose > 0 {
        for field in &detection.fields {
            if let Some(value) = session.document.value(field.control) {
                eprintln!("  {} = {}", field.label, value);
            }
        }
    }

    Ok(true)
}

// ============================================================================
// ask subcommand
// ============================================================================

pub fn cmd_ask(
    snapshot_path: &str,
    question: &str,
    endpoint: &str,
    config: &AppConfig,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = Document::from_json_file(snapshot_path)?;
    let request = request_from_page(&document, question, None, None)?;

    if verbose > 0 {
        eprintln!(
            "Asking about {} at {}",
            request.job_title.as_deref().unwrap_or("(unknown role)"),
            request.company.as_deref().unwrap_or("(unknown company)")
        );
    }

    let service = HttpGenerationService::new(endpoint, config.service.cookie.clone())?;
    match service.generate(&request) {
        Ok(text) => {
            tracer.record(&TraceEvent::now("generateResponse", "generated"));
            println!("{}", text);
            Ok(())
        }
        Err(EngineError::NotAuthenticated) => {
            tracer.record(&TraceEvent::now("generateResponse", "not_authenticated"));
            eprintln!("Not authenticated: sign in to the dashboard to use AI answers.");
            Ok(())
        }
        Err(e) => {
            tracer.record(&TraceEvent::now("generateResponse", "failed").with_detail(&e));
            eprintln!("Could not generate a response, please try again: {}", e);
            Ok(())
        }
    }
}
