use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

/// Default dashboard backend, overridable via --endpoint or config file.
pub const DEFAULT_ENDPOINT: &str = "https://autoapply-pro.replit.app";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "form-autofill",
    version,
    about = "Job application form detection and autofill engine"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Dashboard backend base URL
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Path to config file (default: form-autofill.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect application form fields in a page snapshot
    Detect {
        /// Path to the page snapshot JSON file
        #[arg(long)]
        snapshot: String,

        /// Restrict detection to one form element by id
        #[arg(long)]
        form: Option<String>,

        /// Mark detected controls with a cosmetic highlight
        #[arg(long)]
        highlight: bool,
    },

    /// Detect fields and fill them from a profile
    Fill {
        /// Path to the page snapshot JSON file
        #[arg(long)]
        snapshot: String,

        /// Path to a profile JSON file (default: fetch from the backend)
        #[arg(long)]
        profile: Option<String>,

        /// Restrict detection to one form element by id
        #[arg(long)]
        form: Option<String>,

        /// Overwrite fields that already hold a value
        #[arg(long)]
        overwrite: bool,
    },

    /// Relay an application question to the AI generation service
    Ask {
        /// Path to the page snapshot JSON file (for job-page context)
        #[arg(long)]
        snapshot: String,

        /// The application question to answer
        #[arg(long)]
        question: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `form-autofill.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub fill: FillConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    pub endpoint: Option<String>,
    /// Session cookie forwarded to the backend, e.g. "session=..."
    pub cookie: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillConfig {
    #[serde(default)]
    pub overwrite: bool,
}

impl Default for FillConfig {
    fn default() -> Self {
        FillConfig { overwrite: false }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceConfig {
    #[serde(default = "default_trace_path")]
    pub path: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        TraceConfig {
            path: default_trace_path(),
            enabled: true,
        }
    }
}

// Serde default helpers
fn default_trace_path() -> String {
    "autofill_trace.jsonl".to_string()
}
fn default_true() -> bool {
    true
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if the file is missing
/// or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("form-autofill.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

/// Resolve the backend endpoint: CLI > config > default.
pub fn resolve_endpoint(cli_endpoint: Option<&str>, config: &AppConfig) -> String {
    cli_endpoint
        .or(config.service.endpoint.as_deref())
        .unwrap_or(DEFAULT_ENDPOINT)
        .to_string()
}
