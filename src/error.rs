use std::fmt;

#[derive(Debug)]
pub enum EngineError {
    /// Autofill or AI generation requested without a signed-in profile
    NotAuthenticated,

    /// AI generation requested with a blank question
    EmptyQuestion,

    /// Profile fetch or generation request failed at the transport level
    /// (connection refused, DNS, timeout)
    Network { context: String, source: reqwest::Error },

    /// Collaborator returned a non-success HTTP status
    ServiceStatus { context: String, status: u16 },

    /// JSON parsing failed (snapshot file, profile body, or service response)
    JsonParse { context: String, source: serde_json::Error },

    /// Page snapshot is missing or structurally invalid
    Snapshot(String),

    /// File I/O failed (snapshot or profile file)
    Io { context: String, source: std::io::Error },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::NotAuthenticated => {
                write!(f, "Not authenticated: sign in to load your profile")
            }
            EngineError::EmptyQuestion => {
                write!(f, "Question must not be empty")
            }
            EngineError::Network { context, source } => {
                write!(f, "Network failure ({}): {}", context, source)
            }
            EngineError::ServiceStatus { context, status } => {
                write!(f, "{} returned HTTP {}", context, status)
            }
            EngineError::JsonParse { context, source } => {
                write!(f, "JSON parse error ({}): {}", context, source)
            }
            EngineError::Snapshot(msg) => {
                write!(f, "Invalid page snapshot: {}", msg)
            }
            EngineError::Io { context, source } => {
                write!(f, "I/O error ({}): {}", context, source)
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Network { source, .. } => Some(source),
            EngineError::JsonParse { source, .. } => Some(source),
            EngineError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
