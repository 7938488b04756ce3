use std::{fs::OpenOptions, io::Write, sync::Mutex};

use crate::trace::trace::TraceEvent;

/// Append-only JSONL trace log. Logging failures degrade to stderr
/// warnings; they never abort an engine operation.
pub struct TraceLogger {
    file: Option<Mutex<std::fs::File>>,
}

impl TraceLogger {
    pub fn new(path: &str) -> Self {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => TraceLogger {
                file: Some(Mutex::new(f)),
            },
            Err(e) => {
                eprintln!("Warning: trace log '{}' unavailable: {}", path, e);
                TraceLogger { file: None }
            }
        }
    }

    /// A logger that drops everything; used when tracing is turned off.
    pub fn disabled() -> Self {
        TraceLogger { file: None }
    }

    pub fn record(&self, event: &TraceEvent) {
        let Some(file_mutex) = &self.file else {
            return;
        };

        let line = match serde_json::to_string(event) {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Warning: could not serialize trace event: {}", e);
                return;
            }
        };

        match file_mutex.lock() {
            Ok(mut file) => {
                if let Err(e) = writeln!(file, "{}", line) {
                    eprintln!("Warning: could not write trace event: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Warning: trace log lock poisoned: {}", e);
            }
        }
    }
}
