use crate::detect::detector::{DetectionResult, DetectionSession};
use crate::error::EngineError;
use crate::page::document::Document;

pub mod bridge;
pub mod cli;
pub mod detect;
pub mod error;
pub mod fill;
pub mod page;
pub mod relay;
pub mod report;
pub mod trace;

/// Load a page snapshot file into a document.
pub fn load_snapshot(path: &str) -> Result<Document, EngineError> {
    Document::from_json_file(path)
}

/// One-shot detection over a snapshot file: load, scan, classify.
pub fn detect_snapshot_file(path: &str) -> Result<DetectionResult, EngineError> {
    let document = load_snapshot(path)?;
    let mut session = DetectionSession::new(document);
    Ok(session.detect().clone())
}
