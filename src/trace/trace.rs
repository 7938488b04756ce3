use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// One line in the engine trace log: which action ran, how it ended,
/// and the counts the popup UI reports.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub action: String,
    pub outcome: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filled_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl TraceEvent {
    pub fn now(action: &str, outcome: &str) -> Self {
        TraceEvent {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            action: action.to_string(),
            outcome: outcome.to_string(),
            field_count: None,
            filled_count: None,
            fingerprint: None,
            detail: None,
        }
    }

    pub fn with_field_count(mut self, count: u32) -> Self {
        self.field_count = Some(count);
        self
    }

    pub fn with_filled_count(mut self, count: u32) -> Self {
        self.filled_count = Some(count);
        self
    }

    pub fn with_fingerprint(mut self, fingerprint: &str) -> Self {
        self.fingerprint = Some(fingerprint.to_string());
        self
    }

    pub fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }
}
