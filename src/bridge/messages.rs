use serde::{Deserialize, Serialize};

// ============================================================================
// Wire messages between the extension shell and the engine.
// Shapes mirror the chrome.runtime message protocol exactly.
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ExtensionRequest {
    DetectForm,

    #[serde(rename_all = "camelCase")]
    AutoFill {
        #[serde(default)]
        overwrite: bool,
    },

    #[serde(rename_all = "camelCase")]
    GenerateResponse {
        question: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        job_title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        company: Option<String>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectResponse {
    pub detected: bool,
    pub field_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filled_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FillResponse {
    pub fn filled(count: u32) -> Self {
        FillResponse {
            success: true,
            filled_count: Some(count),
            error: None,
        }
    }

    pub fn failed(code: &str) -> Self {
        FillResponse {
            success: false,
            filled_count: None,
            error: Some(code.to_string()),
        }
    }
}

/// Async notification carrying the generated text, delivered separately
/// from the request/response pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateNotification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateNotification {
    pub fn text(response: &str) -> Self {
        GenerateNotification {
            response: Some(response.to_string()),
            error: None,
        }
    }

    pub fn failed(code: &str) -> Self {
        GenerateNotification {
            response: None,
            error: Some(code.to_string()),
        }
    }
}

// Error codes surfaced over the wire
pub const ERR_NOT_AUTHENTICATED: &str = "not_authenticated";
pub const ERR_EMPTY_QUESTION: &str = "empty_question";
pub const ERR_TRY_AGAIN: &str = "try_again";
