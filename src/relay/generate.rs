use crate::error::EngineError;
use crate::page::context::{extract_company, extract_job_title};
use crate::page::document::Document;
use crate::relay::provider::REQUEST_TIMEOUT;
use serde::{Deserialize, Serialize};

// ============================================================================
// AI response relay — pass-through to the text-generation service.
// No retry, no backoff; the only validation is a non-empty question.
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponseBody {
    response: String,
}

/// Build a relay request from a question plus page-derived context.
/// Caller-supplied title/company override page extraction.
pub fn request_from_page(
    doc: &Document,
    question: &str,
    job_title: Option<String>,
    company: Option<String>,
) -> Result<GenerateRequest, EngineError> {
    validate_question(question)?;
    Ok(GenerateRequest {
        question: question.trim().to_string(),
        job_title: job_title.or_else(|| extract_job_title(doc)),
        company: company.or_else(|| extract_company(doc)),
        job_description: None,
    })
}

pub fn validate_question(question: &str) -> Result<(), EngineError> {
    if question.trim().is_empty() {
        Err(EngineError::EmptyQuestion)
    } else {
        Ok(())
    }
}

pub trait GenerationService {
    fn generate(&self, request: &GenerateRequest) -> Result<String, EngineError>;
}

// ============================================================================
// HTTP service — POST /api/ai/generate-response
// ============================================================================

pub struct HttpGenerationService {
    endpoint: String,
    session_cookie: Option<String>,
    client: reqwest::blocking::Client,
}

impl HttpGenerationService {
    pub fn new(base_url: &str, session_cookie: Option<String>) -> Result<Self, EngineError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| EngineError::Network {
                context: "building generation client".to_string(),
                source: e,
            })?;

        Ok(HttpGenerationService {
            endpoint: format!(
                "{}/api/ai/generate-response",
                base_url.trim_end_matches('/')
            ),
            session_cookie,
            client,
        })
    }
}

impl GenerationService for HttpGenerationService {
    fn generate(&self, request: &GenerateRequest) -> Result<String, EngineError> {
        validate_question(&request.question)?;

        let mut http_request = self.client.post(&self.endpoint).json(request);
        if let Some(cookie) = &self.session_cookie {
            http_request = http_request.header(reqwest::header::COOKIE, cookie);
        }

        let response = http_request.send().map_err(|e| EngineError::Network {
            context: "generation request".to_string(),
            source: e,
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(EngineError::NotAuthenticated);
        }
        if !status.is_success() {
            return Err(EngineError::ServiceStatus {
                context: "generation endpoint".to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|e| EngineError::Network {
            context: "reading generation body".to_string(),
            source: e,
        })?;
        let parsed: GenerateResponseBody =
            serde_json::from_str(&body).map_err(|e| EngineError::JsonParse {
                context: "generation response".to_string(),
                source: e,
            })?;
        Ok(parsed.response)
    }
}

// ============================================================================
// Mock service — canned responses for tests and offline runs
// ============================================================================

pub struct MockGenerationService {
    pub canned: String,
}

impl MockGenerationService {
    pub fn with_response(canned: &str) -> Self {
        MockGenerationService {
            canned: canned.to_string(),
        }
    }
}

impl GenerationService for MockGenerationService {
    fn generate(&self, request: &GenerateRequest) -> Result<String, EngineError> {
        validate_question(&request.question)?;
        Ok(self.canned.clone())
    }
}
