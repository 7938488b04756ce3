use crate::bridge::messages::{
    DetectResponse, ERR_EMPTY_QUESTION, ERR_NOT_AUTHENTICATED, ERR_TRY_AGAIN, ExtensionRequest,
    FillResponse, GenerateNotification,
};
use crate::detect::detector::DetectionSession;
use crate::error::EngineError;
use crate::fill::executor::FillOptions;
use crate::relay::generate::{GenerationService, request_from_page};
use crate::relay::provider::ProfileProvider;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::TraceEvent;
use serde_json::Value;

/// Dispatch one extension message against the session. Always returns a
/// response value; nothing here is fatal to the hosting page.
pub fn handle_request(
    session: &mut DetectionSession,
    profiles: &dyn ProfileProvider,
    generation: &dyn GenerationService,
    tracer: &TraceLogger,
    request: &ExtensionRequest,
) -> Value {
    match request {
        ExtensionRequest::DetectForm => handle_detect(session, tracer),
        ExtensionRequest::AutoFill { overwrite } => {
            handle_autofill(session, profiles, tracer, *overwrite)
        }
        ExtensionRequest::GenerateResponse {
            question,
            job_title,
            company,
        } => handle_generate(
            session,
            generation,
            tracer,
            question,
            job_title.clone(),
            company.clone(),
        ),
    }
}

fn handle_detect(session: &mut DetectionSession, tracer: &TraceLogger) -> Value {
    let detection = session.detect();
    let detected = !detection.is_empty();
    let field_count = detection.field_count() as u32;
    let fingerprint = detection.fingerprint.clone();

    tracer.record(
        &TraceEvent::now("detectForm", if detected { "detected" } else { "no_form" })
            .with_field_count(field_count)
            .with_fingerprint(&fingerprint),
    );

    session.highlight_detected();

    serde_json::to_value(DetectResponse {
        detected,
        field_count,
    })
    .unwrap_or(Value::Null)
}

fn handle_autofill(
    session: &mut DetectionSession,
    profiles: &dyn ProfileProvider,
    tracer: &TraceLogger,
    overwrite: bool,
) -> Value {
    // A cached profile wins; otherwise ask the provider, strictly before
    // any fill work runs.
    if session.profile.is_none() {
        match profiles.fetch() {
            Ok(Some(profile)) => session.profile = Some(profile),
            Ok(None) => {
                tracer.record(&TraceEvent::now("autoFill", ERR_NOT_AUTHENTICATED));
                return response_value(FillResponse::failed(ERR_NOT_AUTHENTICATED));
            }
            Err(e) => {
                tracer.record(&TraceEvent::now("autoFill", "network_failure").with_detail(&e));
                return response_value(FillResponse::failed(ERR_TRY_AGAIN));
            }
        }
    }

    let options = FillOptions { overwrite };
    match session.autofill(&options) {
        Ok(report) => {
            tracer.record(
                &TraceEvent::now("autoFill", "filled")
                    .with_field_count(report.matched)
                    .with_filled_count(report.filled),
            );
            response_value(FillResponse::filled(report.filled))
        }
        Err(EngineError::NotAuthenticated) => {
            tracer.record(&TraceEvent::now("autoFill", ERR_NOT_AUTHENTICATED));
            response_value(FillResponse::failed(ERR_NOT_AUTHENTICATED))
        }
        Err(e) => {
            tracer.record(&TraceEvent::now("autoFill", "failed").with_detail(&e));
            response_value(FillResponse::failed(ERR_TRY_AGAIN))
        }
    }
}

fn handle_generate(
    session: &DetectionSession,
    generation: &dyn GenerationService,
    tracer: &TraceLogger,
    question: &str,
    job_title: Option<String>,
    company: Option<String>,
) -> Value {
    let request = match request_from_page(&session.document, question, job_title, company) {
        Ok(r) => r,
        Err(EngineError::EmptyQuestion) => {
            tracer.record(&TraceEvent::now("generateResponse", ERR_EMPTY_QUESTION));
            return response_value(GenerateNotification::failed(ERR_EMPTY_QUESTION));
        }
        Err(e) => {
            tracer.record(&TraceEvent::now("generateResponse", "failed").with_detail(&e));
            return response_value(GenerateNotification::failed(ERR_TRY_AGAIN));
        }
    };

    match generation.generate(&request) {
        Ok(text) => {
            tracer.record(&TraceEvent::now("generateResponse", "generated"));
            response_value(GenerateNotification::text(&text))
        }
        Err(EngineError::NotAuthenticated) => {
            tracer.record(&TraceEvent::now("generateResponse", ERR_NOT_AUTHENTICATED));
            response_value(GenerateNotification::failed(ERR_NOT_AUTHENTICATED))
        }
        // Network and status failures surface as a user-actionable
        // "please try again", never a silent failure.
        Err(e) => {
            tracer.record(&TraceEvent::now("generateResponse", "failed").with_detail(&e));
            response_value(GenerateNotification::failed(ERR_TRY_AGAIN))
        }
    }
}

fn response_value<T: serde::Serialize>(response: T) -> Value {
    serde_json::to_value(response).unwrap_or(Value::Null)
}
