// API Surface
// Transport-agnostic JSON operations. An HTTP layer only has to forward the
// request body and write back `status` and `body`.

use serde::Serialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::models::{ErrorBody, HealthResponse, HumanizeRequest};
use crate::services::orchestrator::{humanize, humanize_with_seed, HumanizeError};

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn ok<T: Serialize>(payload: &T) -> Self {
        match serde_json::to_value(payload) {
            Ok(body) => Self { status: 200, body },
            Err(e) => Self::internal_error(format!("Failed to serialize response: {}", e)),
        }
    }

    fn bad_request(error: &str) -> Self {
        Self::error(400, ErrorBody { error: error.to_string(), message: None })
    }

    fn internal_error(message: String) -> Self {
        Self::error(
            500,
            ErrorBody { error: "internal_error".to_string(), message: Some(message) },
        )
    }

    fn error(status: u16, body: ErrorBody) -> Self {
        let body = serde_json::to_value(&body)
            .unwrap_or_else(|_| json!({ "error": body.error }));
        Self { status, body }
    }
}

impl From<HumanizeError> for ApiResponse {
    fn from(err: HumanizeError) -> Self {
        match err {
            HumanizeError::InvalidInput(msg) => Self::bad_request(&msg),
            HumanizeError::InternalError(msg) => Self::internal_error(msg),
        }
    }
}

/// Validate the payload shape: an object carrying a string `text`.
pub fn parse_request(payload: &Value) -> Result<HumanizeRequest, HumanizeError> {
    match payload.get("text") {
        None | Some(Value::Null) => Err(HumanizeError::InvalidInput("text required".to_string())),
        Some(Value::String(text)) => Ok(HumanizeRequest { text: text.clone() }),
        Some(_) => Err(HumanizeError::InvalidInput("text must be a string".to_string())),
    }
}

/// `POST /api/humanize` semantics.
pub fn handle_humanize(payload: &Value) -> ApiResponse {
    handle_humanize_seeded(payload, None)
}

/// As [`handle_humanize`], optionally with a fixed generator seed.
pub fn handle_humanize_seeded(payload: &Value, seed: Option<u64>) -> ApiResponse {
    let request = match parse_request(payload) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "api.humanize.rejected");
            return e.into();
        }
    };

    let outcome = match seed {
        Some(seed) => humanize_with_seed(&request.text, seed),
        None => humanize(&request.text),
    };

    match outcome {
        Ok(result) => ApiResponse::ok(&result),
        Err(e) => {
            warn!(error = %e, "api.humanize.failed");
            e.into()
        }
    }
}

/// Same as [`handle_humanize`] for a raw request body. Unparseable JSON is
/// treated like a missing `text` field.
pub fn handle_humanize_body(raw: &str) -> ApiResponse {
    match serde_json::from_str::<Value>(raw) {
        Ok(payload) => handle_humanize(&payload),
        Err(e) => {
            warn!(error = %e, "api.humanize.bad_json");
            ApiResponse::bad_request("text required")
        }
    }
}

pub fn health() -> ApiResponse {
    ApiResponse::ok(&HealthResponse { ok: true })
}
