//! HTTP error responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use loresmith_error::{LoresmithError, LoresmithErrorKind, PromptErrorKind};
use serde_json::json;
use tracing::{error, warn};
use uuid::Uuid;

/// An error rendered as `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Create an error response.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 400 with the given message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// 404 for a missing document.
    pub fn not_found(what: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, format!("{what} not found"))
    }

    /// Map the failure of `action` (e.g. "generate backstory") to a response.
    ///
    /// Request and lookup errors keep their message. Everything else is
    /// logged and answered with a generic 500.
    pub fn failed(action: &str, err: LoresmithError) -> Self {
        match err.kind() {
            LoresmithErrorKind::Prompt(e) => {
                let status = match e.kind {
                    PromptErrorKind::NotFound(_) => StatusCode::NOT_FOUND,
                    PromptErrorKind::NoActivePrompt(_) | PromptErrorKind::Validation(_) => {
                        StatusCode::BAD_REQUEST
                    }
                };
                warn!(error = %e.kind, "Failed to {action}");
                Self::new(status, e.kind.to_string())
            }
            LoresmithErrorKind::Database(e) if e.is_not_found() => {
                warn!(error = %e.kind, "Failed to {action}");
                Self::new(StatusCode::NOT_FOUND, e.kind.to_string())
            }
            _ => {
                error!(error = %err, "Failed to {action}");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, format!("Failed to {action}"))
            }
        }
    }

    /// HTTP status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Message sent to the client.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "Rejected request body");
        let message = match rejection {
            JsonRejection::JsonDataError(_) => {
                "Invalid request: body does not match the expected fields"
            }
            JsonRejection::JsonSyntaxError(_) => "Invalid request: malformed JSON body",
            JsonRejection::MissingJsonContentType(_) => {
                "Invalid request: expected Content-Type: application/json"
            }
            _ => "Invalid request: unreadable body",
        };
        Self::bad_request(message)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        warn!(error = %rejection.body_text(), "Rejected query string");
        Self::bad_request("Invalid request: malformed query string")
    }
}

/// Parse a path id, answering 400 for malformed ids.
pub fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw)
        .map_err(|_| ApiError::bad_request(format!("Invalid request: invalid id '{raw}'")))
}
