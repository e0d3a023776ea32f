use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// JSON body emitted on every failure path of the public API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
}

/// Public API error: a stable machine-readable code plus a human-readable
/// description, bound to the status code of its failure family.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    pub fn invalid_request(desc: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "invalid_request", desc)
    }

    pub fn exchange_failed(desc: &str) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "token_exchange_failed", desc)
    }

    pub fn refresh_failed(desc: &str) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "token_refresh_failed", desc)
    }

    pub fn method_not_allowed() -> Self {
        Self::new(
            StatusCode::METHOD_NOT_ALLOWED,
            "method_not_allowed",
            "Only GET and POST methods are allowed",
        )
    }

    /// Stable code of the failure family, used as a metrics label.
    pub fn code(&self) -> &str {
        &self.body.error
    }

    fn new(status: StatusCode, error: &str, desc: &str) -> Self {
        Self {
            status,
            body: ErrorResponse {
                error: error.to_string(),
                error_description: Some(desc.to_string()),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
