//! HTTP mapping for core errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use vesselmail_core::MailError;

/// `MailError` as an HTTP response: `{"error": CODE, "message": text}`.
#[derive(Debug)]
pub struct ApiError(pub MailError);

impl From<MailError> for ApiError {
    fn from(e: MailError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            MailError::MissingField { .. } | MailError::Signature(_) => StatusCode::BAD_REQUEST,
            MailError::Offline => StatusCode::SERVICE_UNAVAILABLE,
            MailError::Transport { .. } => StatusCode::BAD_GATEWAY,
            MailError::QueueRace | MailError::Config(_) | MailError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "error": self.0.client_code().as_str(),
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}
