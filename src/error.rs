//! Service-level errors
//!
//! These are failures of a request or of startup, not findings about the
//! submitted events; those are [`crate::ValidationError`]s and travel inside a
//! successful outcome.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request body is not JSON
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Array has more items than `MAX_EVENTS`
    #[error("Batch too large: {len} events (limit {max})")]
    BatchTooLarge { len: usize, max: usize },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    pub fn invalid_json<S: Into<String>>(msg: S) -> Self {
        Error::InvalidJson(msg.into())
    }

    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Error::Internal(msg.into())
    }

    /// HTTP status the error is answered with
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Error::BatchTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Error::Config(_) | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable name, the `type` field of the response body
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Config(_) => "configuration_error",
            Error::InvalidJson(_) => "invalid_json",
            Error::BatchTooLarge { .. } => "batch_too_large",
            Error::Internal(_) => "internal_error",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    message: String,
    #[serde(rename = "type")]
    kind: &'static str,
    status: u16,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }

        let body = ErrorBody {
            error: ErrorDetail {
                message: self.to_string(),
                kind: self.kind(),
                status: status.as_u16(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<envconfig::Error> for Error {
    fn from(err: envconfig::Error) -> Self {
        Error::Config(err.to_string())
    }
}
