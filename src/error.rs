//! Error types for the SIC code API.
//!
//! Uses thiserror for ergonomic error handling with automatic Display implementations.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::ConfigError;

/// Application-level errors raised outside the request path.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration could not be loaded or failed validation
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Tracing subscriber could not be installed
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

/// Authentication failure for a request.
///
/// This is the only failure a handler propagates as `Err`; forbidden callers
/// and collaborator failures are answered with a normal error-shaped response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No identity was resolved upstream for this request.
    #[error("Invalid token")]
    InvalidToken,
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(ErrorBody::new(self.to_string(), "Unauthorized"))
    }
}

/// Error response body shared by every error-shaped reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub err: String,
    pub desc: String,
}

impl ErrorBody {
    pub fn new(err: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            err: err.into(),
            desc: desc.into(),
        }
    }
}
