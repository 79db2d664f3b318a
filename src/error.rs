use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
    #[error("Chirp is too long")]
    TooLong,
    #[error("Invalid {0} ID")]
    InvalidId(&'static str),
    #[error("Incorrect email or password")]
    InvalidCredentials,
    #[error("This endpoint is only available in development mode")]
    Forbidden,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Email already registered")]
    DuplicateEmail,
    #[error("Internal server error")]
    Internal,
}

pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MalformedRequest(_) | Self::TooLong | Self::InvalidId(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::Database(_) | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Database(e) => {
                tracing::error!(error = %e, "Database error");
                "Internal server error".to_string()
            }
            Self::Internal => {
                tracing::error!("Internal server error occurred");
                self.to_string()
            }
            Self::InvalidCredentials => {
                tracing::debug!("Authentication failed");
                self.to_string()
            }
            Self::Forbidden => {
                tracing::warn!("Admin endpoint called outside development mode");
                self.to_string()
            }
            other => {
                tracing::debug!(message = %other, "Request rejected");
                other.to_string()
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
