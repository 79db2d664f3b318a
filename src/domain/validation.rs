use crate::error::{AppError, Result};
use uuid::Uuid;

/// Maximum chirp length, counted in bytes of the raw UTF-8 body before moderation.
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Rejects bodies longer than [`MAX_CHIRP_LENGTH`]. Empty bodies are allowed.
///
/// # Errors
/// Returns `AppError::TooLong` if the body exceeds the limit.
pub fn validate_chirp_body(raw: &str) -> Result<()> {
    if raw.len() > MAX_CHIRP_LENGTH {
        return Err(AppError::TooLong);
    }
    Ok(())
}

/// Parses a textual identifier. `kind` names the resource in the error message.
///
/// # Errors
/// Returns `AppError::InvalidId` if `raw` is not a valid UUID.
pub fn parse_id(raw: &str, kind: &'static str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::InvalidId(kind))
}
