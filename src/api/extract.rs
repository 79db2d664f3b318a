use crate::error::AppError;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

/// JSON request body decoded from the raw bytes, whatever `Content-Type` says.
///
/// Decode failures use the `{"error": ...}` envelope.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes =
            Bytes::from_request(req, state).await.map_err(|rejection| AppError::MalformedRequest(rejection.body_text()))?;

        serde_json::from_slice(&bytes).map(Self).map_err(|e| AppError::MalformedRequest(e.to_string()))
    }
}
