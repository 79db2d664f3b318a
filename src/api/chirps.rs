use crate::api::AppState;
use crate::api::extract::JsonBody;
use crate::api::schemas::chirps::{ChirpResponse, CreateChirp};
use crate::domain::validation::parse_id;
use crate::error::Result;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

/// Posts a chirp on behalf of `user_id`.
///
/// # Errors
/// Returns `AppError::TooLong` if the body exceeds 140 bytes.
/// Returns `AppError::InvalidId` if `user_id` is not a UUID.
pub async fn create_chirp(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateChirp>,
) -> Result<impl IntoResponse> {
    let chirp = state.chirp_service.create(payload.body, &payload.user_id).await?;
    Ok((StatusCode::CREATED, Json(ChirpResponse::from(chirp))))
}

pub async fn list_chirps(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let chirps = state.chirp_service.list().await?;
    Ok(Json(chirps.into_iter().map(ChirpResponse::from).collect::<Vec<_>>()))
}

/// # Errors
/// Returns `AppError::InvalidId` if the path segment is not a UUID.
/// Returns `AppError::NotFound` if the chirp does not exist.
pub async fn get_chirp(State(state): State<AppState>, Path(chirp_id): Path<String>) -> Result<impl IntoResponse> {
    let chirp_id = parse_id(&chirp_id, "chirp")?;
    let chirp = state.chirp_service.get(chirp_id).await?;
    Ok(Json(ChirpResponse::from(chirp)))
}
