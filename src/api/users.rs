use crate::api::AppState;
use crate::api::extract::JsonBody;
use crate::api::schemas::users::{Credentials, UserResponse};
use crate::error::Result;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

/// Registers a new account.
///
/// # Errors
/// Returns `AppError::MalformedRequest` if the body is not valid credentials JSON.
/// Returns `AppError::DuplicateEmail` if the email is already registered.
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<Credentials>,
) -> Result<impl IntoResponse> {
    let user = state.user_service.register(payload.email, payload.password).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// # Errors
/// Returns `AppError::InvalidCredentials` if the email or password is wrong.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<Credentials>,
) -> Result<impl IntoResponse> {
    let user = state.user_service.authenticate(payload.email, payload.password).await?;
    Ok(Json(UserResponse::from(user)))
}
