use crate::api::AppState;
use crate::error::{AppError, Result};
use axum::{extract::State, http::StatusCode, response::Html};

pub async fn metrics(State(state): State<AppState>) -> Html<String> {
    let hits = state.visits.get();
    Html(format!(
        "<html>
  <body>
    <h1>Welcome, Chirpy Admin</h1>
    <p>Chirpy has been visited {hits} times!</p>
  </body>
</html>"
    ))
}

/// Deletes all users (and their chirps) and zeroes the visit counter.
///
/// # Errors
/// Returns `AppError::Forbidden` unless the server runs on the dev platform.
pub async fn reset(State(state): State<AppState>) -> Result<StatusCode> {
    if !state.config.is_dev() {
        return Err(AppError::Forbidden);
    }

    state.user_service.reset_all().await?;
    state.visits.reset();
    Ok(StatusCode::OK)
}
