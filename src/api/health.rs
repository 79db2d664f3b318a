use axum::response::IntoResponse;

/// Liveness probe: returns 200 OK as long as the server is running.
pub async fn healthz() -> impl IntoResponse {
    "OK"
}
