use crate::config::Config;
use crate::services::chirp_service::ChirpService;
use crate::services::user_service::UserService;
use crate::services::visit_counter::VisitCounter;
use axum::body::Body;
use axum::http::{HeaderName, Request};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod admin;
pub mod chirps;
pub mod extract;
pub mod health;
pub mod middleware;
pub mod schemas;
pub mod users;

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Config,
    pub user_service: UserService,
    pub chirp_service: ChirpService,
    pub visits: Arc<VisitCounter>,
}

#[derive(Debug)]
pub struct ServiceContainer {
    pub user_service: UserService,
    pub chirp_service: ChirpService,
    pub visits: Arc<VisitCounter>,
}

/// Configures and returns the application router.
pub fn app_router(config: Config, services: ServiceContainer) -> Router {
    let static_routes = Router::new()
        .nest_service("/app", ServeDir::new(&config.server.filepath_root))
        .layer(from_fn_with_state(Arc::clone(&services.visits), middleware::count_visits));

    let state = AppState {
        config,
        user_service: services.user_service,
        chirp_service: services.chirp_service,
        visits: services.visits,
    };

    let api_routes = Router::new()
        .route("/healthz", get(health::healthz))
        .route("/users", post(users::create_user))
        .route("/login", post(users::login))
        .route("/chirps", post(chirps::create_chirp).get(chirps::list_chirps))
        .route("/chirps/{chirp_id}", get(chirps::get_chirp));

    let admin_routes =
        Router::new().route("/metrics", get(admin::metrics)).route("/reset", post(admin::reset));

    Router::new()
        .nest("/api", api_routes)
        .nest("/admin", admin_routes)
        .merge(static_routes)
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER)))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .extensions()
                        .get::<tower_http::request_id::RequestId>()
                        .and_then(|id| id.header_value().to_str().ok())
                        .unwrap_or_default()
                        .to_string();

                    tracing::info_span!(
                        "request",
                        "request_id" = %request_id,
                        "http.request.method" = %request.method(),
                        "url.path" = %request.uri().path(),
                        "http.response.status_code" = tracing::field::Empty,
                        "otel.kind" = "server",
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>, latency: std::time::Duration, span: &tracing::Span| {
                        let status = response.status();
                        span.record("http.response.status_code", status.as_u16());

                        tracing::info!(
                            latency_ms = %latency.as_millis(),
                            status = %status.as_u16(),
                            "request completed"
                        );
                    },
                )
                .on_failure(|error, _latency, _span: &tracing::Span| {
                    tracing::error!(error = %error, "request failed");
                }),
        )
        .layer(SetRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER), middleware::MakeRequestUuidV7))
        .with_state(state)
}
