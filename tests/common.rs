#![allow(dead_code, clippy::unwrap_used, clippy::missing_panics_doc, unreachable_pub, missing_debug_implementations)]
use chirpy_server::AppBuilder;
use chirpy_server::api;
use chirpy_server::config::{Config, DatabaseConfig, LogFormat, ServerConfig, TelemetryConfig};
use chirpy_server::services::visit_counter::VisitCounter;
use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::{Arc, Once};

static INIT: Once = Once::new();

pub fn setup_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into())
            .add_directive("chirpy_server=debug".parse().unwrap())
            .add_directive("tower=warn".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());

        let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
    });
}

pub fn get_test_config() -> Config {
    Config {
        platform: "dev".to_string(),
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // 0 means let OS choose
            filepath_root: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"),
            shutdown_timeout_secs: 1,
        },
        database: DatabaseConfig {
            url: None,
            max_connections: 5,
            min_connections: 0,
            acquire_timeout_secs: 5,
            idle_timeout_secs: 60,
        },
        telemetry: TelemetryConfig { log_format: LogFormat::Text, otlp_endpoint: None },
    }
}

pub struct TestApp {
    pub server_url: String,
    pub client: reqwest::Client,
    pub visits: Arc<VisitCounter>,
    pub config: Config,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_config(get_test_config()).await
    }

    pub async fn spawn_with_config(config: Config) -> Self {
        setup_tracing();

        let visits = Arc::new(VisitCounter::new());
        let services = AppBuilder::new(config.clone()).with_visit_counter(Arc::clone(&visits)).build();
        let router = api::app_router(config.clone(), services);

        let listener = tokio::net::TcpListener::bind(format!("{}:{}", config.server.host, config.server.port))
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { server_url: format!("http://{addr}"), client: reqwest::Client::new(), visits, config }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }

    pub async fn register_user(&self, email: &str, password: &str) -> Value {
        let resp = self
            .client
            .post(self.url("/api/users"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
        resp.json().await.unwrap()
    }

    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.client
            .post(self.url("/api/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .unwrap()
    }

    pub async fn post_chirp(&self, body: &str, user_id: &str) -> reqwest::Response {
        self.client
            .post(self.url("/api/chirps"))
            .json(&json!({ "body": body, "user_id": user_id }))
            .send()
            .await
            .unwrap()
    }

    pub async fn list_chirps(&self) -> Vec<Value> {
        let resp = self.client.get(self.url("/api/chirps")).send().await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        resp.json().await.unwrap()
    }
}
