use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

/// The platform value that unlocks destructive admin endpoints.
pub const DEV_PLATFORM: &str = "dev";

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Runtime platform; "dev" enables the admin reset endpoint
    #[arg(long, env = "CHIRPY_PLATFORM", default_value = "production")]
    pub platform: String,

    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub database: DatabaseConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,
}

#[derive(Clone, Debug, Args)]
pub struct ServerConfig {
    /// Host to listen on
    #[arg(long, env = "CHIRPY_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "CHIRPY_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Directory served under /app
    #[arg(long, env = "CHIRPY_FILEPATH_ROOT", default_value = "static")]
    pub filepath_root: PathBuf,

    /// Seconds to wait for in-flight requests after a shutdown signal
    #[arg(long, env = "CHIRPY_SHUTDOWN_TIMEOUT_SECS", default_value_t = 10)]
    pub shutdown_timeout_secs: u64,
}

#[derive(Clone, Debug, Args)]
pub struct DatabaseConfig {
    /// Database connection URL; the in-memory store is used when unset
    #[arg(long = "database-url", env = "CHIRPY_DATABASE_URL")]
    pub url: Option<String>,

    /// Maximum number of pooled connections
    #[arg(long = "db-max-connections", env = "CHIRPY_DB_MAX_CONNECTIONS", default_value_t = 20)]
    pub max_connections: u32,

    /// Minimum number of idle connections kept open
    #[arg(long = "db-min-connections", env = "CHIRPY_DB_MIN_CONNECTIONS", default_value_t = 2)]
    pub min_connections: u32,

    /// Seconds to wait when acquiring a connection from the pool
    #[arg(long = "db-acquire-timeout-secs", env = "CHIRPY_DB_ACQUIRE_TIMEOUT_SECS", default_value_t = 5)]
    pub acquire_timeout_secs: u64,

    /// Seconds an idle connection is kept before being closed
    #[arg(long = "db-idle-timeout-secs", env = "CHIRPY_DB_IDLE_TIMEOUT_SECS", default_value_t = 600)]
    pub idle_timeout_secs: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, Args)]
pub struct TelemetryConfig {
    /// Log output format
    #[arg(long, env = "CHIRPY_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// OTLP collector endpoint; traces, metrics and logs are exported when set
    #[arg(long, env = "CHIRPY_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,
}

impl Config {
    #[must_use]
    pub fn load() -> Self {
        Self::parse()
    }

    #[must_use]
    pub fn is_dev(&self) -> bool {
        self.platform == DEV_PLATFORM
    }
}
