#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::todo)]
#![warn(clippy::panic)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(unreachable_pub)]
#![warn(missing_debug_implementations)]
#![warn(unused_qualifications)]
#![deny(unused_must_use)]

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod storage;
pub mod telemetry;

use crate::api::ServiceContainer;
use crate::config::Config;
use crate::services::chirp_service::ChirpService;
use crate::services::credential_service::CredentialService;
use crate::services::user_service::UserService;
use crate::services::visit_counter::VisitCounter;
use crate::storage::{ChirpRepository, DbPool, MemoryStore, PgChirpRepository, PgUserRepository, UserRepository};
use std::sync::Arc;
use tokio::sync::watch;

/// Wires repositories and services together.
///
/// Without a database the services share one [`MemoryStore`].
#[derive(Debug)]
pub struct AppBuilder {
    config: Config,
    pool: Option<DbPool>,
    visits: Option<Arc<VisitCounter>>,
}

impl AppBuilder {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config, pool: None, visits: None }
    }

    #[must_use]
    pub fn with_database(mut self, pool: DbPool) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Shares an existing counter instead of starting a fresh one.
    #[must_use]
    pub fn with_visit_counter(mut self, visits: Arc<VisitCounter>) -> Self {
        self.visits = Some(visits);
        self
    }

    #[must_use]
    pub fn build(self) -> ServiceContainer {
        let (users, chirps): (Arc<dyn UserRepository>, Arc<dyn ChirpRepository>) = match self.pool {
            Some(pool) => (Arc::new(PgUserRepository::new(pool.clone())), Arc::new(PgChirpRepository::new(pool))),
            None => {
                tracing::warn!(platform = %self.config.platform, "No database configured; using in-memory store");
                let store = MemoryStore::new();
                (Arc::new(store.clone()), Arc::new(store))
            }
        };

        ServiceContainer {
            user_service: UserService::new(users, CredentialService::new()),
            chirp_service: ChirpService::new(chirps),
            visits: self.visits.unwrap_or_default(),
        }
    }
}

/// Applies the embedded schema migrations.
///
/// # Errors
/// Returns an error if a migration fails to apply.
pub async fn run_migrations(pool: &DbPool) -> anyhow::Result<()> {
    sqlx::migrate!().run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

/// Routes panics through `tracing` so they reach structured logs and exporters.
pub fn setup_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let location = info.location().map(ToString::to_string).unwrap_or_default();
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| info.payload().downcast_ref::<String>().map(String::as_str))
            .unwrap_or("unknown panic payload");
        tracing::error!(panic.location = %location, panic.payload = %payload, "Process panicked");
    }));
}

/// Flips `shutdown_tx` to `true` on SIGINT or SIGTERM.
pub fn spawn_signal_handler(shutdown_tx: watch::Sender<bool>) {
    tokio::spawn(async move {
        let ctrl_c = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(mut signal) => {
                    signal.recv().await;
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to listen for SIGTERM");
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            () = ctrl_c => {},
            () = terminate => {},
        }

        tracing::info!("Shutdown signal received");
        let _ = shutdown_tx.send(true);
    });
}
