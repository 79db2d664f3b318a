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

use chirpy_server::config::Config;
use chirpy_server::{AppBuilder, api, storage, telemetry};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::sync::watch;
use tracing::Instrument;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::load();
    let telemetry_guard = telemetry::init_telemetry(&config.telemetry)?;

    chirpy_server::setup_panic_hook();

    let boot_span = tracing::info_span!("boot_server");
    let (listener, app_router, mut shutdown_rx) = async {
        // Phase 1: Infrastructure Setup
        let mut builder = AppBuilder::new(config.clone());
        if let Some(url) = &config.database.url {
            let pool = storage::init_pool(&config.database, url).await?;
            chirpy_server::run_migrations(&pool).await?;
            builder = builder.with_database(pool);
        }

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        chirpy_server::spawn_signal_handler(shutdown_tx);

        // Phase 2: Component Wiring
        let services = builder.build();
        let app_router = api::app_router(config.clone(), services);

        // Phase 3: Listener
        let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
        tracing::info!(address = %addr, platform = %config.platform, dev_mode = config.is_dev(), "listening");
        let listener = tokio::net::TcpListener::bind(addr).await?;

        Ok::<_, anyhow::Error>((listener, app_router, shutdown_rx))
    }
    .instrument(boot_span)
    .await?;

    // Phase 4: Serve until a shutdown signal, then drain in-flight requests
    let mut server_rx = shutdown_rx.clone();
    let server = axum::serve(listener, app_router)
        .with_graceful_shutdown(async move {
            let _ = server_rx.wait_for(|&s| s).await;
        })
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => {
            if let Err(e) = result {
                tracing::error!(error = %e, "Server error");
            }
        }
        () = async { let _ = shutdown_rx.wait_for(|&s| s).await; } => {
            let drain_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
            match tokio::time::timeout(drain_timeout, &mut server).await {
                Ok(Ok(())) => tracing::info!("Server drained"),
                Ok(Err(e)) => tracing::error!(error = %e, "Server error during shutdown"),
                Err(_) => tracing::warn!("Timeout waiting for in-flight requests to finish."),
            }
        }
    }

    telemetry_guard.shutdown();
    Ok(())
}
