//! # quotesvcd — quote service daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize the `PostgreSQL` connection pool
//! - Construct the repository implementation (adapter)
//! - Construct the application service, injecting the repository via its port trait
//! - Build the axum router, injecting the application service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT): drain in-flight requests,
//!   then close the pool
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use quotesvc_adapter_http_axum::router;
use quotesvc_adapter_http_axum::state::AppState;
use quotesvc_adapter_storage_postgres_sqlx::PgQuoteRepository;
use quotesvc_app::services::quote_service::QuoteService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    tracing::info!("connecting to database");
    let db = quotesvc_adapter_storage_postgres_sqlx::Config {
        user: config.database.user.clone(),
        password: config.database.password.clone(),
        name: config.database.name.clone(),
        host: config.database.host.clone(),
        port: config.database.port,
        ssl_mode: config.database.ssl_mode.clone(),
    }
    .build()
    .await?;
    tracing::info!("connected to database");

    // Repository and service
    let quote_repo = PgQuoteRepository::new(db.pool().clone());
    let quote_service = QuoteService::new(quote_repo);

    // HTTP
    let state = AppState::new(quote_service);
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("closing database connection");
    db.close().await;
    tracing::info!("shutdown complete");

    Ok(())
}

/// Resolve when the process receives SIGINT or SIGTERM.
///
/// If a handler cannot be installed the corresponding branch stays pending
/// so the other signal can still drive the shutdown.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install interrupt handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received, draining in-flight requests");
}
