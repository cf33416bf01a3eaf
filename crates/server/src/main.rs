//! Medication Server
//!
//! Loads an optional `.env` file, connects to PostgreSQL, ensures the
//! schema exists and serves the medication REST API until interrupted.

use std::sync::Arc;

use clap::Parser;
use medication_persistence::core::MedicationStorage;
use medication_rest::{ServerConfig, create_app_with_shared_storage, init_logging};
use tracing::{error, info};

#[cfg(feature = "postgres")]
use medication_persistence::backends::postgres::PostgresBackend;

/// Connects to PostgreSQL and creates the schema if needed.
#[cfg(feature = "postgres")]
async fn create_postgres_backend(config: &ServerConfig) -> anyhow::Result<PostgresBackend> {
    let pg_config = config.postgres_config();
    info!(
        host = %pg_config.host,
        port = pg_config.port,
        dbname = %pg_config.dbname,
        "Initializing PostgreSQL backend"
    );

    let backend = PostgresBackend::new(pg_config).await?;
    backend.init_schema().await?;
    info!("Connected to database");

    Ok(backend)
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
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
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, stopping server...");
}

/// Serves the app until a shutdown signal, then closes the storage.
async fn serve<S>(storage: Arc<S>, config: &ServerConfig) -> anyhow::Result<()>
where
    S: MedicationStorage + 'static,
{
    let app = create_app_with_shared_storage(Arc::clone(&storage), config.clone());

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    storage.close().await?;
    info!("Server stopped");
    Ok(())
}

#[cfg(feature = "postgres")]
async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let backend = create_postgres_backend(&config).await?;
    serve(Arc::new(backend), &config).await
}

/// Fallback when the postgres feature is not enabled.
#[cfg(not(feature = "postgres"))]
async fn run(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The postgres backend requires the 'postgres' feature. \
         Build with: cargo build -p medication-server --features postgres"
    )
}

#[tokio::main]
async fn main() {
    // A missing .env file is not an error; real environment variables win.
    let dotenv = dotenvy::dotenv();

    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(e) = dotenv {
        if !e.not_found() {
            error!(error = %e, "Failed to load .env file");
        }
    }

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        release_target = %config.release_target,
        db_driver = %config.db_driver,
        "Starting medication server"
    );

    if let Err(e) = run(config).await {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }
}
