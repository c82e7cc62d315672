//! `bcodesd` — the building-code registry server.
//!
//! Usage:
//!   bcodesd [--listen <addr>] [--db <path>]
//!
//! Both flags fall back to the `BCODES_LISTEN` / `BCODES_DB` environment
//! variables, then to local defaults.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use bcodes_core::Module;
use bcodes_registry::service::RegistryService;
use bcodes_registry::RegistryModule;
use bcodes_store::SqliteStore;

/// Building-code registry server.
#[derive(Parser, Debug)]
#[command(name = "bcodesd", about = "Building-code registry server")]
struct Cli {
    /// Listen address.
    #[arg(long = "listen", env = "BCODES_LISTEN", default_value = "0.0.0.0:8080")]
    listen: String,

    /// Path to the SQLite database file.
    #[arg(long = "db", env = "BCODES_DB", default_value = "building-codes.sqlite")]
    db: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Initialize the record store.
    let store = SqliteStore::open(&cli.db)
        .map_err(|e| anyhow::anyhow!("failed to open record store: {}", e))?;
    info!("Record store opened at {}", cli.db.display());

    let registry = RegistryModule::new(RegistryService::new(Box::new(store)));
    info!("Registry module initialized");

    // Build router.
    let module_routes = vec![(registry.name(), registry.routes())];
    let app = bcodesd::routes::build_router(module_routes);

    // Start server.
    let listener = tokio::net::TcpListener::bind(&cli.listen).await?;
    info!("bcodesd listening on {}", cli.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
