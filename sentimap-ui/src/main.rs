//! Sentimap web service - main entry point
//!
//! Serves the registration, sentiment analysis, history, and map endpoints
//! plus the embedded HTML UI.

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use sentimap_common::config::{database_path, ensure_root_folder, resolve_root_folder};
use sentimap_common::db::init::init_database;
use sentimap_ui::analysis::SentimentAnalyzer;
use sentimap_ui::geo::IpApiClient;
use sentimap_ui::{build_router, AppState};

/// Command-line arguments for sentimap-ui
#[derive(Parser, Debug)]
#[command(name = "sentimap-ui")]
#[command(about = "Sentimap sentiment analysis web application")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "5730", env = "SENTIMAP_PORT")]
    port: u16,

    /// Root folder for the database and runtime data
    #[arg(short, long)]
    root_folder: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Sentimap UI (sentimap-ui) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    // Root folder: CLI argument, then SENTIMAP_ROOT_FOLDER, then TOML
    // config, then the platform data directory
    let root_folder = resolve_root_folder(args.root_folder.as_deref(), "SENTIMAP_ROOT_FOLDER");
    ensure_root_folder(&root_folder)?;

    let db_path = database_path(&root_folder);
    info!("Database path: {}", db_path.display());

    let pool = init_database(&db_path).await?;

    let state = AppState::new(
        pool,
        Arc::new(SentimentAnalyzer::with_default_scorer()),
        Arc::new(IpApiClient::new()),
    );
    let app = build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("sentimap-ui listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
