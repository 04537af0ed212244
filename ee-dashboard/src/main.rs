//! ee-dashboard - Employee events report server
//!
//! Serves per-employee and per-team report pages with cumulative event charts,
//! a predicted recruitment risk bar and dated notes.

use anyhow::{Context, Result};
use clap::Parser;
use ee_common::config::{CliOverrides, DashboardConfig, TomlConfig};
use ee_common::db;
use ee_common::{LogisticModel, RiskModel};
use ee_dashboard::{build_router, AppState};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "ee-dashboard", version, about = "Employee events report server")]
struct Cli {
    /// SQLite database with employee, team, employee_events and notes tables
    #[arg(long)]
    database: Option<PathBuf>,

    /// Classifier weights (JSON)
    #[arg(long)]
    model: Option<PathBuf>,

    /// Listen address, e.g. 127.0.0.1:5001
    #[arg(long)]
    bind: Option<String>,

    /// TOML config file (defaults to ~/.config/ee-dashboard/config.toml)
    #[arg(long, env = "EE_CONFIG")]
    config: Option<PathBuf>,

    /// Create the database schema if missing, then continue serving
    #[arg(long)]
    init_db: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Build identification first, before any database delays
    info!(
        "Starting ee-dashboard v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let cli = Cli::parse();
    let toml = TomlConfig::load_or_default(cli.config.as_deref());
    let config = DashboardConfig::resolve(
        CliOverrides {
            database: cli.database,
            model: cli.model,
            bind: cli.bind,
        },
        toml,
    );

    info!("Database path: {}", config.database_path.display());

    if cli.init_db {
        let pool = db::init_database(&config.database_path)
            .await
            .context("Failed to initialize database")?;
        pool.close().await;
    }

    let pool = match db::connect_readonly(&config.database_path).await {
        Ok(pool) => {
            info!("✓ Connected to database (read-only)");
            pool
        }
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    let missing = db::verify_schema(&pool).await?;
    if !missing.is_empty() {
        warn!("Reports will be empty until these tables exist: {}", missing.join(", "));
    }

    let model = load_model(&config)?;

    let state = AppState::new(pool, model);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("ee-dashboard listening on http://{}", config.bind_addr);
    info!("Health check: http://{}/health", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Load the classifier if its file exists
///
/// A missing file only disables the risk chart; a malformed one aborts startup.
fn load_model(config: &DashboardConfig) -> Result<Option<Arc<dyn RiskModel>>> {
    if !config.model_path.exists() {
        warn!(
            "Model file not found at {} (recruitment risk disabled)",
            config.model_path.display()
        );
        return Ok(None);
    }

    let model: Arc<dyn RiskModel> = Arc::new(LogisticModel::load(&config.model_path)?);
    info!("✓ Loaded risk model from {}", config.model_path.display());
    Ok(Some(model))
}
