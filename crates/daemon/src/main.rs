//! Jobtrack - Main Entry Point
//! JSON-RPC server over the job query & statistics engine

mod config;

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, Settings};
use jobtrack_api_rpc::{RpcServer, RpcServerConfig};
use jobtrack_core::application::JobService;
use jobtrack_core::port::{SystemClock, UuidProvider};
use jobtrack_infra_sqlite::{create_pool, run_migrations, SqliteJobRepository};

fn init_logging(format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("jobtrack=info"))
        .context("Failed to create env filter")?;

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        // Production: JSON structured logging
        LogFormat::Json => registry.with(fmt::layer().json()).try_init()?,
        // Development: Pretty formatting with colors
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init()?,
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration (needed to pick the log format)
    let settings = Settings::load().context("Failed to load configuration")?;

    // 2. Initialize logging
    init_logging(settings.log_format)?;
    info!("Jobtrack v{} starting...", jobtrack_core::VERSION);

    // 3. Initialize database
    if !settings.is_in_memory() {
        if let Some(parent) = Path::new(&settings.db_path).parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    info!(db_path = %settings.db_path, "Initializing database...");

    let pool = create_pool(&settings.db_path)
        .await
        .context("DB pool creation failed")?;
    run_migrations(&pool).await.context("Migration failed")?;

    // 4. Setup dependencies (DI wiring)
    let job_repo = Arc::new(SqliteJobRepository::new(pool.clone()));
    let service = Arc::new(JobService::new(
        job_repo,
        Arc::new(UuidProvider),
        Arc::new(SystemClock),
    ));

    // 5. Start JSON-RPC server
    let rpc_config = RpcServerConfig {
        host: settings.rpc_host.clone(),
        port: settings.rpc_port,
    };
    let (addr, rpc_handle) = RpcServer::new(rpc_config, service)
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("RPC server start failed: {}", e))?;

    info!(addr = %addr, "System ready. Press Ctrl+C to shutdown");

    // 6. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received. Exiting gracefully...");

    // 7. Graceful shutdown: stop accepting requests, let in-flight ones finish
    rpc_handle
        .stop()
        .map_err(|e| anyhow::anyhow!("RPC server stop failed: {}", e))?;
    rpc_handle.stopped().await;
    pool.close().await;

    info!("Shutdown complete.");
    Ok(())
}
