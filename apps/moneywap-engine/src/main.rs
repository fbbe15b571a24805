//! MoneyWAP Engine Binary
//!
//! Runs one MoneyWAP execution against a simulated market with paper fills.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin moneywap-engine
//! ```
//!
//! # Environment Variables
//!
//! - `MONEYWAP_CONFIG`: path to the YAML config (default: config.yaml)
//! - `RUST_LOG`: log filter (default: `observability.logging.level`)
//!
//! Any `${VAR}` in the config file is expanded from the environment, and a
//! `.env` file in the working directory or an ancestor is loaded first.

use anyhow::Context;
use moneywap_engine::config::load_config;
use moneywap_engine::infrastructure::host::run_paper_session;
use moneywap_engine::observability::{MetricsConfig, init_metrics};
use moneywap_engine::telemetry::init_tracing;
use tokio::signal;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let path = std::env::var("MONEYWAP_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());
    let config =
        load_config(Some(&path)).with_context(|| format!("loading configuration from {path}"))?;

    init_tracing(&config.observability.logging)?;
    tracing::info!(config = %path, "Starting MoneyWAP engine");

    if config.observability.metrics.enabled {
        init_metrics(&MetricsConfig::try_from(&config.observability.metrics)?)?;
    }

    let shutdown = CancellationToken::new();
    tokio::spawn(shutdown_signal(shutdown.clone()));

    let report = run_paper_session(&config, shutdown).await?;

    tracing::info!(
        status = %report.final_snapshot.status,
        filled = report.final_snapshot.filled_quantity,
        target = report.final_snapshot.target_quantity,
        lots_sent = report.final_snapshot.orders_placed_count,
        notional_spent = %report.final_snapshot.notional_spent,
        ticks = report.ticks,
        cancelled = report.cancelled,
        "MoneyWAP engine stopped"
    );
    Ok(())
}

/// Load .env file from current directory or any ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Cancel `shutdown` on Ctrl+C or SIGTERM.
async fn shutdown_signal(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }

    shutdown.cancel();
}
