use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use event_services::shell::config::AppConfig;
use event_services::shell::state::AppState;
use event_services::shell::workers::run_cost_recalculation;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .init();

    let state = AppState::in_memory();

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let worker = tokio::spawn(run_cost_recalculation(
        state.event_service.clone(),
        config.cost_recalculation_period,
        shutdown_rx,
    ));
    tracing::info!(
        period_secs = config.cost_recalculation_period.as_secs(),
        "cost recalculation scheduled"
    );

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutting down");
    shutdown_tx.send(true)?;
    worker.await?;
    Ok(())
}
