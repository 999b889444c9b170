use std::process::ExitCode;

use chrono::Utc;
use tracing_subscriber::EnvFilter;

use station_board::cache::BoardCache;
use station_board::config::ServerConfig;
use station_board::feed::FileFeed;
use station_board::schedules::ScheduleStore;
use station_board::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // Load every station up front so the first requests are served warm
    let schedules = ScheduleStore::new(FileFeed::new(&config.data_dir));
    match schedules.refresh(Utc::now()).await {
        Ok(count) => tracing::info!(
            stations = count,
            data_dir = %config.data_dir.display(),
            "loaded schedules"
        ),
        Err(e) => tracing::warn!(error = %e, "no schedules loaded; stations will load on demand"),
    }

    // Reload schedules in the background; each reload bumps the version so
    // cached boards for the old schedule are no longer hit
    let schedules_refresh = schedules.clone();
    let reload_interval = config.feed_reload_interval;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(reload_interval);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            match schedules_refresh.refresh(Utc::now()).await {
                Ok(count) => tracing::info!(stations = count, "reloaded schedules"),
                Err(e) => tracing::warn!(error = %e, "failed to reload schedules"),
            }
        }
    });

    let state = AppState::new(schedules, BoardCache::new(&config.cache), config.board.clone());
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %config.addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(addr = %config.addr, "station board listening");
    tracing::info!("  GET /health                     - Health check");
    tracing::info!("  GET /board/:country/:station    - Station board (?view=, ?locale=)");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
