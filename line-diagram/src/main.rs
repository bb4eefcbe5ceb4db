use std::process::ExitCode;

use tokio::time::{Instant, MissedTickBehavior};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use line_diagram::config::PanelConfig;
use line_diagram::panel::Panel;
use line_diagram::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match PanelConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    info!(?config, "starting line diagram");

    let state = AppState::new(Panel::new(&config));

    // Render loop: one frame per interval, timed from startup.
    let panel = state.panel.clone();
    let frame_interval = config.frame_interval();
    tokio::spawn(async move {
        let start = Instant::now();
        let mut interval = tokio::time::interval(frame_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            panel.lock().await.tick(start.elapsed());
        }
    });

    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };
    info!(addr = %config.bind_addr, "line diagram listening");
    info!("  GET  /health   - Health check");
    info!("  GET  /stations - Station list");
    info!("  GET  /route    - Route between two stations (?from=&to=)");
    info!("  GET  /frame    - Current LED frame");
    info!("  POST /remote   - Remote key code");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
