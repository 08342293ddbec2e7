use std::net::SocketAddr;

use rail_client::api::HttpRailApi;
use rail_client::clock::SystemClock;
use rail_client::config::RailConfig;
use rail_client::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Provider endpoints come from RAIL_STATIONS_URL, RAIL_DEPARTURES_URL
    // and RAIL_ROUTES_URL
    let config = RailConfig::from_env()?;
    info!(
        stations = %config.directory_endpoint,
        departures = %config.departures_endpoint,
        routes = %config.routes_endpoint,
        timeout_secs = config.timeout_secs,
        "loaded provider configuration"
    );

    let api = HttpRailApi::from_config(&config, SystemClock)?;
    let app = create_router(AppState::new(api));

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("Rail client listening on http://{addr}");
    info!("  GET  /health                - Health check");
    info!("  GET  /api/stations          - All station names");
    info!("  GET  /api/stations/resolve  - Resolve a station name (?name=)");
    info!("  GET  /api/departures        - Real-time departures (?station=)");
    info!("  GET  /api/routes            - Routes (?from=&to=&time=&date=)");
    info!("  GET  /api/routes/next       - Routes in the next hour");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
