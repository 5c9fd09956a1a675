use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use metro_server::catalog::{CatalogError, StationCatalog, load_corrections};
use metro_server::config::{DataSource, ServerConfig};
use metro_server::network::Network;
use metro_server::planner::RouteConfig;
use metro_server::web::{AppState, create_router};

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
            error!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Everything up to here must succeed before anything is served
    let catalog = match load_catalog(&config) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("failed to load station data: {e}");
            return ExitCode::FAILURE;
        }
    };

    let network = match Network::build(&catalog, RouteConfig::default()) {
        Ok(network) => network,
        Err(e) => {
            error!("failed to build network: {e}");
            return ExitCode::FAILURE;
        }
    };

    let app = create_router(
        AppState::new(network),
        &config.static_dir,
        &config.index_file,
    );

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, "failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Istanbul Metro API listening on http://{}", config.bind_addr);
    info!("  GET  /api/stations     - Stations by line");
    info!("  GET  /api/lines        - Line colours");
    info!("  GET  /api/station/{{id}} - Station details");
    info!("  GET  /api/search?q=    - Search stations");
    info!("  POST /api/route        - Shortest route");
    info!("  GET  /api/stats        - Network statistics");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Read the configured station data and apply corrections, if any.
fn load_catalog(config: &ServerConfig) -> Result<StationCatalog, CatalogError> {
    let mut catalog = match &config.source {
        DataSource::Catalog(path) => {
            info!(path = %path.display(), "loading station catalog");
            StationCatalog::load(path)?
        }
        DataSource::Feed(path) => {
            info!(path = %path.display(), "loading station feed");
            StationCatalog::load_feed(path)?
        }
    };

    if let Some(path) = &config.corrections {
        let corrections = load_corrections(path)?;
        let applied = catalog.apply(&corrections);
        info!(
            path = %path.display(),
            applied,
            total = corrections.len(),
            "applied corrections"
        );
    }

    info!(
        lines = catalog.line_count(),
        records = catalog.record_count(),
        "station data loaded"
    );

    Ok(catalog)
}
