//! Interest Proxy
//!
//! This is the main entry point for the application.

use anyhow::Result;
use interest_proxy::{
    config,
    network::HttpClient,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    info!("Starting Interest Proxy v{}", interest_proxy::VERSION);

    // Load configuration
    config::load_dotenv();
    let settings = config::load()?;
    info!("Using Graph API {}", settings.graph.version);

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.graph)?;

    let addr = SocketAddr::new(settings.server.bind_address.parse()?, settings.server.port);

    let state = AppState::new(settings, client);
    if !state.has_token() {
        warn!("FB_ACCESS_TOKEN is not set; /interests will fail until it is configured");
    }

    let app = create_router(state);

    info!("FB Interest Proxy running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
