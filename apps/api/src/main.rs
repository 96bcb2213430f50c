mod config;
mod errors;
mod internships;
mod models;
mod routes;
mod scraping;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::scraping::sites::default_sites;
use crate::scraping::webdriver::WebDriverBrowser;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting internship API v{}", env!("CARGO_PKG_VERSION"));

    let browser = WebDriverBrowser::new(&config.webdriver_url);
    info!("WebDriver endpoint: {}", config.webdriver_url);

    let sites = default_sites(config.page_wait);
    info!(
        "Scraping {} sites with a {}ms page wait",
        sites.len(),
        config.page_wait.as_millis()
    );

    let state = AppState {
        browser: Arc::new(browser),
        sites: Arc::new(sites),
    };

    // Public demo endpoint: any origin, method and header.
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
