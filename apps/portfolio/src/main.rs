mod catalog;
mod config;
mod contact;
mod content;
mod errors;
mod models;
mod og;
mod pages;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::{ContactRelay, ContactService, HttpContactRelay};
use crate::content::ContentStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; only malformed values fail startup
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    // Load site content (built-in defaults for missing files)
    let content = ContentStore::load(&config.content_dir)
        .await
        .with_context(|| format!("loading content from {}", config.content_dir.display()))?;

    // Initialize contact relay; without an endpoint the form hands off to mailto
    let relay: Option<Arc<dyn ContactRelay>> = match &config.contact_endpoint {
        Some(endpoint) => {
            let relay = HttpContactRelay::new(
                endpoint.clone(),
                Duration::from_secs(config.contact_timeout_secs),
            )
            .context("building contact relay client")?;
            info!("Contact relay initialized (endpoint: {})", relay.endpoint());
            Some(Arc::new(relay) as Arc<dyn ContactRelay>)
        }
        None => {
            info!("No CONTACT_ENDPOINT set, contact form will use mailto fallback");
            None
        }
    };
    let contact = ContactService::new(relay, config.contact_email.clone());

    // Build app state
    let state = AppState {
        config: config.clone(),
        content: Arc::new(content),
        contact,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
