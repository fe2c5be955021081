//! Cafe Gateway - main entry point
//!
//! Loads the city catalog once and serves `/cafe` lookups over HTTP.

use anyhow::{Context, Result};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cafe_gateway::{router, AppConfig, AppState, CityCatalog};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,cafe_gateway=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Cafe Gateway");

    let config = AppConfig::from_env();
    tracing::info!("Configuration loaded: {:?}", config);

    let catalog = match &config.dataset_path {
        Some(path) => CityCatalog::from_json_file(path)
            .with_context(|| format!("Failed to load dataset {}", path.display()))?,
        None => CityCatalog::builtin(),
    };
    tracing::info!(
        source = %config.dataset_path.as_deref().map(|p| p.display().to_string()).unwrap_or_else(|| "builtin".into()),
        cities = catalog.city_count(),
        "City catalog loaded"
    );

    let addr = config.bind_addr();
    let state = Arc::new(AppState::new(catalog));

    let app = router::create_router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Cafe gateway listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
