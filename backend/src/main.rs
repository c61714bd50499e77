//! Main entry point for the student progress backend.
//!
//! This file initializes logging, loads configuration, constructs the single
//! store client, and registers all API routes and middleware.
//! It orchestrates the application's startup and defines its overall structure.

use std::sync::Arc;

use adapters::SupabaseStore;
use backend::{api, AppState, Config};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let store = Arc::new(SupabaseStore::new(&config.store_url, &config.store_key));
    let state = Arc::new(AppState::new(store));

    let app = api::router(state);
    let listener = TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("listening on {}", config.listen_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
