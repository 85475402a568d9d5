// src/main.rs
mod routes;
mod handlers;
mod models;
mod state;
mod error;
mod dates;
mod metrics;
mod records;
mod workbook;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use dotenvy::dotenv;
use std::net::{SocketAddr, IpAddr, Ipv4Addr};

const DEFAULT_PORT: u16 = 8081;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Create application state
    let app_state = state::AppState::from_env();
    tracing::info!(workbook = %app_state.workbook_path().display(), "Serving users from workbook");

    let app = routes::app(app_state);

    // HOST/PORT override the fixed defaults
    let host: IpAddr = std::env::var("HOST")
        .ok()
        .and_then(|h| h.parse().ok())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    let port = std::env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok()).unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from((host, port));

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => {
            tracing::info!("Server running on {}", addr);
            l
        }
        Err(e) => {
            tracing::error!(%addr, error=%e, "Failed to start server");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error=%e, "Server error");
    }
}
