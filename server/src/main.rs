mod catalog;
mod config;
mod routes;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; variables may come from the environment.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let catalog = match catalog::HttpCatalog::from_config(&config) {
        Ok(client) => {
            tracing::info!(base_url = client.base_url(), cache_listings = config.cache_listings, "catalog client initialized");
            client
        }
        Err(e) => {
            tracing::error!(error = %e, "catalog client init failed");
            std::process::exit(1);
        }
    };

    let state = state::AppState::new(Arc::new(catalog));

    let app = match routes::app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "router init failed");
            std::process::exit(1);
        }
    };

    let port = config.port;
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%port, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(%port, "showcase listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
    }
}
