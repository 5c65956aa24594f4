mod config;
mod error;
mod routes;
mod state;

use std::process::ExitCode;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "share-server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let state = state::AppState::new(&config)?;
    let app = routes::app(state)?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .map_err(ServerError::Bind)?;

    match &config.api_upstream {
        Some(upstream) => tracing::info!(port = config.port, %upstream, "share-server listening"),
        None => tracing::info!(port = config.port, "share-server listening; /api forwarding disabled"),
    }
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
