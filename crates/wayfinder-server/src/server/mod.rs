//! HTTP server setup and routing.

pub mod handlers;
pub mod state;

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::net::SocketAddr;
use tracing::info;

use self::state::AppState;
use crate::config::create_cors_layer;

/// Create the axum application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/neo4j-insert-data", post(handlers::insert_data))
        .route("/neo4j-clear-database", delete(handlers::clear_database))
        .layer(create_cors_layer())
        .with_state(state)
}

/// Run the server on the specified address until ctrl-c.
pub async fn run_server(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install ctrl-c handler");
        return;
    }
    info!("Shutdown signal received");
}
