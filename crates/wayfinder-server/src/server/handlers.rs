//! HTTP request handlers.
//!
//! The graph layer only reports failure as a falsy/empty result (store
//! errors are logged there), so handlers map `false`/`None` to 500 and the
//! checked business conditions to 400.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::warn;

use wayfinder_core::RelationshipRequest;

use crate::server::state::AppState;

/// Health check endpoint.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "message": "Service is up and running" })),
    )
}

/// Clear all Locations and Connections from the configured database.
pub async fn clear_database(State(state): State<AppState>) -> impl IntoResponse {
    if state.graph.clear_database().await {
        (
            StatusCode::OK,
            Json(json!({
                "message": format!("{} Database has been cleared.", state.graph.database())
            })),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Failed to clear database." })),
        )
    }
}

/// Insert a bidirectional connection between two Locations.
///
/// Rejected with 400 before touching the store when the request fails
/// validation or the pair is already connected in either direction.
pub async fn insert_data(
    State(state): State<AppState>,
    Json(payload): Json<RelationshipRequest>,
) -> impl IntoResponse {
    if let Err(e) = payload.validate() {
        warn!(from = %payload.from_node, to = %payload.to_node, "Rejected insert: {e}");
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": e.to_string() })),
        );
    }

    if state
        .graph
        .check_relationship(&payload.from_node, &payload.to_node)
        .await
        .exists()
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Relationship already exists. Skipping creation." })),
        );
    }

    match state.graph.create_relationship(&payload).await {
        Some(created) => (
            StatusCode::OK,
            Json(json!({
                "message": format!(
                    "Relationship created: {} -> {} with distance {} and angle {}",
                    created.from, created.to, payload.distance, payload.angle
                )
            })),
        ),
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Failed to create relationship." })),
        ),
    }
}
