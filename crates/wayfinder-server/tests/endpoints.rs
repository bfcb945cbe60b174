//! Endpoint tests for the Wayfinder HTTP service against a live Neo4j instance.
//!
//! These tests drive the full router, so they require a running Neo4j with
//! the configured database present.
//! Run with: cargo test --package wayfinder-server --test endpoints -- --ignored
//!
//! Skipped automatically if Neo4j is not available. The tests clear the
//! database, so point them at a dedicated test instance.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use tower::ServiceExt;

use wayfinder_graph::{GraphClient, GraphConfig};
use wayfinder_server::server::{self, state::AppState};

async fn app_or_skip() -> Option<(Router, GraphClient)> {
    let config = GraphConfig::default();
    match GraphClient::connect(&config).await {
        Ok(graph) => {
            let state = AppState {
                graph: graph.clone(),
            };
            Some((server::create_app(state), graph))
        }
        Err(e) => {
            eprintln!("Skipping endpoint test (Neo4j not available): {e}");
            None
        }
    }
}

fn insert_request(from: &str, to: &str, distance: f64, angle: f64) -> Request<Body> {
    let body = serde_json::json!({
        "from_node": from,
        "to_node": to,
        "distance": distance,
        "angle": angle,
    });
    Request::builder()
        .method(Method::POST)
        .uri("/neo4j-insert-data")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn clear_request() -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri("/neo4j-clear-database")
        .body(Body::empty())
        .unwrap()
}

async fn message_of(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    value["message"].as_str().unwrap().to_string()
}

#[tokio::test]
#[ignore = "requires live Neo4j — run with: cargo test --package wayfinder-server --test endpoints -- --ignored"]
async fn test_health_endpoint() {
    let Some((app, _graph)) = app_or_skip().await else {
        return;
    };

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(message_of(response).await, "Service is up and running");
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_insert_same_node_rejected_before_store() {
    let Some((app, graph)) = app_or_skip().await else {
        return;
    };
    assert!(graph.clear_database().await);

    let response = app.oneshot(insert_request("A", "A", 5.0, 0.0)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        message_of(response).await,
        "Cannot create relationship between the same node."
    );

    // The request never reached the store.
    assert_eq!(graph.count_locations().await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_insert_then_duplicate_insert() {
    let Some((app, graph)) = app_or_skip().await else {
        return;
    };
    assert!(graph.clear_database().await);

    let response = app
        .clone()
        .oneshot(insert_request("A", "B", 10.5, 45.0))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let message = message_of(response).await;
    assert!(
        message.starts_with("Relationship created: A -> B"),
        "unexpected message: {message}"
    );

    // Second identical insert is rejected as a duplicate.
    let response = app.oneshot(insert_request("A", "B", 10.5, 45.0)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        message_of(response).await,
        "Relationship already exists. Skipping creation."
    );

    // Store still holds exactly one pair of edges.
    assert_eq!(graph.count_locations().await.unwrap(), 2);
    assert_eq!(graph.count_connections().await.unwrap(), 2);
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_duplicate_detected_in_reverse_direction() {
    let Some((app, graph)) = app_or_skip().await else {
        return;
    };
    assert!(graph.clear_database().await);

    let response = app
        .clone()
        .oneshot(insert_request("A", "B", 10.5, 45.0))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The reversed pair counts as the same relationship.
    let response = app.oneshot(insert_request("B", "A", 10.5, 225.0)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        message_of(response).await,
        "Relationship already exists. Skipping creation."
    );
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_clear_endpoint_names_database() {
    let Some((app, graph)) = app_or_skip().await else {
        return;
    };

    let response = app
        .clone()
        .oneshot(insert_request("A", "B", 1.0, 90.0))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(clear_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        message_of(response).await,
        format!("{} Database has been cleared.", graph.database())
    );
    assert_eq!(graph.count_locations().await.unwrap(), 0);

    // Clearing the now-empty database also succeeds.
    let response = app.oneshot(clear_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
