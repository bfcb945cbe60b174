//! App state for the axum server.
//!
//! Built once in `main` and injected into every handler; no lazy global
//! initialization, so there is no first-request race.

use wayfinder_graph::GraphClient;

#[derive(Clone)]
pub struct AppState {
    pub graph: GraphClient,
}
