//! wayfinder-server: HTTP endpoints for the Wayfinder location graph.

pub mod config;
pub mod server;
