//! Configuration loading for the Wayfinder server.
//!
//! Settings come from (in priority order):
//! 1. `WAYFINDER__`-prefixed environment variables (`__` separator,
//!    e.g. `WAYFINDER__NEO4J__URI`)
//! 2. Config file (`wayfinder.toml` by default)
//! 3. Defaults

use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};

use wayfinder_graph::GraphConfig;

/// HTTP listener configuration, loaded from the `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind (default: 127.0.0.1:8080).
    #[serde(default = "default_listen")]
    pub listen: String,
}

fn default_listen() -> String {
    "127.0.0.1:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

fn build_config(file_prefix: &str) -> Result<config::Config, config::ConfigError> {
    config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("WAYFINDER")
                .separator("__")
                .try_parsing(true),
        )
        .build()
}

/// Load the Neo4j connection settings from the `[neo4j]` section.
pub fn load_graph_config(file_prefix: &str) -> GraphConfig {
    let defaults = GraphConfig::default();
    match build_config(file_prefix) {
        Ok(c) => GraphConfig {
            uri: c.get_string("neo4j.uri").unwrap_or(defaults.uri),
            user: c.get_string("neo4j.user").unwrap_or(defaults.user),
            password: c.get_string("neo4j.password").unwrap_or(defaults.password),
            database: c.get_string("neo4j.database").unwrap_or(defaults.database),
            ..defaults
        },
        Err(_) => GraphConfig::default(),
    }
}

/// Load the HTTP listener settings from the `[server]` section.
pub fn load_server_config(file_prefix: &str) -> ServerConfig {
    match build_config(file_prefix) {
        Ok(c) => match c.get::<ServerConfig>("server") {
            Ok(server) => server,
            Err(_) => ServerConfig::default(),
        },
        Err(_) => ServerConfig::default(),
    }
}

/// Permissive CORS layer: the service accepts requests from any origin.
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
