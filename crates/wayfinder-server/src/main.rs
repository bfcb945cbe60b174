//! CLI entry point for the Wayfinder HTTP service.

use clap::Parser;
use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use wayfinder_graph::GraphClient;
use wayfinder_server::config::{load_graph_config, load_server_config};
use wayfinder_server::server::{self, state::AppState};

#[derive(Parser)]
#[command(name = "wayfinder-server")]
#[command(about = "HTTP service for the Wayfinder location graph")]
struct Cli {
    /// Listen address override (e.g., 0.0.0.0:8080).
    #[arg(short, long)]
    listen: Option<String>,

    /// Config file prefix (default: wayfinder).
    #[arg(short, long, default_value = "wayfinder")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).json().init();

    let cli = Cli::parse();
    let graph_config = load_graph_config(&cli.config);
    let server_config = load_server_config(&cli.config);

    // Connect once; the client is cloned into every handler.
    let graph = GraphClient::connect(&graph_config).await?;

    let state = AppState {
        graph: graph.clone(),
    };
    let app = server::create_app(state);

    let listen = cli.listen.unwrap_or(server_config.listen);
    let addr: SocketAddr = listen
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid listen address {listen}: {e}"))?;

    server::run_server(app, addr).await?;

    // Handler clones are gone once the server future returns.
    graph.close();
    Ok(())
}
