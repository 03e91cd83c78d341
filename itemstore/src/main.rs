//! itemstore Server Entry Point

use clap::Parser;
use itemstore::cli::{Cli, Commands};
use itemstore::config::ServerConfig;
use itemstore::{logging, server, AppState};
use tracing::info;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let config = match cli.command {
        Some(Commands::Serve(args)) => ServerConfig::from(args),
        // No subcommand - default to serve
        None => ServerConfig::from_env(),
    };

    info!("itemstore v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new();
    if let Err(e) = server::run(state, &config.bind_addr()).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
