//! CLI module for itemstore

pub mod serve;

use clap::{Parser, Subcommand};

/// itemstore - In-memory item registry over HTTP
#[derive(Parser, Debug)]
#[command(name = "itemstore")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    ITEMSTORE_HOST          Bind address (fallback: HOST, default: 0.0.0.0)
    ITEMSTORE_PORT          Listen port (fallback: PORT, default: 8000)
    ITEMSTORE_LOG_LEVEL     Log filter (fallback: RUST_LOG, default: info)
    ITEMSTORE_LOG_FORMAT    Log format: text or json (default: text)
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the item server
    Serve(serve::ServeArgs),
}
