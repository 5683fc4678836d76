pub mod init;
pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Portfolio site backend: blog, services catalog and contact inbox", long_about = None)]
pub struct Cli {
    #[arg(short, long, env = "FOLIO_CONFIG", default_value = "folio.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a starter config file and data directory
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
        #[arg(long)]
        name: Option<String>,
    },
    /// Run migrations and start the API server
    Serve {
        /// Overrides server.host from the config file
        #[arg(short = 'H', long)]
        host: Option<String>,
        /// Overrides server.port from the config file
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Apply pending database migrations
    Migrate,
}
