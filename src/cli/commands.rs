//! CLI command definitions and argument parsing

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser, Debug)]
#[command(name = "blogmod")]
#[command(about = "Blog entry moderation service")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging (default: info level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to the configuration file (default: config.toml, then config.example.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize database schema
    Init {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Start the REST API server
    Serve {
        /// Host to bind (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
        /// Enable permissive CORS (overrides config)
        #[arg(long)]
        cors: bool,
        /// Keep data in process memory instead of PostgreSQL
        #[arg(long)]
        in_memory: bool,
    },
    /// Show current configuration
    Config,
}
