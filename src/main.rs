use blogmod::cli::handle_config;
use blogmod::cli::handle_init;
use blogmod::cli::handle_serve;
use blogmod::cli::Cli;
use blogmod::cli::Commands;
use blogmod::logging::init_logging_with_config;
use blogmod::logging::init_logging_with_level;
use blogmod::AppConfig;
use blogmod::Result;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::load()?,
    };

    if cli.verbose {
        init_logging_with_level("debug")?;
    } else {
        init_logging_with_config(Some(&config))?;
    }

    info!("blogmod {} starting", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Init { force } => handle_init(&config, force).await,
        Commands::Serve {
            host,
            port,
            cors,
            in_memory,
        } => handle_serve(&config, host, port, cors, in_memory).await,
        Commands::Config => handle_config(&config),
    }
}
