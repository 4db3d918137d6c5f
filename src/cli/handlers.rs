//! CLI command handlers

use crate::api::serve_api;
use crate::api::StoreBackend;
use crate::cli::output::print_config;
use crate::cli::output::print_info;
use crate::cli::output::print_success;
use crate::cli::output::print_warning;
use crate::database::Database;
use crate::AppConfig;
use crate::Result;

/// Handle database initialization command
pub async fn handle_init(config: &AppConfig, force: bool) -> Result<()> {
    if !force {
        print_warning("This will create the blogs and entries tables.");
        print_warning("This operation is safe - it uses CREATE IF NOT EXISTS.");
        println!("\nUse --force to proceed.");
        return Ok(());
    }

    print_info("Initializing blogmod database...");
    let database = Database::from_config(config).await?;
    database.init_schema().await?;
    print_success("Schema initialized");
    Ok(())
}

/// Handle API server command; CLI arguments take priority over config
pub async fn handle_serve(
    config: &AppConfig,
    host: Option<String>,
    port: Option<u16>,
    cors: bool,
    in_memory: bool,
) -> Result<()> {
    let host = host.unwrap_or_else(|| config.server_host().to_string());
    let port = port.unwrap_or(config.server_port());
    let cors = cors || config.cors_enabled();
    let backend = if in_memory {
        StoreBackend::InMemory
    } else {
        StoreBackend::Postgres
    };

    println!("🚀 Starting blogmod API Server");
    println!("📍 Host: {host}");
    println!("🔌 Port: {port}");
    println!("🌐 CORS: {}", if cors { "Enabled" } else { "Disabled" });
    println!("🗄️  Store: {backend:?}");
    println!();

    serve_api(config, host, port, cors, backend).await
}

/// Handle config display command
pub fn handle_config(config: &AppConfig) -> Result<()> {
    print_config(config);
    Ok(())
}
