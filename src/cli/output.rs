//! CLI output formatting utilities

use crate::AppConfig;

/// Print the effective configuration with the database password hidden
pub fn print_config(config: &AppConfig) {
    println!("📋 blogmod Configuration:");
    println!();

    println!("🗄️  Database:");
    println!("  URL: {}", mask_database_url(config.database_url()));
    println!("  Max connections: {}", config.max_connections());
    println!("  Min connections: {}", config.min_connections());
    println!("  Connection timeout: {}s", config.connection_timeout());
    println!();

    println!("📝 Logging:");
    println!("  Level: {}", config.logging.level);
    println!("  Backtrace: {}", config.logging.backtrace);
    println!();

    println!("🌐 Server:");
    println!("  Address: {}:{}", config.server_host(), config.server_port());
    println!("  CORS: {}", config.cors_enabled());
    println!();

    println!("📄 Pagination:");
    println!("  Default page size: {}", config.default_page_size());
    println!("  Max page size: {}", config.max_page_size());
}

/// Mask database URL for logging (hide password)
pub fn mask_database_url(url: &str) -> String {
    if let Ok(parsed) = url::Url::parse(url) {
        if let Some(host) = parsed.host_str() {
            format!(
                "{}://{}@{}:{}{}",
                parsed.scheme(),
                parsed.username(),
                host,
                parsed.port().unwrap_or(5432),
                parsed.path()
            )
        } else {
            "***masked***".to_string()
        }
    } else {
        "***invalid***".to_string()
    }
}

pub fn print_info(msg: &str) {
    println!("ℹ️  {msg}");
}

pub fn print_success(msg: &str) {
    println!("✅ {msg}");
}

pub fn print_warning(msg: &str) {
    println!("⚠️  {msg}");
}
