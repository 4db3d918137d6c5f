//! Logging configuration for blogmod

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

use crate::Result;

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "blogmod.log";

/// Initialize logging system with file output
pub fn init_logging() -> Result<()> {
    init_logging_with_config(None)
}

/// Initialize logging with configuration
pub fn init_logging_with_config(config: Option<&crate::config::AppConfig>) -> Result<()> {
    let (env_filter, level) = if let Some(config) = config {
        let level = config.logging.level.as_str();
        (EnvFilter::new(format!("{level},blogmod={level}")), level)
    } else {
        // Fallback to environment variable or default
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,blogmod=debug"));
        (filter, "info")
    };

    install(env_filter, level)
}

/// Initialize logging with custom log level
pub fn init_logging_with_level(level: &str) -> Result<()> {
    install(EnvFilter::new(format!("{level},blogmod={level}")), level)
}

fn install(env_filter: EnvFilter, level: &str) -> Result<()> {
    let logs_dir = Path::new(LOG_DIR);
    if !logs_dir.exists() {
        std::fs::create_dir_all(logs_dir)?;
    }

    let file_appender = tracing_appender::rolling::daily(LOG_DIR, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);

    let file_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(non_blocking)
        .with_ansi(false); // No colors in file

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| crate::BlogModError::Custom(format!("Failed to install logger: {e}")))?;

    tracing::info!("Logging initialized with level: {} - console and file output enabled", level);
    tracing::info!("Log files will be saved to: {}/{}.YYYY-MM-DD", LOG_DIR, LOG_FILE);

    keep_guard(guard);
    Ok(())
}

/// The file writer flushes until its guard drops; logging lives for the process.
fn keep_guard(guard: WorkerGuard) {
    std::mem::forget(guard);
}

/// Initialize simple logging for testing
pub fn init_simple_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_max_level(tracing::Level::INFO)
        .try_init()
        .map_err(|e| crate::BlogModError::Custom(format!("Failed to install logger: {e}")))?;

    tracing::info!("Simple logging initialized");
    Ok(())
}
