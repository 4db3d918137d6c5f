pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod logging;
pub mod models;
pub mod moderation;
pub mod service;
pub mod store;

#[cfg(test)]
mod errors_tests;
#[cfg(test)]
mod models_tests;

pub use config::AppConfig;
pub use errors::*;
pub use service::EntryService;
