//! API server module for serving entry moderation via REST

pub mod handlers;
pub mod routes;
pub mod server;
pub mod types;

pub use server::serve_api;
pub use server::StoreBackend;
