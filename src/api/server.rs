//! HTTP server implementation

use std::sync::Arc;

use tower_http::compression::CompressionLayer;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::AppState;
use crate::api::routes;
use crate::config::AppConfig;
use crate::database::Database;
use crate::service::EntryService;
use crate::store::MemoryStore;
use crate::store::RecordStore;
use crate::Result;

/// Where entries and blogs are kept while serving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    InMemory,
}

/// Start the API server
pub async fn serve_api(
    config: &AppConfig,
    host: String,
    port: u16,
    enable_cors: bool,
    backend: StoreBackend,
) -> Result<()> {
    info!("Starting blogmod API server...");

    let store: Arc<dyn RecordStore> = match backend {
        StoreBackend::Postgres => {
            let database = Database::from_config(config).await?;
            database.verify_schema_or_error().await?;
            Arc::new(database)
        }
        StoreBackend::InMemory => {
            info!("Using in-memory store, data will not survive a restart");
            Arc::new(MemoryStore::new())
        }
    };

    let state = AppState {
        service: EntryService::new(store),
        pagination: config.pagination.clone(),
    };

    let mut app = routes::app(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    if enable_cors {
        info!("CORS enabled");
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("API server listening on http://{}", addr);
    info!("Available endpoints:");
    info!("  GET    /api/health              - Health check");
    info!("  GET    /api/entries             - List entries (page, size)");
    info!("  POST   /api/entries             - Create entry (moderated)");
    info!("  PUT    /api/entries             - Update entry (moderated)");
    info!("  DELETE /api/entries?keywords=   - Delete entries matching keywords");
    info!("  GET    /api/entries/:id         - Get entry");
    info!("  DELETE /api/entries/:id         - Delete entry (optionally ?keywords=)");
    info!("  GET    /api/blogs               - List blogs");
    info!("  POST   /api/blogs               - Create blog");
    info!("  GET    /api/blogs/:id           - Get blog");

    axum::serve(listener, app).await?;

    Ok(())
}
