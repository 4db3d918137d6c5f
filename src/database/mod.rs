use futures::future::BoxFuture;
use futures::FutureExt;
use sqlx::PgPool;

use crate::models::Blog;
use crate::models::Entry;
use crate::models::EntryDraft;
use crate::models::NewBlog;
use crate::store::RecordStore;
use crate::Result;

mod blogs;
mod entries;
mod schema;

/// Database connection pool wrapper
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new database instance from configuration
    pub async fn from_config(config: &crate::config::AppConfig) -> Result<Self> {
        let pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections())
            .min_connections(config.min_connections())
            .acquire_timeout(std::time::Duration::from_secs(config.connection_timeout()));

        let pool = pool_options.connect(config.database_url()).await?;

        tracing::info!(
            "Database pool configured: max_connections={}, min_connections={}",
            config.max_connections(),
            config.min_connections()
        );

        Ok(Self::new(pool))
    }

    /// Get a reference to the database pool for raw queries
    #[must_use]
    pub const fn pool(&self) -> &sqlx::PgPool {
        &self.pool
    }
}

impl RecordStore for Database {
    fn find_blog(&self, id: i64) -> BoxFuture<'_, Result<Option<Blog>>> {
        self.get_blog(id).boxed()
    }

    fn list_blogs(&self) -> BoxFuture<'_, Result<Vec<Blog>>> {
        self.get_blogs().boxed()
    }

    fn create_blog(&self, blog: NewBlog) -> BoxFuture<'_, Result<Blog>> {
        self.insert_blog(blog).boxed()
    }

    fn find_entry(&self, id: i64) -> BoxFuture<'_, Result<Option<Entry>>> {
        self.get_entry(id).boxed()
    }

    fn list_entries(&self, offset: i64, limit: i64) -> BoxFuture<'_, Result<Vec<Entry>>> {
        self.get_entries(offset, limit).boxed()
    }

    fn count_entries(&self) -> BoxFuture<'_, Result<u64>> {
        self.get_entry_count().boxed()
    }

    fn search_entries<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<Vec<Entry>>> {
        self.search_entries_by_title_or_content(text).boxed()
    }

    fn save_entry(&self, draft: EntryDraft) -> BoxFuture<'_, Result<Entry>> {
        async move {
            match draft.id {
                Some(id) => self.update_entry(id, draft).await,
                None => self.insert_entry(draft).await,
            }
        }
        .boxed()
    }

    fn delete_entry(&self, id: i64) -> BoxFuture<'_, Result<()>> {
        self.delete_entry_by_id(id).boxed()
    }

    fn delete_entries<'a>(&'a self, ids: &'a [i64]) -> BoxFuture<'a, Result<()>> {
        self.delete_entries_by_ids(ids).boxed()
    }
}
