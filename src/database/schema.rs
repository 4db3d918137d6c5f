use super::Database;
use crate::BlogModError;
use crate::Result;

impl Database {
    /// Check if database schema is initialized
    /// Returns true if all required tables exist
    pub async fn is_schema_initialized(&self) -> Result<bool> {
        for table_name in ["blogs", "entries"] {
            let exists = sqlx::query_scalar::<_, bool>(
                r"
                SELECT EXISTS (
                    SELECT FROM information_schema.tables
                    WHERE table_schema = 'public'
                    AND table_name = $1
                )
                ",
            )
            .bind(table_name)
            .fetch_one(&self.pool)
            .await?;

            if !exists {
                tracing::debug!("Missing required table: {}", table_name);
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Verify database schema or return helpful error
    pub async fn verify_schema_or_error(&self) -> Result<()> {
        if !self.is_schema_initialized().await? {
            return Err(BlogModError::Custom(
                "Database schema not initialized! Run `blogmod init --force` first.".to_string(),
            ));
        }
        Ok(())
    }

    /// Initialize database schema
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS blogs (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                handle TEXT NOT NULL,
                positive BOOLEAN
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        // No foreign key on blog_id: saving against an unknown blog is allowed
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS entries (
                id BIGSERIAL PRIMARY KEY,
                blog_id BIGINT NOT NULL,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                date TIMESTAMPTZ NOT NULL,
                emoji TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_entries_blog_id ON entries(blog_id)")
            .execute(&self.pool)
            .await?;

        tracing::info!("Database schema initialized");
        Ok(())
    }
}
