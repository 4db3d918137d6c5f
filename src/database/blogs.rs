use sqlx::FromRow;

use super::Database;
use crate::models::Blog;
use crate::models::NewBlog;
use crate::Result;

#[derive(Debug, FromRow)]
struct BlogRow {
    id: i64,
    name: String,
    handle: String,
    positive: Option<bool>,
}

impl From<BlogRow> for Blog {
    fn from(row: BlogRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            handle: row.handle,
            polarity: row.positive.into(),
        }
    }
}

impl Database {
    /// Get a blog by id
    pub async fn get_blog(&self, id: i64) -> Result<Option<Blog>> {
        let row = sqlx::query_as::<_, BlogRow>(
            "SELECT id, name, handle, positive FROM blogs WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Blog::from))
    }

    /// List all blogs
    pub async fn get_blogs(&self) -> Result<Vec<Blog>> {
        let rows = sqlx::query_as::<_, BlogRow>(
            "SELECT id, name, handle, positive FROM blogs ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Blog::from).collect())
    }

    /// Create a blog
    pub async fn insert_blog(&self, blog: NewBlog) -> Result<Blog> {
        let row = sqlx::query_as::<_, BlogRow>(
            r"
            INSERT INTO blogs (name, handle, positive)
            VALUES ($1, $2, $3)
            RETURNING id, name, handle, positive
            ",
        )
        .bind(&blog.name)
        .bind(&blog.handle)
        .bind(blog.polarity.as_flag())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }
}
