use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::Database;
use crate::models::Entry;
use crate::models::EntryDraft;
use crate::BlogModError;
use crate::Result;

const ENTRY_COLUMNS: &str = "id, blog_id, title, content, date, emoji";

#[derive(Debug, FromRow)]
struct EntryRow {
    id: i64,
    blog_id: i64,
    title: String,
    content: String,
    date: DateTime<Utc>,
    emoji: String,
}

impl TryFrom<EntryRow> for Entry {
    type Error = BlogModError;

    fn try_from(row: EntryRow) -> Result<Self> {
        Ok(Self {
            id: row.id,
            blog_id: row.blog_id,
            title: row.title,
            content: row.content,
            date: row.date,
            emoji: row.emoji.parse()?,
        })
    }
}

fn into_entries(rows: Vec<EntryRow>) -> Result<Vec<Entry>> {
    rows.into_iter().map(Entry::try_from).collect()
}

impl Database {
    /// Get an entry by id
    pub async fn get_entry(&self, id: i64) -> Result<Option<Entry>> {
        let row = sqlx::query_as::<_, EntryRow>(&format!(
            "SELECT {ENTRY_COLUMNS} FROM entries WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Entry::try_from).transpose()
    }

    /// Get a slice of entries ordered by id
    pub async fn get_entries(&self, offset: i64, limit: i64) -> Result<Vec<Entry>> {
        let rows = sqlx::query_as::<_, EntryRow>(&format!(
            "SELECT {ENTRY_COLUMNS} FROM entries ORDER BY id LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        into_entries(rows)
    }

    /// Count all entries
    pub async fn get_entry_count(&self) -> Result<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM entries")
            .fetch_one(&self.pool)
            .await?;

        Ok(count as u64)
    }

    /// Find entries whose title or content contains `text`, ignoring case.
    ///
    /// `strpos` keeps `%` and `_` in the query literal.
    pub async fn search_entries_by_title_or_content(&self, text: &str) -> Result<Vec<Entry>> {
        let rows = sqlx::query_as::<_, EntryRow>(&format!(
            r"
            SELECT {ENTRY_COLUMNS} FROM entries
            WHERE strpos(lower(content), lower($1)) > 0
               OR strpos(lower(title), lower($1)) > 0
            ORDER BY id
            "
        ))
        .bind(text)
        .fetch_all(&self.pool)
        .await?;

        into_entries(rows)
    }

    /// Insert a new entry
    pub async fn insert_entry(&self, draft: EntryDraft) -> Result<Entry> {
        let date = draft.date.unwrap_or_else(Utc::now);
        let row = sqlx::query_as::<_, EntryRow>(&format!(
            r"
            INSERT INTO entries (blog_id, title, content, date, emoji)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {ENTRY_COLUMNS}
            "
        ))
        .bind(draft.blog_id)
        .bind(&draft.title)
        .bind(&draft.content)
        .bind(date)
        .bind(draft.emoji.as_str())
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    /// Overwrite an existing entry; a missing date keeps the stored one
    pub async fn update_entry(&self, id: i64, draft: EntryDraft) -> Result<Entry> {
        let row = sqlx::query_as::<_, EntryRow>(&format!(
            r"
            UPDATE entries
            SET blog_id = $2, title = $3, content = $4,
                date = COALESCE($5, date), emoji = $6
            WHERE id = $1
            RETURNING {ENTRY_COLUMNS}
            "
        ))
        .bind(id)
        .bind(draft.blog_id)
        .bind(&draft.title)
        .bind(&draft.content)
        .bind(draft.date)
        .bind(draft.emoji.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or(BlogModError::EntryNotFound(id))?.try_into()
    }

    /// Delete one entry
    pub async fn delete_entry_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Delete a set of entries in one statement
    pub async fn delete_entries_by_ids(&self, ids: &[i64]) -> Result<()> {
        if ids.is_empty() {
            return Ok(());
        }
        let result = sqlx::query("DELETE FROM entries WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await?;
        tracing::debug!("Deleted {} entries", result.rows_affected());
        Ok(())
    }
}
