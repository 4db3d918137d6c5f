//! Record store abstraction used by the entry service

use futures::future::BoxFuture;

use crate::models::Blog;
use crate::models::Entry;
use crate::models::EntryDraft;
use crate::models::NewBlog;
use crate::Result;

mod memory;

pub use memory::MemoryStore;

/// Key-addressed storage for blogs and entries.
///
/// Implementations own write serialization for a given id.
pub trait RecordStore: Send + Sync {
    fn find_blog(&self, id: i64) -> BoxFuture<'_, Result<Option<Blog>>>;

    fn list_blogs(&self) -> BoxFuture<'_, Result<Vec<Blog>>>;

    fn create_blog(&self, blog: NewBlog) -> BoxFuture<'_, Result<Blog>>;

    fn find_entry(&self, id: i64) -> BoxFuture<'_, Result<Option<Entry>>>;

    /// Entries ordered by id ascending
    fn list_entries(&self, offset: i64, limit: i64) -> BoxFuture<'_, Result<Vec<Entry>>>;

    fn count_entries(&self) -> BoxFuture<'_, Result<u64>>;

    /// Entries whose title or content contains `text`, ignoring case
    fn search_entries<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<Vec<Entry>>>;

    /// Insert when `draft.id` is `None`, update otherwise
    fn save_entry(&self, draft: EntryDraft) -> BoxFuture<'_, Result<Entry>>;

    fn delete_entry(&self, id: i64) -> BoxFuture<'_, Result<()>>;

    fn delete_entries<'a>(&'a self, ids: &'a [i64]) -> BoxFuture<'a, Result<()>>;
}
