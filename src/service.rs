//! Entry service: moderated saves, lookups and keyword deletion

use std::sync::Arc;

use tracing::debug;

use crate::moderation::moderate;
use crate::models::Blog;
use crate::models::Entry;
use crate::models::EntryDraft;
use crate::models::NewBlog;
use crate::models::Page;
use crate::models::PageRequest;
use crate::store::RecordStore;
use crate::Result;

/// Service for managing entries on top of a [`RecordStore`]
#[derive(Clone)]
pub struct EntryService {
    store: Arc<dyn RecordStore>,
}

impl std::fmt::Debug for EntryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryService").finish_non_exhaustive()
    }
}

impl EntryService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Save an entry after moderating it against its blog.
    ///
    /// When the referenced blog does not exist the draft is persisted
    /// without any checks.
    pub async fn save(&self, draft: EntryDraft) -> Result<Entry> {
        match self.store.find_blog(draft.blog_id).await? {
            Some(blog) => moderate(&blog, &draft)?,
            None => debug!(
                "Blog {} not found, saving entry without moderation",
                draft.blog_id
            ),
        }

        debug!("Request to save Entry : {:?}", draft);
        self.store.save_entry(draft).await
    }

    /// Get one page of entries
    pub async fn find_all(&self, request: PageRequest) -> Result<Page<Entry>> {
        debug!("Request to get all Entries, page {}", request.page);
        let total = self.store.count_entries().await?;
        let content = self
            .store
            .list_entries(request.offset(), request.limit())
            .await?;
        Ok(Page::new(content, request, total))
    }

    /// Get one entry by id
    pub async fn find_one(&self, id: i64) -> Result<Option<Entry>> {
        debug!("Request to get Entry : {}", id);
        self.store.find_entry(id).await
    }

    /// Delete the entry by id
    pub async fn delete(&self, id: i64) -> Result<()> {
        debug!("Request to delete Entry : {}", id);
        self.store.delete_entry(id).await
    }

    /// Delete every entry whose title or content contains `keywords`.
    ///
    /// Returns the number of entries removed.
    pub async fn delete_by_keywords(&self, keywords: &str) -> Result<usize> {
        let matches = self.store.search_entries(keywords).await?;
        if matches.is_empty() {
            return Ok(0);
        }

        let ids: Vec<i64> = matches.iter().map(|e| e.id).collect();
        debug!("Request to delete Entries {:?} matching {:?}", ids, keywords);
        self.store.delete_entries(&ids).await?;
        Ok(ids.len())
    }

    /// Delete entry `id` only if it matches `keywords`; other matches stay.
    ///
    /// Returns whether the entry was deleted.
    pub async fn delete_by_keywords_for_entry(&self, id: i64, keywords: &str) -> Result<bool> {
        let matches = self.store.search_entries(keywords).await?;
        let found = matches.iter().any(|e| e.id == id);
        debug!("Entry {} matches {:?}: {}", id, keywords, found);

        if found {
            self.delete(id).await?;
        }
        Ok(found)
    }

    pub async fn create_blog(&self, blog: NewBlog) -> Result<Blog> {
        debug!("Request to save Blog : {:?}", blog);
        self.store.create_blog(blog).await
    }

    pub async fn find_blog(&self, id: i64) -> Result<Option<Blog>> {
        debug!("Request to get Blog : {}", id);
        self.store.find_blog(id).await
    }

    pub async fn list_blogs(&self) -> Result<Vec<Blog>> {
        debug!("Request to get all Blogs");
        self.store.list_blogs().await
    }
}
