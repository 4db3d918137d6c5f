use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use dashmap::DashMap;
use futures::future::BoxFuture;
use futures::FutureExt;

use super::RecordStore;
use crate::models::Blog;
use crate::models::Entry;
use crate::models::EntryDraft;
use crate::models::NewBlog;
use crate::BlogModError;
use crate::Result;

/// Process-local store backed by concurrent maps
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blogs: Arc<DashMap<i64, Blog>>,
    entries: Arc<DashMap<i64, Entry>>,
    next_blog_id: Arc<AtomicI64>,
    next_entry_id: Arc<AtomicI64>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a blog under an explicit id
    pub fn insert_blog(&self, blog: Blog) {
        self.next_blog_id.fetch_max(blog.id, Ordering::SeqCst);
        self.blogs.insert(blog.id, blog);
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn sorted_entries(&self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self.entries.iter().map(|e| e.value().clone()).collect();
        entries.sort_by_key(|e| e.id);
        entries
    }

    fn save_entry_sync(&self, draft: EntryDraft) -> Result<Entry> {
        match draft.id {
            Some(id) => {
                let mut slot = self
                    .entries
                    .get_mut(&id)
                    .ok_or(BlogModError::EntryNotFound(id))?;
                let mut draft = draft;
                draft.date.get_or_insert(slot.date);
                let entry = draft.into_entry(id);
                *slot = entry.clone();
                Ok(entry)
            }
            None => {
                let id = self.next_entry_id.fetch_add(1, Ordering::SeqCst) + 1;
                let entry = draft.into_entry(id);
                self.entries.insert(id, entry.clone());
                Ok(entry)
            }
        }
    }
}

impl RecordStore for MemoryStore {
    fn find_blog(&self, id: i64) -> BoxFuture<'_, Result<Option<Blog>>> {
        let blog = self.blogs.get(&id).map(|b| b.value().clone());
        async move { Ok(blog) }.boxed()
    }

    fn list_blogs(&self) -> BoxFuture<'_, Result<Vec<Blog>>> {
        let mut blogs: Vec<Blog> = self.blogs.iter().map(|b| b.value().clone()).collect();
        blogs.sort_by_key(|b| b.id);
        async move { Ok(blogs) }.boxed()
    }

    fn create_blog(&self, blog: NewBlog) -> BoxFuture<'_, Result<Blog>> {
        let id = self.next_blog_id.fetch_add(1, Ordering::SeqCst) + 1;
        let blog = Blog {
            id,
            name: blog.name,
            handle: blog.handle,
            polarity: blog.polarity,
        };
        self.blogs.insert(id, blog.clone());
        async move { Ok(blog) }.boxed()
    }

    fn find_entry(&self, id: i64) -> BoxFuture<'_, Result<Option<Entry>>> {
        let entry = self.entries.get(&id).map(|e| e.value().clone());
        async move { Ok(entry) }.boxed()
    }

    fn list_entries(&self, offset: i64, limit: i64) -> BoxFuture<'_, Result<Vec<Entry>>> {
        let page = self
            .sorted_entries()
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .collect();
        async move { Ok(page) }.boxed()
    }

    fn count_entries(&self) -> BoxFuture<'_, Result<u64>> {
        let count = self.entries.len() as u64;
        async move { Ok(count) }.boxed()
    }

    fn search_entries<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<Vec<Entry>>> {
        let needle = text.to_lowercase();
        let matches = self
            .sorted_entries()
            .into_iter()
            .filter(|e| {
                e.title.to_lowercase().contains(&needle) || e.content.to_lowercase().contains(&needle)
            })
            .collect();
        async move { Ok(matches) }.boxed()
    }

    fn save_entry(&self, draft: EntryDraft) -> BoxFuture<'_, Result<Entry>> {
        let saved = self.save_entry_sync(draft);
        async move { saved }.boxed()
    }

    fn delete_entry(&self, id: i64) -> BoxFuture<'_, Result<()>> {
        self.entries.remove(&id);
        async move { Ok(()) }.boxed()
    }

    fn delete_entries<'a>(&'a self, ids: &'a [i64]) -> BoxFuture<'a, Result<()>> {
        for id in ids {
            self.entries.remove(id);
        }
        async move { Ok(()) }.boxed()
    }
}
