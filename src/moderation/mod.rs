//! Entry moderation rules
//!
//! Decides whether an entry draft may be saved on its owning blog:
//! - emoji policy: LIKE/HAHA are refused on blogs with a declared polarity
//! - text policy: title and content must not carry keywords that conflict
//!   with the blog's polarity
//!
//! Emoji failures take priority over text failures.

use thiserror::Error;
use tracing::debug;

pub mod keywords;
pub mod policy;

pub use keywords::Keyword;
pub use policy::check_emoji;
pub use policy::check_text;

use crate::models::Blog;
use crate::models::EntryDraft;

/// Reason an entry draft was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("Invalid Emoji")]
    InvalidEmoji,
    #[error("Invalid Content")]
    InvalidContent,
}

impl Rejection {
    /// Stable key for client-facing messages
    #[must_use]
    pub const fn error_key(self) -> &'static str {
        match self {
            Rejection::InvalidEmoji => "invalidEmoji",
            Rejection::InvalidContent => "invalidContent",
        }
    }
}

/// Run every policy check for `draft` against `blog`.
pub fn moderate(blog: &Blog, draft: &EntryDraft) -> Result<(), Rejection> {
    let emoji_ok = check_emoji(blog.polarity, draft.emoji);
    let title_ok = check_text(blog.polarity, &draft.title);
    let content_ok = check_text(blog.polarity, &draft.content);

    debug!(
        blog_id = blog.id,
        emoji_ok, title_ok, content_ok, "Moderation checks evaluated"
    );

    if !emoji_ok {
        return Err(Rejection::InvalidEmoji);
    }
    if !title_ok || !content_ok {
        return Err(Rejection::InvalidContent);
    }
    Ok(())
}
