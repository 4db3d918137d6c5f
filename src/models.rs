use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::BlogModError;

/// Sentiment stance declared by a blog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    #[default]
    Unset,
}

impl Polarity {
    /// Whether a polarity value is present at all (positive or negative)
    #[must_use]
    pub const fn is_declared(self) -> bool {
        !matches!(self, Polarity::Unset)
    }

    /// Storage form: `Some(true)` positive, `Some(false)` negative, `None` unset
    #[must_use]
    pub const fn as_flag(self) -> Option<bool> {
        match self {
            Polarity::Positive => Some(true),
            Polarity::Negative => Some(false),
            Polarity::Unset => None,
        }
    }
}

impl From<Option<bool>> for Polarity {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Polarity::Positive,
            Some(false) => Polarity::Negative,
            None => Polarity::Unset,
        }
    }
}

/// Reaction attached to an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Emoji {
    Like,
    Haha,
    Wow,
    Sad,
    Angry,
}

impl Emoji {
    pub const ALL: [Emoji; 5] = [
        Emoji::Like,
        Emoji::Haha,
        Emoji::Wow,
        Emoji::Sad,
        Emoji::Angry,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Emoji::Like => "LIKE",
            Emoji::Haha => "HAHA",
            Emoji::Wow => "WOW",
            Emoji::Sad => "SAD",
            Emoji::Angry => "ANGRY",
        }
    }
}

impl fmt::Display for Emoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emoji {
    type Err = BlogModError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Emoji::ALL
            .into_iter()
            .find(|emoji| emoji.as_str() == value)
            .ok_or_else(|| BlogModError::InvalidInput(format!("unknown emoji: {value}")))
    }
}

/// Parent blog of entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: i64,
    pub name: String,
    pub handle: String,
    #[serde(default)]
    pub polarity: Polarity,
}

/// Request to create a blog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBlog {
    pub name: String,
    pub handle: String,
    #[serde(default)]
    pub polarity: Polarity,
}

/// Persisted blog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub blog_id: i64,
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub emoji: Emoji,
}

/// Input to the save path; `id` absent means create, present means update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    #[serde(default)]
    pub id: Option<i64>,
    pub blog_id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    pub emoji: Emoji,
}

impl EntryDraft {
    /// Build the persisted form of this draft under the given id
    #[must_use]
    pub fn into_entry(self, id: i64) -> Entry {
        Entry {
            id,
            blog_id: self.blog_id,
            title: self.title,
            content: self.content,
            date: self.date.unwrap_or_else(Utc::now),
            emoji: self.emoji,
        }
    }
}

/// Zero-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    #[must_use]
    pub const fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    #[must_use]
    pub const fn offset(&self) -> i64 {
        self.page as i64 * self.size as i64
    }

    #[must_use]
    pub const fn limit(&self) -> i64 {
        self.size as i64
    }
}

/// One page of results plus totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    #[must_use]
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        let total_pages = if request.size == 0 {
            0
        } else {
            total_elements.div_ceil(u64::from(request.size))
        };
        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements,
            total_pages,
        }
    }
}
