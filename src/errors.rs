use thiserror::Error;

use crate::moderation::Rejection;

#[derive(Error, Debug)]
pub enum BlogModError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Rejected(#[from] Rejection),

    #[error("Entry not found: id {0}")]
    EntryNotFound(i64),

    #[error("Blog not found: id {0}")]
    BlogNotFound(i64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Custom(String),
}

impl BlogModError {
    /// The moderation rejection carried by this error, if any
    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Rejected(rejection) => Some(*rejection),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, BlogModError>;
