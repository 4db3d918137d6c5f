//! API request and response types

use serde::Deserialize;
use serde::Serialize;

/// Standard API response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    /// Stable machine-readable error identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_key: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            error_key: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            error_key: None,
        }
    }

    pub fn error_with_key(message: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            error_key: Some(key.into()),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Pagination query parameters
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub size: Option<u32>,
}

/// Keyword deletion query parameters
#[derive(Debug, Default, Deserialize)]
pub struct KeywordsQuery {
    #[serde(default)]
    pub keywords: Option<String>,
}

/// Bulk keyword deletion result
#[derive(Debug, Serialize, Deserialize)]
pub struct BulkDeleteResponse {
    pub deleted: usize,
}

/// Id-scoped keyword deletion result
#[derive(Debug, Serialize, Deserialize)]
pub struct ScopedDeleteResponse {
    pub deleted: bool,
}
