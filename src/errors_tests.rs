//! Unit tests for error handling
//!
//! Tests error types, conversions, and error message formatting.

#[cfg(test)]
mod tests {
    use std::io;

    use crate::errors::BlogModError;
    use crate::moderation::Rejection;

    // ====== Error Type Tests ======

    #[test]
    fn test_custom_error() {
        let error = BlogModError::Custom("Test error message".to_string());
        assert_eq!(format!("{error}"), "Test error message");
    }

    #[test]
    fn test_not_found_messages() {
        assert_eq!(
            BlogModError::EntryNotFound(7).to_string(),
            "Entry not found: id 7"
        );
        assert_eq!(
            BlogModError::BlogNotFound(3).to_string(),
            "Blog not found: id 3"
        );
    }

    #[test]
    fn test_rejection_display_is_stable() {
        let emoji: BlogModError = Rejection::InvalidEmoji.into();
        let content: BlogModError = Rejection::InvalidContent.into();
        assert_eq!(emoji.to_string(), "Invalid Emoji");
        assert_eq!(content.to_string(), "Invalid Content");
    }

    #[test]
    fn test_rejection_accessor() {
        let error: BlogModError = Rejection::InvalidContent.into();
        assert_eq!(error.rejection(), Some(Rejection::InvalidContent));
        assert_eq!(BlogModError::EntryNotFound(1).rejection(), None);
    }

    // ====== Error Conversion Tests ======

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err: BlogModError = io_err.into();
        assert!(matches!(err, BlogModError::Io(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let parse_result: Result<serde_json::Value, _> = serde_json::from_str("{invalid json}");
        let err: BlogModError = parse_result.unwrap_err().into();
        assert!(matches!(err, BlogModError::Serialization(_)));
    }

    #[test]
    fn test_error_from_toml() {
        let parse_result: Result<toml::Value, _> = toml::from_str("key = ");
        let err: BlogModError = parse_result.unwrap_err().into();
        assert!(matches!(err, BlogModError::TomlParsing(_)));
    }

    #[test]
    fn test_error_from_sqlx() {
        let err: BlogModError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, BlogModError::Database(_)));
        assert!(err.to_string().starts_with("Database error"));
    }

    // ====== Error Debug/Display Tests ======

    #[test]
    fn test_error_debug_format() {
        let error = BlogModError::InvalidInput("bad emoji".to_string());
        let debug = format!("{error:?}");
        assert!(debug.contains("InvalidInput"));
    }
}
