//! Unit tests for data models

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use crate::models::*;

    // ====== Polarity Tests ======

    #[test]
    fn test_polarity_from_flag() {
        assert_eq!(Polarity::from(Some(true)), Polarity::Positive);
        assert_eq!(Polarity::from(Some(false)), Polarity::Negative);
        assert_eq!(Polarity::from(None), Polarity::Unset);
    }

    #[test]
    fn test_polarity_flag_roundtrip() {
        for polarity in [Polarity::Positive, Polarity::Negative, Polarity::Unset] {
            assert_eq!(Polarity::from(polarity.as_flag()), polarity);
        }
    }

    #[test]
    fn test_polarity_declared() {
        assert!(Polarity::Positive.is_declared());
        assert!(Polarity::Negative.is_declared());
        assert!(!Polarity::Unset.is_declared());
        assert_eq!(Polarity::default(), Polarity::Unset);
    }

    #[test]
    fn test_polarity_json_form() {
        assert_eq!(serde_json::to_string(&Polarity::Positive).unwrap(), "\"positive\"");
        let parsed: Polarity = serde_json::from_str("\"unset\"").unwrap();
        assert_eq!(parsed, Polarity::Unset);
    }

    // ====== Emoji Tests ======

    #[test]
    fn test_emoji_parse_and_display() {
        for emoji in Emoji::ALL {
            assert_eq!(emoji.to_string().parse::<Emoji>().unwrap(), emoji);
        }
        assert!("like".parse::<Emoji>().is_err());
        assert!("HEART".parse::<Emoji>().is_err());
    }

    #[test]
    fn test_emoji_json_matches_storage_form() {
        assert_eq!(serde_json::to_string(&Emoji::Haha).unwrap(), "\"HAHA\"");
        let parsed: Emoji = serde_json::from_str("\"ANGRY\"").unwrap();
        assert_eq!(parsed, Emoji::Angry);
    }

    // ====== Draft Tests ======

    #[test]
    fn test_draft_defaults_from_json() {
        let draft: EntryDraft = serde_json::from_str(
            r#"{"blog_id": 4, "title": "t", "content": "c", "emoji": "SAD"}"#,
        )
        .unwrap();
        assert_eq!(draft.id, None);
        assert_eq!(draft.date, None);
        assert_eq!(draft.blog_id, 4);
    }

    #[test]
    fn test_draft_into_entry_keeps_date() {
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let draft = EntryDraft {
            id: None,
            blog_id: 2,
            title: "title".to_string(),
            content: "content".to_string(),
            date: Some(date),
            emoji: Emoji::Wow,
        };
        let entry = draft.into_entry(9);
        assert_eq!(entry.id, 9);
        assert_eq!(entry.date, date);
    }

    // ====== Page Tests ======

    #[test]
    fn test_page_request_offset() {
        let request = PageRequest::new(3, 20);
        assert_eq!(request.offset(), 60);
        assert_eq!(request.limit(), 20);
    }

    #[test]
    fn test_page_totals() {
        let page = Page::new(vec![1, 2, 3], PageRequest::new(0, 3), 7);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_elements, 7);

        let empty: Page<i32> = Page::new(vec![], PageRequest::new(0, 10), 0);
        assert_eq!(empty.total_pages, 0);
    }
}
