//! Emoji and free-text policy checks

use tracing::debug;

use super::keywords::incompatible_keywords;
use super::keywords::Keyword;
use crate::models::Emoji;
use crate::models::Polarity;

/// Whether `emoji` may be used on a blog with `polarity`.
///
/// LIKE and HAHA are refused on any blog that declares a polarity, positive
/// or negative.
#[must_use]
pub fn check_emoji(polarity: Polarity, emoji: Emoji) -> bool {
    if polarity.is_declared() && matches!(emoji, Emoji::Like | Emoji::Haha) {
        return false;
    }
    debug!("blog polarity {:?}, emoji {}", polarity, emoji);
    true
}

/// Whether `text` is free of keywords that conflict with `polarity`.
///
/// Tokens are produced by splitting on single spaces, so punctuation stays
/// attached and consecutive spaces yield empty tokens that never match.
#[must_use]
pub fn check_text(polarity: Polarity, text: &str) -> bool {
    let forbidden = incompatible_keywords(polarity);
    !text
        .split(' ')
        .filter_map(Keyword::classify)
        .any(|keyword| forbidden.contains(&keyword))
}
