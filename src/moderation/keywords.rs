//! Sentiment keyword lexicon
//!
//! A closed set of sentiment-coded words. Tokens are matched exactly after
//! ASCII uppercasing; there is no stemming or fuzzy matching.

use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt;

use lazy_static::lazy_static;

use crate::models::Polarity;

/// Sentiment-coded keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Love,
    Happy,
    Trust,
    Fear,
    Lonely,
}

impl Keyword {
    pub const ALL: [Keyword; 5] = [
        Keyword::Love,
        Keyword::Happy,
        Keyword::Trust,
        Keyword::Fear,
        Keyword::Lonely,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Love => "LOVE",
            Keyword::Happy => "HAPPY",
            Keyword::Trust => "TRUST",
            Keyword::Fear => "FEAR",
            Keyword::Lonely => "LONELY",
        }
    }

    /// Classify a single token, case-insensitively
    #[must_use]
    pub fn classify(token: &str) -> Option<Keyword> {
        if token.trim().is_empty() {
            return None;
        }
        KEYWORDS.get(token.to_ascii_uppercase().as_str()).copied()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

lazy_static! {
    /// Uppercase spelling to keyword
    static ref KEYWORDS: HashMap<&'static str, Keyword> =
        Keyword::ALL.into_iter().map(|k| (k.as_str(), k)).collect();

    /// Words that must not appear on a positive blog
    static ref POSITIVE_INCOMPATIBLE: HashSet<Keyword> =
        [Keyword::Fear, Keyword::Lonely].into_iter().collect();

    /// Words that must not appear on a negative (or undeclared) blog
    static ref NEGATIVE_INCOMPATIBLE: HashSet<Keyword> =
        [Keyword::Love, Keyword::Happy, Keyword::Trust].into_iter().collect();
}

/// Keywords that conflict with a blog of the given polarity.
///
/// `Unset` shares the negative lexicon: an undeclared polarity is held to
/// the same rules as a negative blog.
#[must_use]
pub fn incompatible_keywords(polarity: Polarity) -> &'static HashSet<Keyword> {
    match polarity {
        Polarity::Positive => &POSITIVE_INCOMPATIBLE,
        Polarity::Negative | Polarity::Unset => &NEGATIVE_INCOMPATIBLE,
    }
}
