//! Guess representation
//!
//! A Guess is a normalized word together with the rank it received.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position reported for an exact match with the secret word
pub const WINNING_POSITION: u32 = 1;

/// Normalize raw player input: trim surrounding whitespace and lower-case
///
/// Returns `None` for empty or whitespace-only input.
///
/// # Examples
/// ```
/// use contexto::core::normalize_word;
///
/// assert_eq!(normalize_word("  Вода "), Some("вода".to_string()));
/// assert_eq!(normalize_word("   "), None);
/// ```
#[must_use]
pub fn normalize_word(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// A single ranked guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    word: String,
    position: u32,
}

impl Guess {
    /// Create a guess from an already-normalized word and its rank
    #[must_use]
    pub fn new(word: impl Into<String>, position: u32) -> Self {
        Self {
            word: word.into(),
            position,
        }
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Rank of the guess, 1 meaning the secret word itself
    #[inline]
    #[must_use]
    pub const fn position(&self) -> u32 {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.position == WINNING_POSITION
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.word, self.position)
    }
}
