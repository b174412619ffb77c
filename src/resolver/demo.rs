//! Offline rank approximation
//!
//! Used when the ranking backend cannot be reached. Every answer is derived from
//! the string hash of the puzzle key or the guessed word, so the same inputs give
//! the same ranks on every call and across restarts. The ranks carry no semantic
//! meaning; they only keep the game playable offline.

use crate::core::hash::{hash_index, hash_magnitude};
use crate::core::{Guess, Puzzle, WINNING_POSITION};
use crate::wordlists::{WordList, WordListError};

/// Prefix mixed into the puzzle key before hashing
const SECRET_SALT: &str = "contexto_ua_";

/// Non-winning positions fall in `2..2 + POSITION_SPREAD`
const POSITION_SPREAD: u32 = 2500;

/// Offset of the first hint from the secret index
const HINT_OFFSET: u64 = 50;

/// Distance between consecutive hints
const HINT_STRIDE: u64 = 30;

/// Deterministic resolver over a fixed word list
#[derive(Debug, Clone)]
pub struct DemoResolver {
    words: WordList,
}

impl DemoResolver {
    /// Create a resolver over `words`
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::Empty`] if the list has no words.
    pub fn new(words: WordList) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self { words })
    }

    #[must_use]
    pub const fn words(&self) -> &WordList {
        &self.words
    }

    /// Index of the secret word for `puzzle`
    #[must_use]
    pub fn secret_index(&self, puzzle: Puzzle) -> usize {
        let key = format!("{SECRET_SALT}{}_{}", puzzle.level, puzzle.seed_date);
        hash_index(&key, self.words.len())
    }

    #[must_use]
    pub fn secret(&self, puzzle: Puzzle) -> &str {
        self.word_at(self.secret_index(puzzle))
    }

    /// Rank of `word`: 1 for the secret, otherwise a hash-derived position
    #[must_use]
    pub fn position(&self, puzzle: Puzzle, word: &str) -> u32 {
        let guess = word.to_lowercase();
        if guess == self.secret(puzzle).to_lowercase() {
            return WINNING_POSITION;
        }
        2 + hash_magnitude(&guess) % POSITION_SPREAD
    }

    /// Rank `word` (already normalized) against the puzzle's secret
    #[must_use]
    pub fn resolve(&self, puzzle: Puzzle, word: &str) -> Guess {
        let word = word.to_lowercase();
        let position = self.position(puzzle, &word);
        Guess::new(word, position)
    }

    /// Hint word for the given number of hints already used
    ///
    /// Walks the list from the secret at a fixed stride, so consecutive hint
    /// counts yield distinct words whenever the list has more than 120 entries.
    #[must_use]
    pub fn hint(&self, puzzle: Puzzle, hints_used: u32) -> &str {
        let len = self.words.len() as u64;
        let index = (self.secret_index(puzzle) as u64
            + HINT_OFFSET
            + HINT_STRIDE * u64::from(hints_used))
            % len;
        self.word_at(index as usize)
    }

    // Indices are always reduced modulo the (non-empty) list length.
    fn word_at(&self, index: usize) -> &str {
        self.words.get(index).unwrap_or_default()
    }
}
