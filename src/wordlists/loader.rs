//! Word list loading utilities
//!
//! Provides the `WordList` type and functions to build one from a file or from
//! embedded constants.

use crate::core::normalize_word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Errors while building a word list
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
    #[error("word list is empty")]
    Empty,
}

/// Ordered list of normalized words with fast membership checks
///
/// Order matters: the demo ranking indexes into the list, so the same file must
/// always yield the same sequence. Duplicates are kept to preserve indices.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<String>,
    lookup: FxHashSet<String>,
}

impl WordList {
    /// Build a list from raw entries, normalizing each and dropping blanks
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = entries
            .into_iter()
            .filter_map(|entry| normalize_word(entry.as_ref()))
            .collect();
        let lookup = words.iter().cloned().collect();
        Self { words, lookup }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Whether the normalized form of `word` is in the list
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        normalize_word(word).is_some_and(|w| self.lookup.contains(&w))
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// Load words from a file, one word per line
///
/// Blank lines are skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains no words.
///
/// # Examples
/// ```no_run
/// use contexto::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/demo_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let content = fs::read_to_string(path)?;
    let words = WordList::new(content.lines());

    if words.is_empty() {
        return Err(WordListError::Empty);
    }
    Ok(words)
}

/// Convert embedded string slice to a `WordList`
///
/// # Examples
/// ```
/// use contexto::wordlists::loader::words_from_slice;
/// use contexto::wordlists::DEMO_WORDS;
///
/// let words = words_from_slice(DEMO_WORDS);
/// assert_eq!(words.len(), DEMO_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> WordList {
    WordList::new(slice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_keeps_order() {
        let words = words_from_slice(&["вода", "земля", "небо"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words.get(0), Some("вода"));
        assert_eq!(words.get(1), Some("земля"));
        assert_eq!(words.get(2), Some("небо"));
        assert_eq!(words.get(3), None);
    }

    #[test]
    fn words_are_normalized() {
        let words = words_from_slice(&["  Вода ", "", "НЕБО", "   "]);

        assert_eq!(words.words(), ["вода", "небо"]);
        assert!(words.contains("ВОДА"));
        assert!(words.contains(" небо"));
        assert!(!words.contains("земля"));
        assert!(!words.contains(""));
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert!(words.is_empty());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "сонце\n\nмісяць\r\nвітер").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words.words(), ["сонце", "місяць", "вітер"]);
    }

    #[test]
    fn load_from_file_rejects_empty() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(matches!(
            load_from_file(file.path()),
            Err(WordListError::Empty)
        ));
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_from_file(dir.path().join("missing.txt")),
            Err(WordListError::Io(_))
        ));
    }
}
