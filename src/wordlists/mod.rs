//! Word lists for the offline ranking
//!
//! Provides the bundled demo list compiled into the binary and loaders for
//! custom lists.

mod embedded;
pub mod loader;

pub use embedded::{DEMO_WORDS, DEMO_WORDS_COUNT};
pub use loader::{WordList, WordListError};

/// The bundled demo list as a `WordList`
#[must_use]
pub fn demo_word_list() -> WordList {
    loader::words_from_slice(DEMO_WORDS)
}
