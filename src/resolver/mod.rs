//! Rank resolution
//!
//! Turns a guessed word into a position, supplies hint words and reveals the
//! secret. The online variant delegates to the ranking backend; the demo
//! variant approximates it offline. The variant is chosen once at bootstrap.

pub mod demo;
pub mod online;

pub use demo::DemoResolver;
pub use online::OnlineResolver;

use crate::core::{Guess, Mode, Puzzle};

/// Failure to resolve a guess, hint or reveal through the backend
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The backend answered but refused the request (unknown word, bad input)
    #[error("{0}")]
    Rejected(String),
    /// The request never produced a usable response
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Active ranking strategy
///
/// Allows runtime selection of the resolver while keeping static dispatch.
#[derive(Debug, Clone)]
pub enum RankResolver {
    /// Ranks from the embedding backend
    Online(OnlineResolver),
    /// Deterministic offline approximation
    Demo(DemoResolver),
}

impl RankResolver {
    #[must_use]
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Online(_) => Mode::Online,
            Self::Demo(_) => Mode::Demo,
        }
    }

    /// Rank a normalized word
    ///
    /// # Errors
    ///
    /// Only the online variant fails; see [`OnlineResolver::resolve`].
    pub async fn resolve(&self, puzzle: Puzzle, word: &str) -> Result<Guess, ResolveError> {
        match self {
            Self::Online(r) => r.resolve(puzzle, word).await,
            Self::Demo(r) => Ok(r.resolve(puzzle, word)),
        }
    }

    /// Next hint word, given how many hints were used before this one
    ///
    /// # Errors
    ///
    /// Only the online variant fails; see [`OnlineResolver::hint`].
    pub async fn hint(&self, puzzle: Puzzle, hints_used: u32) -> Result<String, ResolveError> {
        match self {
            Self::Online(r) => r.hint(puzzle).await,
            Self::Demo(r) => Ok(r.hint(puzzle, hints_used).to_string()),
        }
    }

    /// The puzzle's secret word
    ///
    /// # Errors
    ///
    /// Only the online variant fails; see [`OnlineResolver::reveal_secret`].
    pub async fn reveal_secret(&self, puzzle: Puzzle) -> Result<String, ResolveError> {
        match self {
            Self::Online(r) => r.reveal_secret(puzzle).await,
            Self::Demo(r) => Ok(r.secret(puzzle).to_string()),
        }
    }
}
