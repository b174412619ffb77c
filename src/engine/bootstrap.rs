//! One-time mode selection
//!
//! Probes the ranking backend once at startup. A healthy backend fixes Online
//! mode for the rest of the process; any failure fixes Demo mode over the
//! bundled word list. There is no reconnection afterwards.

use crate::core::Mode;
use crate::resolver::{DemoResolver, OnlineResolver, RankResolver, ResolveError};
use crate::wordlists::WordList;
use tracing::{info, warn};

/// Outcome of mode selection: the resolver to use and the words to show
#[derive(Debug, Clone)]
pub struct Bootstrap {
    resolver: RankResolver,
    words: WordList,
}

impl Bootstrap {
    /// Online mode over `resolver`, with the backend's canonical word list
    #[must_use]
    pub const fn online(resolver: OnlineResolver, words: WordList) -> Self {
        Self {
            resolver: RankResolver::Online(resolver),
            words,
        }
    }

    /// Demo mode over the resolver's own word list
    #[must_use]
    pub fn demo(resolver: DemoResolver) -> Self {
        let words = resolver.words().clone();
        Self {
            resolver: RankResolver::Demo(resolver),
            words,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.resolver.mode()
    }

    /// Word list for display and validation, never for ranking
    #[must_use]
    pub const fn words(&self) -> &WordList {
        &self.words
    }

    pub fn into_parts(self) -> (RankResolver, WordList) {
        (self.resolver, self.words)
    }
}

/// Probe the backend and pick the mode for this process
///
/// `fallback` is used when the backend is unreachable, answers with an error
/// status, or returns a malformed word list.
pub async fn select_mode(backend: OnlineResolver, fallback: DemoResolver) -> Bootstrap {
    match probe(&backend).await {
        Ok(words) => {
            info!(
                base_url = backend.base_url(),
                words = words.len(),
                "Ranking backend available, playing online"
            );
            Bootstrap::online(backend, words)
        }
        Err(e) => {
            warn!(
                base_url = backend.base_url(),
                error = %e,
                "Ranking backend unavailable, playing in demo mode"
            );
            Bootstrap::demo(fallback)
        }
    }
}

async fn probe(backend: &OnlineResolver) -> Result<WordList, ResolveError> {
    backend.check_health().await?;
    backend.fetch_words().await
}
