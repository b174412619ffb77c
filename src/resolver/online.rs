//! Ranking backend client
//!
//! Thin JSON client for the embedding service. Every call is a single request:
//! no retries and no fallback, failures are surfaced to the caller as
//! [`ResolveError`].

use super::ResolveError;
use crate::core::{Guess, Puzzle, SeedDate, WINNING_POSITION, normalize_word};
use crate::wordlists::WordList;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Message used when the backend rejects a word without explaining why
pub const WORD_NOT_FOUND: &str = "Слово не знайдено в словнику. Спробуйте інше.";

/// Message used when a failed response carries no usable reason
const GENERIC_FAILURE: &str = "Помилка мережі";

#[derive(Debug, Serialize)]
struct PuzzleRequest {
    level: u32,
    seed_date: SeedDate,
}

impl From<Puzzle> for PuzzleRequest {
    fn from(puzzle: Puzzle) -> Self {
        Self {
            level: puzzle.level,
            seed_date: puzzle.seed_date,
        }
    }
}

#[derive(Debug, Serialize)]
struct GuessRequest<'a> {
    level: u32,
    seed_date: SeedDate,
    word: &'a str,
}

#[derive(Debug, Deserialize)]
struct GuessResponse {
    #[serde(default)]
    normalized_word: String,
    #[serde(default)]
    position: u32,
    #[serde(default)]
    found: Option<bool>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WordResponse {
    word: String,
}

#[derive(Debug, Deserialize)]
struct WordsResponse {
    words: Vec<String>,
}

/// Client for the ranking backend
#[derive(Debug, Clone)]
pub struct OnlineResolver {
    client: Client,
    base_url: String,
}

impl OnlineResolver {
    /// Create a client for the API rooted at `base_url` (e.g. `http://host:8000/api`)
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    #[must_use]
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Rank `word` against the puzzle's secret
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Rejected`] when the backend refuses the word and
    /// [`ResolveError::Network`] when the request itself fails.
    #[instrument(skip(self, puzzle), fields(puzzle = %puzzle))]
    pub async fn resolve(&self, puzzle: Puzzle, word: &str) -> Result<Guess, ResolveError> {
        let request = GuessRequest {
            level: puzzle.level,
            seed_date: puzzle.seed_date,
            word,
        };
        let response: GuessResponse = self.post("/guess", &request).await?;

        if response.found == Some(false) || response.position < WINNING_POSITION {
            let reason = response
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| WORD_NOT_FOUND.to_string());
            debug!(%reason, "Backend did not rank word");
            return Err(ResolveError::Rejected(reason));
        }

        // A reply without a usable word is recorded under the submitted one.
        let Some(ranked) =
            normalize_word(&response.normalized_word).or_else(|| normalize_word(word))
        else {
            return Err(ResolveError::Rejected(WORD_NOT_FOUND.to_string()));
        };

        debug!(word = %ranked, position = response.position, "Word ranked");
        Ok(Guess::new(ranked, response.position))
    }

    /// Ask the backend for a hint word
    ///
    /// # Errors
    ///
    /// Same as [`OnlineResolver::resolve`].
    #[instrument(skip(self, puzzle), fields(puzzle = %puzzle))]
    pub async fn hint(&self, puzzle: Puzzle) -> Result<String, ResolveError> {
        let response: WordResponse = self.post("/hint", &PuzzleRequest::from(puzzle)).await?;
        Ok(response.word)
    }

    /// Ask the backend to reveal the secret word
    ///
    /// # Errors
    ///
    /// Same as [`OnlineResolver::resolve`].
    #[instrument(skip(self, puzzle), fields(puzzle = %puzzle))]
    pub async fn reveal_secret(&self, puzzle: Puzzle) -> Result<String, ResolveError> {
        let response: WordResponse = self.post("/reveal", &PuzzleRequest::from(puzzle)).await?;
        Ok(response.word)
    }

    /// Liveness probe against `/health`
    ///
    /// # Errors
    ///
    /// Fails on transport errors and on any non-success status.
    pub async fn check_health(&self) -> Result<(), ResolveError> {
        let response = self.client.get(self.endpoint("/health")).send().await?;
        ensure_success(response).await.map(drop)
    }

    /// Fetch the canonical word list from `/words`
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-success status or a malformed body.
    pub async fn fetch_words(&self) -> Result<WordList, ResolveError> {
        let response = self.client.get(self.endpoint("/words")).send().await?;
        let body: WordsResponse = ensure_success(response).await?.json().await?;
        Ok(WordList::new(body.words))
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ResolveError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await?;
        Ok(ensure_success(response).await?.json().await?)
    }
}

/// Pass successful responses through, turn anything else into a rejection
///
/// The reason comes from a `{"detail": "..."}` body when the backend sends one,
/// otherwise from the status line.
async fn ensure_success(response: Response) -> Result<Response, ResolveError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| body.get("detail")?.as_str().map(str::to_owned))
        .filter(|detail| !detail.trim().is_empty());
    let reason = detail
        .or_else(|| status.canonical_reason().map(str::to_owned))
        .unwrap_or_else(|| GENERIC_FAILURE.to_string());

    warn!(%status, %reason, "Backend request failed");
    Err(ResolveError::Rejected(reason))
}
