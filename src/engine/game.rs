//! Game session engine
//!
//! Owns the live session and routes every guess, hint and give-up through the
//! resolver chosen at bootstrap, saving progress after each change.

use super::Bootstrap;
use crate::core::{DEFAULT_LEVEL, Guess, Mode, Puzzle, SeedDate, Session, normalize_word};
use crate::resolver::{RankResolver, ResolveError};
use crate::storage::{ProgressStore, StorageSlot};
use crate::wordlists::WordList;
use tracing::{debug, info};

/// What a guess or hint did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Nothing happened: blank input, or the session had already ended
    Ignored,
    /// The guess was ranked and appended
    Recorded(Guess),
    /// The guess found the secret word and ended the session
    Won(Guess),
}

impl GuessOutcome {
    #[must_use]
    pub const fn guess(&self) -> Option<&Guess> {
        match self {
            Self::Ignored => None,
            Self::Recorded(guess) | Self::Won(guess) => Some(guess),
        }
    }

    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self, Self::Won(_))
    }
}

/// A single player's game: one live session at a time
///
/// Every mutating call takes `&mut self`, so overlapping guesses cannot be
/// issued against the same game.
pub struct Game<S> {
    resolver: RankResolver,
    words: WordList,
    store: ProgressStore<S>,
    session: Session,
}

impl<S: StorageSlot> Game<S> {
    /// Create a game for the bootstrapped mode
    ///
    /// Starts with an empty session for the default level and today's date;
    /// call [`Game::start`] to pick the puzzle and resume saved progress.
    pub fn new(bootstrap: Bootstrap, store: ProgressStore<S>, coins: u32) -> Self {
        let (resolver, words) = bootstrap.into_parts();
        let session = Session::new(DEFAULT_LEVEL, SeedDate::today(), coins, resolver.mode());
        Self {
            resolver,
            words,
            store,
            session,
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.resolver.mode()
    }

    /// Canonical word list for the active mode (display and validation only)
    #[must_use]
    pub const fn known_words(&self) -> &WordList {
        &self.words
    }

    #[must_use]
    pub const fn store(&self) -> &ProgressStore<S> {
        &self.store
    }

    /// Start (or resume) the puzzle for `level` and `seed_date`
    ///
    /// A missing or malformed `seed_date` means today. Saved progress for the
    /// same puzzle and mode is restored; otherwise the session starts empty.
    /// The coin balance carries over either way unless the snapshot has its own.
    ///
    /// Returns `true` when saved progress was restored.
    pub fn start(&mut self, level: u32, seed_date: Option<&str>) -> bool {
        let date = SeedDate::or_today(seed_date);
        if let Some(text) = seed_date
            && SeedDate::parse(text).is_none()
        {
            debug!(seed_date = text, "Ignoring malformed seed date, using today");
        }

        let puzzle = Puzzle {
            level,
            seed_date: date,
        };
        let mode = self.mode();

        match self.store.load(puzzle) {
            Some(snapshot) if snapshot.mode == mode => {
                info!(
                    %puzzle,
                    guesses = snapshot.guesses.len(),
                    hints_used = snapshot.hints_used,
                    "Resumed saved progress"
                );
                self.session = snapshot.into_session();
                true
            }
            Some(snapshot) => {
                debug!(saved_mode = %snapshot.mode, %mode, "Saved progress was ranked in another mode");
                self.session = Session::new(level, date, self.session.coins(), mode);
                false
            }
            None => {
                debug!(%puzzle, "Starting fresh puzzle");
                self.session = Session::new(level, date, self.session.coins(), mode);
                false
            }
        }
    }

    /// Rank a player's guess and record it
    ///
    /// Blank input and guesses against an ended session are ignored.
    ///
    /// # Errors
    ///
    /// Returns the resolver's error when the backend cannot rank the word; the
    /// session is left unchanged.
    pub async fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, ResolveError> {
        let Some(word) = normalize_word(raw) else {
            return Ok(GuessOutcome::Ignored);
        };
        if self.session.is_ended() {
            debug!(%word, "Ignoring guess for finished puzzle");
            return Ok(GuessOutcome::Ignored);
        }

        let guess = self.resolver.resolve(self.session.puzzle(), &word).await?;
        let outcome = self.record(guess);
        self.store.save(&self.session);
        Ok(outcome)
    }

    /// Spend a hint: the hint word is ranked and recorded like a guess, then
    /// the hint is counted and charged
    ///
    /// Ignored once the session has ended.
    ///
    /// # Errors
    ///
    /// Returns the resolver's error when the hint or its ranking fails; nothing
    /// is recorded or charged in that case.
    pub async fn use_hint(&mut self) -> Result<GuessOutcome, ResolveError> {
        if self.session.is_ended() {
            debug!("Ignoring hint for finished puzzle");
            return Ok(GuessOutcome::Ignored);
        }

        let puzzle = self.session.puzzle();
        let hint = self
            .resolver
            .hint(puzzle, self.session.hints_used())
            .await?;
        let word = normalize_word(&hint)
            .ok_or_else(|| ResolveError::Rejected("Не вдалося отримати підказку.".to_string()))?;

        let guess = self.resolver.resolve(puzzle, &word).await?;
        let outcome = self.record(guess);
        self.session.charge_hint();
        debug!(
            hints_used = self.session.hints_used(),
            coins = self.session.coins(),
            "Hint charged"
        );
        self.store.save(&self.session);
        Ok(outcome)
    }

    /// Reveal the secret and end the session without recording a guess
    ///
    /// Returns `None` if the session had already ended.
    ///
    /// # Errors
    ///
    /// Returns the resolver's error when the secret cannot be fetched.
    pub async fn give_up(&mut self) -> Result<Option<String>, ResolveError> {
        if self.session.is_ended() {
            return Ok(None);
        }

        let secret = self.resolver.reveal_secret(self.session.puzzle()).await?;
        info!(puzzle = %self.session.puzzle(), "Player gave up");
        self.session.reveal(secret.clone());
        self.store.save(&self.session);
        Ok(Some(secret))
    }

    /// Persist the current session (or clear it if ended)
    pub fn save(&self) {
        self.store.save(&self.session);
    }

    fn record(&mut self, guess: Guess) -> GuessOutcome {
        if self.session.record(guess.clone()) {
            info!(
                puzzle = %self.session.puzzle(),
                guesses = self.session.guesses().len(),
                "Secret word found"
            );
            GuessOutcome::Won(guess)
        } else {
            GuessOutcome::Recorded(guess)
        }
    }
}
