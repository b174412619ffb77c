//! Session state for one (level, date) puzzle

use super::{Guess, SeedDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coins awarded for finding the secret word
pub const WIN_REWARD: u32 = 50;

/// Coins charged per hint (the balance floors at zero)
pub const HINT_COST: u32 = 20;

/// Hints shown as available on the hint badge
///
/// Display-only: hints past this count are still served and charged.
pub const HINT_BADGE_LIMIT: u32 = 4;

/// Balance a player starts with when no progress has been saved
pub const DEFAULT_COINS: u32 = 650;

/// Level selected when none is given
pub const DEFAULT_LEVEL: u32 = 2;

/// How guesses are ranked for the lifetime of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Ranks come from the embedding backend
    Online,
    /// Ranks come from the deterministic offline approximation
    Demo,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Online => write!(f, "online"),
            Self::Demo => write!(f, "demo"),
        }
    }
}

/// Key of one daily puzzle instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Puzzle {
    pub level: u32,
    pub seed_date: SeedDate,
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {} / {}", self.level, self.seed_date)
    }
}

/// Live state of the puzzle being played
///
/// Only the game engine mutates a session; everything else reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    level: u32,
    seed_date: SeedDate,
    guesses: Vec<Guess>,
    coins: u32,
    hints_used: u32,
    ended: bool,
    mode: Mode,
    secret: Option<String>,
}

impl Session {
    /// Create an empty, unfinished session
    #[must_use]
    pub const fn new(level: u32, seed_date: SeedDate, coins: u32, mode: Mode) -> Self {
        Self {
            level,
            seed_date,
            guesses: Vec::new(),
            coins,
            hints_used: 0,
            ended: false,
            mode,
            secret: None,
        }
    }

    /// Rebuild an unfinished session from saved progress
    pub(crate) fn restored(
        level: u32,
        seed_date: SeedDate,
        guesses: Vec<Guess>,
        coins: u32,
        hints_used: u32,
        mode: Mode,
    ) -> Self {
        Self {
            level,
            seed_date,
            guesses,
            coins,
            hints_used,
            ended: false,
            mode,
            secret: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    #[must_use]
    pub const fn seed_date(&self) -> SeedDate {
        self.seed_date
    }

    #[inline]
    #[must_use]
    pub const fn puzzle(&self) -> Puzzle {
        Puzzle {
            level: self.level,
            seed_date: self.seed_date,
        }
    }

    /// Guesses in the order they were made
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub const fn coins(&self) -> u32 {
        self.coins
    }

    #[inline]
    #[must_use]
    pub const fn hints_used(&self) -> u32 {
        self.hints_used
    }

    #[inline]
    #[must_use]
    pub const fn is_ended(&self) -> bool {
        self.ended
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Secret word, known once the puzzle is won or given up
    #[must_use]
    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }

    /// Value for the hint badge: `max(0, 4 - hints_used)`
    #[must_use]
    pub const fn hints_remaining(&self) -> u32 {
        HINT_BADGE_LIMIT.saturating_sub(self.hints_used)
    }

    #[must_use]
    pub fn last_guess(&self) -> Option<&Guess> {
        self.guesses.last()
    }

    /// Guesses ordered by closeness, ties kept in guess order
    #[must_use]
    pub fn ranked_guesses(&self) -> Vec<&Guess> {
        let mut ranked: Vec<&Guess> = self.guesses.iter().collect();
        ranked.sort_by_key(|g| g.position());
        ranked
    }

    #[must_use]
    pub fn best_position(&self) -> Option<u32> {
        self.guesses.iter().map(Guess::position).min()
    }

    /// Append a ranked guess; a winning guess ends the session and pays out
    ///
    /// Returns `true` when the guess won. Callers must not record into an ended
    /// session.
    pub(crate) fn record(&mut self, guess: Guess) -> bool {
        debug_assert!(!self.ended, "recording into an ended session");
        let won = guess.is_win();
        if won {
            self.secret = Some(guess.word().to_string());
            self.ended = true;
            self.coins = self.coins.saturating_add(WIN_REWARD);
        }
        self.guesses.push(guess);
        won
    }

    /// Count one more hint and charge for it
    pub(crate) fn charge_hint(&mut self) {
        self.hints_used = self.hints_used.saturating_add(1);
        self.coins = self.coins.saturating_sub(HINT_COST);
    }

    /// End the session by revealing the secret without recording a guess
    pub(crate) fn reveal(&mut self, secret: String) {
        self.secret = Some(secret);
        self.ended = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(2, SeedDate::parse("2024-01-15").unwrap(), 650, Mode::Demo)
    }

    #[test]
    fn new_session_is_empty() {
        let s = session();
        assert!(s.guesses().is_empty());
        assert_eq!(s.hints_used(), 0);
        assert_eq!(s.hints_remaining(), 4);
        assert!(!s.is_ended());
        assert_eq!(s.secret(), None);
        assert_eq!(s.best_position(), None);
    }

    #[test]
    fn winning_guess_ends_and_pays() {
        let mut s = session();
        assert!(!s.record(Guess::new("небо", 83)));
        assert!(s.record(Guess::new("великий", 1)));
        assert!(s.is_ended());
        assert_eq!(s.coins(), 700);
        assert_eq!(s.secret(), Some("великий"));
        assert_eq!(s.guesses().len(), 2);
    }

    #[test]
    fn win_reward_saturates_near_max_balance() {
        let mut s = Session::new(2, SeedDate::today(), u32::MAX - 5, Mode::Demo);
        assert!(s.record(Guess::new("великий", 1)));
        assert_eq!(s.coins(), u32::MAX);
    }

    #[test]
    fn hint_count_saturates() {
        let mut s = Session::restored(2, SeedDate::today(), Vec::new(), 650, u32::MAX, Mode::Demo);
        s.charge_hint();
        assert_eq!(s.hints_used(), u32::MAX);
        assert_eq!(s.coins(), 630);
    }

    #[test]
    fn hint_charge_floors_at_zero() {
        let mut s = Session::new(1, SeedDate::today(), 30, Mode::Demo);
        s.charge_hint();
        assert_eq!(s.coins(), 10);
        s.charge_hint();
        assert_eq!(s.coins(), 0);
        s.charge_hint();
        assert_eq!(s.coins(), 0);
        assert_eq!(s.hints_used(), 3);
    }

    #[test]
    fn hint_badge_never_negative() {
        let mut s = session();
        for _ in 0..6 {
            s.charge_hint();
        }
        assert_eq!(s.hints_remaining(), 0);
    }

    #[test]
    fn ranked_guesses_sorted_by_position() {
        let mut s = session();
        s.record(Guess::new("земля", 468));
        s.record(Guess::new("небо", 83));
        s.record(Guess::new("вода", 1110));
        let words: Vec<&str> = s.ranked_guesses().iter().map(|g| g.word()).collect();
        assert_eq!(words, ["небо", "земля", "вода"]);
        assert_eq!(s.last_guess().map(Guess::word), Some("вода"));
        assert_eq!(s.best_position(), Some(83));
    }

    #[test]
    fn reveal_ends_without_guess() {
        let mut s = session();
        s.reveal("великий".to_string());
        assert!(s.is_ended());
        assert!(s.guesses().is_empty());
        assert_eq!(s.coins(), 650);
    }

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mode::Online).unwrap(), "\"online\"");
        assert_eq!(serde_json::to_string(&Mode::Demo).unwrap(), "\"demo\"");
    }
}
