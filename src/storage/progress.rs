//! Saved progress for the puzzle in flight
//!
//! Progress is best-effort: storage failures are logged and swallowed so the
//! in-memory game keeps working, it just won't survive a restart.

use super::StorageSlot;
use crate::core::{Guess, Mode, Puzzle, SeedDate, Session, WINNING_POSITION};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Serialized snapshot of an unfinished session
///
/// Wire shape: `{level, seedDate, guesses: [{word, position}], coins, hintsUsed, mode}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    pub level: u32,
    pub seed_date: SeedDate,
    pub guesses: Vec<Guess>,
    pub coins: u32,
    pub hints_used: u32,
    pub mode: Mode,
    /// Never written; honoured if a payload from elsewhere carries it
    #[serde(default, alias = "gameEnded", skip_serializing)]
    pub ended: bool,
}

impl PersistedSession {
    #[must_use]
    pub const fn puzzle(&self) -> Puzzle {
        Puzzle {
            level: self.level,
            seed_date: self.seed_date,
        }
    }

    /// Snapshots describing a finished game or impossible ranks are unusable
    fn is_resumable(&self) -> bool {
        !self.ended
            && self
                .guesses
                .iter()
                .all(|g| g.position() > WINNING_POSITION)
    }

    /// Rebuild the live session this snapshot was taken from
    #[must_use]
    pub fn into_session(self) -> Session {
        Session::restored(
            self.level,
            self.seed_date,
            self.guesses,
            self.coins,
            self.hints_used,
            self.mode,
        )
    }
}

impl From<&Session> for PersistedSession {
    fn from(session: &Session) -> Self {
        Self {
            level: session.level(),
            seed_date: session.seed_date(),
            guesses: session.guesses().to_vec(),
            coins: session.coins(),
            hints_used: session.hints_used(),
            mode: session.mode(),
            ended: false,
        }
    }
}

/// Save/load of the single progress slot
#[derive(Debug)]
pub struct ProgressStore<S> {
    slot: S,
}

impl<S: StorageSlot> ProgressStore<S> {
    pub const fn new(slot: S) -> Self {
        Self { slot }
    }

    pub const fn slot(&self) -> &S {
        &self.slot
    }

    /// Persist `session`, or drop saved progress once it has ended
    pub fn save(&self, session: &Session) {
        if session.is_ended() {
            if let Err(e) = self.slot.clear() {
                warn!(error = %e, "Failed to clear saved progress");
            } else {
                debug!(puzzle = %session.puzzle(), "Cleared progress for finished puzzle");
            }
            return;
        }

        let payload = match serde_json::to_string(&PersistedSession::from(session)) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "Failed to serialize progress");
                return;
            }
        };

        if let Err(e) = self.slot.write(&payload) {
            warn!(error = %e, "Failed to save progress");
        } else {
            debug!(
                puzzle = %session.puzzle(),
                guesses = session.guesses().len(),
                "Saved progress"
            );
        }
    }

    /// Saved progress for `puzzle`, if the slot holds a usable snapshot of it
    ///
    /// Missing, unreadable, malformed, finished or mismatched snapshots all
    /// yield `None`.
    #[must_use]
    pub fn load(&self, puzzle: Puzzle) -> Option<PersistedSession> {
        let payload = match self.slot.read() {
            Ok(Some(payload)) => payload,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "Failed to read saved progress");
                return None;
            }
        };

        let snapshot: PersistedSession = match serde_json::from_str(&payload) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                debug!(error = %e, "Ignoring malformed saved progress");
                return None;
            }
        };

        if snapshot.puzzle() != puzzle {
            debug!(saved = %snapshot.puzzle(), requested = %puzzle, "Saved progress is for another puzzle");
            return None;
        }
        if !snapshot.is_resumable() {
            debug!(%puzzle, "Saved progress is for a finished game");
            return None;
        }

        Some(snapshot)
    }
}
