//! Core domain types for the guessing game
//!
//! Pure data types with no I/O: guesses, seed dates, session state and the
//! deterministic hash behind the offline ranking.

mod guess;
pub mod hash;
mod seed_date;
mod session;

pub use guess::{Guess, WINNING_POSITION, normalize_word};
pub use seed_date::{SeedDate, SeedDateError};
pub use session::{
    DEFAULT_COINS, DEFAULT_LEVEL, HINT_BADGE_LIMIT, HINT_COST, Mode, Puzzle, Session, WIN_REWARD,
};
