//! Game session engine
//!
//! Bootstrap picks the ranking mode once; [`Game`] then owns the live session.

mod bootstrap;
mod game;

pub use bootstrap::{Bootstrap, select_mode};
pub use game::{Game, GuessOutcome};
