//! Command implementations

pub mod play;
pub mod turn;

pub use play::{PlayCommand, run_play};
pub use turn::{run_give_up, run_guess, run_hint, run_status};
