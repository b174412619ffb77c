//! Terminal output formatting
//!
//! Display utilities for the game board and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_error, print_mode_banner, print_outcome, print_reveal, print_status,
};
