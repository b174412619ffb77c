//! Contexto
//!
//! Game session engine for a semantic word-guessing game: each guess is ranked
//! by its closeness to a secret word, and position 1 wins. Ranks come from an
//! HTTP backend when it is reachable, or from a deterministic offline demo
//! ranking otherwise.
//!
//! # Quick Start
//!
//! ```rust
//! use contexto::core::{Puzzle, SeedDate};
//! use contexto::resolver::DemoResolver;
//! use contexto::wordlists::demo_word_list;
//!
//! let resolver = DemoResolver::new(demo_word_list()).unwrap();
//! let puzzle = Puzzle {
//!     level: 2,
//!     seed_date: SeedDate::parse("2024-01-15").unwrap(),
//! };
//!
//! let guess = resolver.resolve(puzzle, "вода");
//! println!("{guess}");
//! ```

// Core domain types
pub mod core;

// Rank resolution: online backend and offline demo
pub mod resolver;

// Progress persistence
pub mod storage;

// Session engine and mode selection
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
