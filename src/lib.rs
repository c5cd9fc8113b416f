//! Wordle Clue
//!
//! The clue and candidate engine behind a Wordle-style game: duplicate-aware
//! clue computation, candidate narrowing, clue grouping, and a session state
//! machine for both answer mode and clue (adjudicator) mode.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_clue::core::{Clue, Word};
//! use wordle_clue::engine::reduce_candidates;
//!
//! let guess = Word::new("crate").unwrap();
//! let answer = Word::new("trace").unwrap();
//!
//! let clue = Clue::calculate(&guess, &answer).unwrap();
//! assert_eq!(clue.to_string(), "12212");
//!
//! let candidates: Vec<Word> = ["crate", "trace", "react", "cater"]
//!     .into_iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! let left = reduce_candidates(&guess, &clue, &candidates).unwrap();
//! assert_eq!(left, vec![answer]);
//! ```

// Core domain types
pub mod core;

// Candidate narrowing and grouping
pub mod engine;

pub mod error;

// Game state machine
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod log;
