//! Core domain types
//!
//! Words and clues, plus the duplicate-safe clue algorithm. Everything here is
//! pure and deterministic.

mod clue;
mod word;

pub use clue::{Clue, Code, EXACT, NOMATCH, PARTIAL, get_clue};
pub use word::Word;
