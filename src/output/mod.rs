//! Terminal output formatting
//!
//! Display utilities for the CLI front end.

pub mod display;
pub mod formatters;

pub use display::{
    print_candidates, print_clue, print_group_analysis, print_history, print_outcome, print_turn,
};
