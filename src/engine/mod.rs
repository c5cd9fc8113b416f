//! Candidate engine
//!
//! Reduction and grouping over candidate sets. Both re-derive clues with the
//! same duplicate-safe algorithm as [`crate::core::get_clue`].

mod groups;
mod reduce;

pub use groups::{GroupMetrics, Groups, get_groups};
pub use reduce::{filter_history, reduce_candidates};

/// Candidate count from which reduction and grouping run on the rayon pool
pub const PARALLEL_THRESHOLD: usize = 1024;
