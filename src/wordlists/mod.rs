//! Word lists and the dictionary store
//!
//! Provides the embedded word list compiled into the binary and the
//! length-partitioned [`WordStore`] built from it or from a file.

mod embedded;
pub mod loader;
mod store;

pub use embedded::{WORDS, WORDS_COUNT};
pub use store::WordStore;
