//! Game sessions
//!
//! A [`Session`] is an explicit value owned by its caller. It drives the clue
//! engine turn by turn; there is no process-wide "active" session.

mod game;

pub use game::{HistoryEntry, Session, Submission, Turn};

use std::fmt;

/// Where feedback comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Clues are computed against a known answer
    #[default]
    Answer,
    /// Clues are supplied by a human adjudicator
    Clue,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Answer => write!(f, "answer"),
            Self::Clue => write!(f, "clue"),
        }
    }
}

/// Per-session settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub word_length: usize,
    pub max_guesses: usize,
    pub mode: Mode,
}

impl SessionConfig {
    /// Answer-mode config with the default guess limit
    #[must_use]
    pub const fn new(word_length: usize) -> Self {
        Self {
            word_length,
            max_guesses: 6,
            mode: Mode::Answer,
        }
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.word_length, 5);
        assert_eq!(config.max_guesses, 6);
        assert_eq!(config.mode, Mode::Answer);
    }

    #[test]
    fn builder_overrides() {
        let config = SessionConfig::new(4)
            .with_mode(Mode::Clue)
            .with_max_guesses(3);
        assert_eq!(
            config,
            SessionConfig {
                word_length: 4,
                max_guesses: 3,
                mode: Mode::Clue
            }
        );
    }

    #[test]
    fn mode_display() {
        assert_eq!(Mode::Answer.to_string(), "answer");
        assert_eq!(Mode::Clue.to_string(), "clue");
    }
}
