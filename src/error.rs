//! Error type shared by the clue engine, the word store and sessions.
//!
//! Every failure is fatal to the operation that raised it and never to the
//! session: nothing is mutated before validation succeeds.

use crate::session::Mode;

/// Errors raised by the library API
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClueError {
    #[error("Invalid letter '{letter}' (only a-z allowed)")]
    InvalidLetter { letter: char },

    #[error("Length mismatch: expected {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("No words of length {length} in the dictionary")]
    EmptyDictionary { length: usize },

    #[error("'{word}' is not in the word list")]
    NotAWord { word: String },

    #[error("Invalid clue code '{code}'")]
    InvalidClueCode { code: char },

    #[error("Clue marks a later '{letter}' as present after an earlier '{letter}' was marked absent")]
    InconsistentClue { letter: char },

    #[error("Operation requires {mode} mode")]
    WrongMode { mode: Mode },

    #[error("A session must allow at least one guess")]
    NoGuessesAllowed,
}

impl ClueError {
    /// Whether the caller is expected to simply retry with different input
    ///
    /// `NotAWord` is an ordinary game event rather than a fault.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::NotAWord { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = ClueError::InvalidLetter { letter: '3' };
        assert_eq!(err.to_string(), "Invalid letter '3' (only a-z allowed)");

        let err = ClueError::LengthMismatch {
            expected: 5,
            actual: 4,
        };
        assert_eq!(
            err.to_string(),
            "Length mismatch: expected 5 letters, got 4"
        );

        let err = ClueError::WrongMode { mode: Mode::Clue };
        assert_eq!(err.to_string(), "Operation requires clue mode");
    }

    #[test]
    fn only_not_a_word_is_recoverable() {
        assert!(
            ClueError::NotAWord {
                word: "xyzzy".to_string()
            }
            .is_recoverable()
        );
        assert!(!ClueError::EmptyDictionary { length: 9 }.is_recoverable());
    }
}
