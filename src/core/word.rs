//! Word representation
//!
//! A Word stores a validated lowercase ASCII word of any non-zero length.

use crate::error::ClueError;
use rustc_hash::FxHashMap;
use std::fmt;

/// An immutable lowercase word
///
/// Equality, ordering and hashing are by text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// ASCII letters are lowercased before validation; any other character is
    /// rejected as is.
    ///
    /// # Errors
    /// Returns `ClueError::InvalidLetter` for the first character outside
    /// `a`-`z`, and `ClueError::LengthMismatch` for an empty string.
    ///
    /// # Examples
    /// ```
    /// use wordle_clue::core::Word;
    ///
    /// let word = Word::new("Crate").unwrap();
    /// assert_eq!(word.text(), "crate");
    ///
    /// assert!(Word::new("cr4te").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, ClueError> {
        let text: String = text.into().to_ascii_lowercase();

        if text.is_empty() {
            return Err(ClueError::LengthMismatch {
                expected: 1,
                actual: 0,
            });
        }

        if let Some(letter) = text.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(ClueError::InvalidLetter { letter });
        }

        Ok(Self { text })
    }

    /// Create a Word that must have exactly `length` letters
    ///
    /// # Errors
    /// Same as [`Word::new`], plus `ClueError::LengthMismatch` when the
    /// letter count differs from `length`.
    pub fn with_length(text: impl Into<String>, length: usize) -> Result<Self, ClueError> {
        let word = Self::new(text)?;
        if word.len() == length {
            Ok(word)
        } else {
            Err(ClueError::LengthMismatch {
                expected: length,
                actual: word.len(),
            })
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed Word; present for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters()[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters().contains(&letter)
    }

    /// Get all positions where a letter appears
    #[must_use]
    pub fn positions_of(&self, letter: u8) -> Vec<usize> {
        self.letters()
            .iter()
            .enumerate()
            .filter_map(|(i, &ch)| (ch == letter).then_some(i))
            .collect()
    }

    /// Get the multiset of letters in the word
    ///
    /// Seeds the remaining-letter pool of the clue algorithm.
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in self.letters() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl std::str::FromStr for Word {
    type Err = ClueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crate").unwrap();
        assert_eq!(word.text(), "crate");
        assert_eq!(word.letters(), b"crate");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("TRACE").unwrap().text(), "trace");
        assert_eq!(Word::new("TrAcE").unwrap().text(), "trace");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("abstract").unwrap().len(), 8);
    }

    #[test]
    fn word_creation_invalid_letters() {
        assert_eq!(
            Word::new("cra3e"),
            Err(ClueError::InvalidLetter { letter: '3' })
        );
        assert_eq!(
            Word::new("cr te"),
            Err(ClueError::InvalidLetter { letter: ' ' })
        );
        assert_eq!(
            Word::new("caf\u{e9}s"),
            Err(ClueError::InvalidLetter { letter: '\u{e9}' })
        );
        // Kelvin sign lowercases to 'k' under Unicode rules
        assert_eq!(
            Word::new("\u{212a}ayak"),
            Err(ClueError::InvalidLetter { letter: '\u{212a}' })
        );
    }

    #[test]
    fn word_creation_empty() {
        assert!(matches!(
            Word::new(""),
            Err(ClueError::LengthMismatch { actual: 0, .. })
        ));
    }

    #[test]
    fn word_with_length() {
        assert!(Word::with_length("crate", 5).is_ok());
        assert_eq!(
            Word::with_length("crate", 6),
            Err(ClueError::LengthMismatch {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn word_letter_queries() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.letter_at(0), b's');
        assert!(word.has_letter(b'e'));
        assert!(!word.has_letter(b'z'));
        assert_eq!(word.positions_of(b'e'), vec![2, 3]);
        assert!(word.positions_of(b'z').is_empty());
    }

    #[test]
    fn word_letter_counts() {
        let counts = Word::new("sassy").unwrap().letter_counts();
        assert_eq!(counts.get(&b's'), Some(&3));
        assert_eq!(counts.get(&b'a'), Some(&1));
        assert_eq!(counts.get(&b'y'), Some(&1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "REACT".parse().unwrap();
        assert_eq!(format!("{word}"), "react");
    }
}
