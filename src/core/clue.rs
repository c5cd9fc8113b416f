//! Clue calculation and representation
//!
//! A clue holds one feedback code per letter position:
//! - 0 = `NoMatch` (letter not accounted for in the answer)
//! - 1 = `Partial` (letter in the answer, wrong position)
//! - 2 = `Exact` (letter in this exact position)
//!
//! Unlike a packed base-3 integer, a clue is a plain code sequence so it works
//! for any word length.

use super::Word;
use crate::error::ClueError;
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Code {
    NoMatch = 0,
    Partial = 1,
    Exact = 2,
}

/// Letter not accounted for in the answer
pub const NOMATCH: Code = Code::NoMatch;
/// Letter present elsewhere in the answer
pub const PARTIAL: Code = Code::Partial;
/// Letter at the exact position
pub const EXACT: Code = Code::Exact;

impl Code {
    /// Numeric value of the code (0, 1 or 2)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Next state of an adjudicator tile: nomatch → partial → exact → nomatch
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::NoMatch => Self::Partial,
            Self::Partial => Self::Exact,
            Self::Exact => Self::NoMatch,
        }
    }

    /// Emoji square for this code
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Partial => '🟨',
            Self::NoMatch => '⬜',
        }
    }

    /// Parse a single clue character
    ///
    /// Accepts digits, `G`/`Y`/`-` style letters and emoji squares.
    ///
    /// # Errors
    /// Returns `ClueError::InvalidClueCode` for anything else.
    pub fn from_char(ch: char) -> Result<Self, ClueError> {
        match ch {
            '2' | 'G' | 'g' | '🟩' => Ok(Self::Exact),
            '1' | 'Y' | 'y' | '🟨' => Ok(Self::Partial),
            '0' | '-' | '_' | '.' | '⬜' | '⬛' => Ok(Self::NoMatch),
            code => Err(ClueError::InvalidClueCode { code }),
        }
    }
}

impl TryFrom<u8> for Code {
    type Error = ClueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NoMatch),
            1 => Ok(Self::Partial),
            2 => Ok(Self::Exact),
            other => Err(ClueError::InvalidClueCode {
                code: char::from_digit(u32::from(other), 10).unwrap_or('?'),
            }),
        }
    }
}

/// Feedback for a whole guess
///
/// Immutable once built. Two clues are equal when every code is equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clue(Vec<Code>);

impl Clue {
    /// Build a clue from codes
    ///
    /// # Errors
    /// Returns `ClueError::LengthMismatch` for an empty code list.
    pub fn new(codes: Vec<Code>) -> Result<Self, ClueError> {
        if codes.is_empty() {
            return Err(ClueError::LengthMismatch {
                expected: 1,
                actual: 0,
            });
        }
        Ok(Self(codes))
    }

    /// Build a clue from codes already known to be non-empty
    pub(crate) fn from_codes(codes: Vec<Code>) -> Self {
        debug_assert!(!codes.is_empty());
        Self(codes)
    }

    /// Build a clue from raw values in `{0, 1, 2}`
    ///
    /// # Errors
    /// Returns `ClueError::InvalidClueCode` for any other value.
    pub fn from_values(values: &[u8]) -> Result<Self, ClueError> {
        let codes = values
            .iter()
            .map(|&v| Code::try_from(v))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(codes)
    }

    /// All-exact clue of the given length
    #[must_use]
    pub fn full_match(length: usize) -> Self {
        Self(vec![Code::Exact; length])
    }

    /// Calculate the clue when `guess` is played against `answer`
    ///
    /// # Algorithm
    /// 1. Exact pass: mark every position where the letters agree and remove
    ///    that letter occurrence from the answer's letter pool
    /// 2. Partial pass: for every other position, mark partial while the pool
    ///    still holds the guessed letter, consuming one occurrence each time
    ///
    /// The exact pass must finish before the partial pass starts.
    ///
    /// # Errors
    /// Returns `ClueError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_clue::core::{Clue, Word};
    ///
    /// let guess = Word::new("crate").unwrap();
    /// let answer = Word::new("trace").unwrap();
    /// let clue = Clue::calculate(&guess, &answer).unwrap();
    ///
    /// assert_eq!(clue.to_string(), "12212");
    /// ```
    pub fn calculate(guess: &Word, answer: &Word) -> Result<Self, ClueError> {
        if guess.len() != answer.len() {
            return Err(ClueError::LengthMismatch {
                expected: guess.len(),
                actual: answer.len(),
            });
        }
        Ok(Self::compute(guess, answer))
    }

    /// Unchecked calculation for callers that already matched lengths
    pub(crate) fn compute(guess: &Word, answer: &Word) -> Self {
        debug_assert_eq!(guess.len(), answer.len());

        let guess_letters = guess.letters();
        let answer_letters = answer.letters();
        let mut result = vec![Code::NoMatch; guess_letters.len()];
        let mut pool = answer.letter_counts();

        // First pass: exact matches
        for (i, (&g, &a)) in guess_letters.iter().zip(answer_letters).enumerate() {
            if g == a {
                result[i] = Code::Exact;
                if let Some(count) = pool.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: partial matches from what is left in the pool
        for (i, &g) in guess_letters.iter().enumerate() {
            if result[i] == Code::Exact {
                continue;
            }
            if let Some(count) = pool.get_mut(&g)
                && *count > 0
            {
                result[i] = Code::Partial;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Parse a clue from text such as `"12212"`, `"YGGYG"` or `"🟨🟩🟩🟨🟩"`
    ///
    /// # Errors
    /// Returns `ClueError::InvalidClueCode` for an unknown character and
    /// `ClueError::LengthMismatch` for empty input.
    pub fn parse(text: &str) -> Result<Self, ClueError> {
        let codes = text
            .trim()
            .chars()
            .map(Code::from_char)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(codes)
    }

    /// The codes in position order
    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.0
    }

    /// Code at `position`, if any
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<Code> {
        self.0.get(position).copied()
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed clue
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True iff every code is `Exact`
    #[must_use]
    pub fn is_full_match(&self) -> bool {
        self.0.iter().all(|&code| code == Code::Exact)
    }

    /// Count the exact codes
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0.iter().filter(|&&code| code == Code::Exact).count()
    }

    /// Count the partial codes
    #[must_use]
    pub fn count_partial(&self) -> usize {
        self.0.iter().filter(|&&code| code == Code::Partial).count()
    }

    /// Check a hand-made clue against the ordering the clue algorithm implies
    ///
    /// For any letter, non-exact occurrences in the guess are awarded partials
    /// left to right until the pool runs dry, so a partial can never follow a
    /// no-match of the same letter.
    ///
    /// # Errors
    /// Returns `ClueError::LengthMismatch` if the clue and guess differ in
    /// length, or `ClueError::InconsistentClue` naming the offending letter.
    pub fn check_against(&self, guess: &Word) -> Result<(), ClueError> {
        if self.len() != guess.len() {
            return Err(ClueError::LengthMismatch {
                expected: guess.len(),
                actual: self.len(),
            });
        }

        let mut exhausted = [false; 26];
        for (&letter, &code) in guess.letters().iter().zip(&self.0) {
            let slot = usize::from(letter - b'a');
            match code {
                Code::NoMatch => exhausted[slot] = true,
                Code::Partial if exhausted[slot] => {
                    return Err(ClueError::InconsistentClue {
                        letter: char::from(letter),
                    });
                }
                Code::Partial | Code::Exact => {}
            }
        }
        Ok(())
    }

    /// Convert to an emoji string such as `"🟨🟩🟩🟨🟩"`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|code| code.emoji()).collect()
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for code in &self.0 {
            write!(f, "{}", code.value())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Clue {
    type Err = ClueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Compute the clue for a (guess, answer) pair
///
/// # Errors
/// Returns `ClueError::LengthMismatch` if the words differ in length.
pub fn get_clue(guess: &Word, answer: &Word) -> Result<Clue, ClueError> {
    Clue::calculate(guess, answer)
}
