//! Session state and turn handling

use super::{Mode, SessionConfig};
use crate::core::{Clue, Code, Word};
use crate::engine::{get_groups, reduce_candidates};
use crate::error::ClueError;
use crate::wordlists::WordStore;
use rand::Rng;

/// One submitted guess and the clue it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub guess: Word,
    pub clue: Clue,
}

/// What a recorded guess did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub clue: Clue,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Number of distinct clues the guess could have produced
    pub groups: usize,
    pub finished: bool,
}

/// Outcome of a submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Session finished or input incomplete; nothing changed
    Ignored,
    /// Input is not an acceptable guess; no attempt was consumed
    NotAWord(String),
    Recorded(Turn),
}

/// A single game
///
/// States: `active(guess_index, candidates)` moves to
/// `active(guess_index + 1, candidates')` or `finished`. A session finishes on
/// a full-match clue or on its last allowed guess, and ignores all input
/// afterwards until reset.
#[derive(Debug, Clone)]
pub struct Session<'a> {
    store: &'a WordStore,
    config: SessionConfig,
    answer: Option<Word>,
    input: String,
    guess_index: usize,
    finished: bool,
    candidates: Vec<Word>,
    history: Vec<HistoryEntry>,
    pending: Vec<Code>,
}

impl<'a> Session<'a> {
    /// Start a session; answer mode draws a random answer from the store
    ///
    /// # Errors
    /// Returns `ClueError::EmptyDictionary` if the store has no word of the
    /// configured length and `ClueError::NoGuessesAllowed` for a zero guess
    /// limit.
    pub fn new(store: &'a WordStore, config: SessionConfig) -> Result<Self, ClueError> {
        Self::with_rng(store, config, &mut rand::rng())
    }

    /// Start a session drawing the answer from `rng`
    ///
    /// # Errors
    /// Returns `ClueError::EmptyDictionary` if the store has no word of the
    /// configured length.
    pub fn with_rng<R: Rng + ?Sized>(
        store: &'a WordStore,
        config: SessionConfig,
        rng: &mut R,
    ) -> Result<Self, ClueError> {
        let answer = match config.mode {
            Mode::Answer => Some(store.select_word_with(rng, config.word_length)?),
            Mode::Clue => None,
        };
        Self::build(store, config, answer)
    }

    /// Start an answer-mode session with a fixed answer
    ///
    /// # Errors
    /// Returns `ClueError::WrongMode` for a clue-mode config,
    /// `ClueError::LengthMismatch` if the answer has the wrong length and
    /// `ClueError::EmptyDictionary` if the store has no word of that length.
    pub fn with_answer(
        store: &'a WordStore,
        config: SessionConfig,
        answer: Word,
    ) -> Result<Self, ClueError> {
        if config.mode != Mode::Answer {
            return Err(ClueError::WrongMode { mode: Mode::Answer });
        }
        if answer.len() != config.word_length {
            return Err(ClueError::LengthMismatch {
                expected: config.word_length,
                actual: answer.len(),
            });
        }
        Self::build(store, config, Some(answer))
    }

    fn build(
        store: &'a WordStore,
        config: SessionConfig,
        answer: Option<Word>,
    ) -> Result<Self, ClueError> {
        if config.max_guesses == 0 {
            return Err(ClueError::NoGuessesAllowed);
        }
        let candidates = store.dictionary(config.word_length).to_vec();
        if candidates.is_empty() {
            return Err(ClueError::EmptyDictionary {
                length: config.word_length,
            });
        }

        log::debug!(
            "New {} session: {} letters, {} guesses, {} candidates",
            config.mode,
            config.word_length,
            config.max_guesses,
            candidates.len()
        );

        Ok(Self {
            store,
            config,
            answer,
            input: String::new(),
            guess_index: 0,
            finished: false,
            candidates,
            history: Vec::new(),
            pending: vec![Code::NoMatch; config.word_length],
        })
    }

    /// Append a letter to the input buffer
    ///
    /// Ignored once finished or when the buffer is full.
    ///
    /// # Errors
    /// Returns `ClueError::InvalidLetter` for anything outside `a`-`z`
    /// (either case).
    pub fn push_letter(&mut self, letter: char) -> Result<(), ClueError> {
        if self.finished {
            return Ok(());
        }
        let lower = letter.to_ascii_lowercase();
        if !lower.is_ascii_lowercase() {
            return Err(ClueError::InvalidLetter { letter });
        }
        if self.input.len() < self.config.word_length {
            self.input.push(lower);
        }
        Ok(())
    }

    /// Remove the last letter of the input buffer
    pub fn pop_letter(&mut self) {
        if !self.finished {
            self.input.pop();
        }
    }

    /// Replace the input buffer with a whole word
    ///
    /// Validates every letter and the length before touching the buffer.
    ///
    /// # Errors
    /// Returns `ClueError::InvalidLetter` or `ClueError::LengthMismatch`.
    pub fn set_input(&mut self, text: &str) -> Result<(), ClueError> {
        let word = Word::with_length(text, self.config.word_length)?;
        if !self.finished {
            self.input = word.text().to_string();
        }
        Ok(())
    }

    /// Cycle an adjudicator tile: nomatch → partial → exact → nomatch
    ///
    /// Returns the new code of the tile.
    ///
    /// # Errors
    /// Returns `ClueError::WrongMode` outside clue mode and
    /// `ClueError::LengthMismatch` for a position past the word length.
    pub fn toggle_tile(&mut self, position: usize) -> Result<Code, ClueError> {
        if self.config.mode != Mode::Clue {
            return Err(ClueError::WrongMode { mode: Mode::Clue });
        }
        let Some(code) = self.pending.get_mut(position) else {
            return Err(ClueError::LengthMismatch {
                expected: self.config.word_length,
                actual: position.saturating_add(1),
            });
        };
        if !self.finished {
            *code = code.cycle();
        }
        Ok(*code)
    }

    /// The clue currently set on the adjudicator tiles
    #[must_use]
    pub fn pending_clue(&self) -> Clue {
        Clue::from_codes(self.pending.clone())
    }

    /// Submit the input buffer
    ///
    /// In answer mode the clue is computed against the answer; in clue mode
    /// the adjudicator tiles are used.
    ///
    /// # Errors
    /// In clue mode, `ClueError::InconsistentClue` if the tiles break the
    /// per-letter ordering of real clues. State is unchanged on error.
    pub fn submit(&mut self) -> Result<Submission, ClueError> {
        match self.config.mode {
            Mode::Answer => self.submit_answer(),
            Mode::Clue => {
                let clue = self.pending_clue();
                self.submit_clue(clue)
            }
        }
    }

    /// Submit the input buffer with an adjudicator-supplied clue
    ///
    /// A full-match clue makes the guess the inferred answer.
    ///
    /// # Errors
    /// `ClueError::WrongMode` outside clue mode, `ClueError::LengthMismatch`
    /// or `ClueError::InconsistentClue` for a malformed clue. State is
    /// unchanged on error.
    pub fn submit_clue(&mut self, clue: Clue) -> Result<Submission, ClueError> {
        if self.config.mode != Mode::Clue {
            return Err(ClueError::WrongMode { mode: Mode::Clue });
        }
        if self.finished || self.input.len() != self.config.word_length {
            return Ok(Submission::Ignored);
        }

        let guess = Word::new(self.input.as_str())?;
        clue.check_against(&guess)?;

        if clue.is_full_match() {
            self.answer = Some(guess.clone());
        }
        self.record(guess, clue).map(Submission::Recorded)
    }

    fn submit_answer(&mut self) -> Result<Submission, ClueError> {
        if self.finished || self.input.len() != self.config.word_length {
            return Ok(Submission::Ignored);
        }
        if !self.store.is_word(&self.input) {
            log::debug!("Rejected '{}': not a word", self.input);
            return Ok(Submission::NotAWord(self.input.clone()));
        }

        let answer = self
            .answer
            .as_ref()
            .ok_or(ClueError::WrongMode { mode: Mode::Clue })?;
        let guess = Word::new(self.input.as_str())?;
        let clue = Clue::calculate(&guess, answer)?;
        self.record(guess, clue).map(Submission::Recorded)
    }

    fn record(&mut self, guess: Word, clue: Clue) -> Result<Turn, ClueError> {
        let groups = get_groups(&guess, &self.candidates)?;
        let reduced = reduce_candidates(&guess, &clue, &self.candidates)?;

        let candidates_before = self.candidates.len();
        let candidates_after = reduced.len();
        let finished =
            clue.is_full_match() || self.guess_index + 1 >= self.config.max_guesses;

        log::debug!(
            "Guess {} '{guess}' -> {clue}: {candidates_before} -> {candidates_after} candidates, {} groups",
            self.guess_index + 1,
            groups.len()
        );

        self.candidates = reduced;
        self.history.push(HistoryEntry {
            guess: guess.clone(),
            clue: clue.clone(),
        });
        self.input.clear();
        self.pending.fill(Code::NoMatch);
        if finished {
            self.finished = true;
            log::debug!("Session finished after {} guesses", self.history.len());
        } else {
            self.guess_index += 1;
        }

        Ok(Turn {
            guess,
            clue,
            candidates_before,
            candidates_after,
            groups: groups.len(),
            finished,
        })
    }

    /// Clear progress but keep the answer (answer mode) or drop it (clue mode)
    pub fn reset(&mut self) {
        if self.config.mode == Mode::Clue {
            self.answer = None;
        }
        self.candidates = self.store.dictionary(self.config.word_length).to_vec();
        self.input.clear();
        self.guess_index = 0;
        self.finished = false;
        self.history.clear();
        self.pending.fill(Code::NoMatch);
    }

    /// Start a new game with a fresh random answer
    ///
    /// # Errors
    /// Returns `ClueError::EmptyDictionary` if no word of the configured
    /// length exists.
    pub fn restart(&mut self) -> Result<(), ClueError> {
        self.restart_with(&mut rand::rng())
    }

    /// Start a new game drawing the answer from `rng`
    ///
    /// # Errors
    /// Returns `ClueError::EmptyDictionary` if no word of the configured
    /// length exists.
    pub fn restart_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), ClueError> {
        *self = Self::with_rng(self.store, self.config, rng)?;
        Ok(())
    }

    /// Switch mode and start a new game
    ///
    /// # Errors
    /// Returns `ClueError::EmptyDictionary` if no word of the configured
    /// length exists.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), ClueError> {
        let config = self.config.with_mode(mode);
        *self = Self::new(self.store, config)?;
        Ok(())
    }

    /// Dictionary the session draws from
    #[must_use]
    pub const fn store(&self) -> &'a WordStore {
        self.store
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.config.mode
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Known or inferred answer
    #[must_use]
    pub fn answer(&self) -> Option<&Word> {
        self.answer.as_ref()
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Zero-based index of the current guess row
    #[must_use]
    pub const fn guess_index(&self) -> usize {
        self.guess_index
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// True when the last clue was a full match
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.history
            .last()
            .is_some_and(|entry| entry.clue.is_full_match())
    }

    /// Words still consistent with every clue so far
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Guesses left before the session finishes
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        if self.finished {
            0
        } else {
            self.config.max_guesses.saturating_sub(self.guess_index)
        }
    }
}
