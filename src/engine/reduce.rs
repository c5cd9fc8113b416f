//! Candidate reduction
//!
//! A candidate survives a (guess, clue) observation only if playing the guess
//! against it would have produced exactly that clue.

use super::PARALLEL_THRESHOLD;
use crate::core::{Clue, Word};
use crate::error::ClueError;
use rayon::prelude::*;

#[inline]
fn is_consistent(guess: &Word, clue: &Clue, candidate: &Word) -> bool {
    candidate.len() == guess.len() && Clue::compute(guess, candidate) == *clue
}

/// Keep the candidates consistent with an observed clue
///
/// Returns a new vector in the original relative order; the input is never
/// modified. Candidates whose length differs from the guess never survive.
/// Large inputs are filtered on the rayon pool with the same ordering.
///
/// # Errors
/// Returns `ClueError::LengthMismatch` if the clue and guess differ in length.
///
/// # Examples
/// ```
/// use wordle_clue::core::{Clue, Word};
/// use wordle_clue::engine::reduce_candidates;
/// use wordle_clue::wordlists::loader::words_from_slice;
///
/// let candidates = words_from_slice(&["crate", "trace", "react", "cater"]);
/// let guess = Word::new("crate").unwrap();
/// let clue = Clue::parse("12212").unwrap();
///
/// let left = reduce_candidates(&guess, &clue, &candidates).unwrap();
/// assert_eq!(left, words_from_slice(&["trace"]));
/// ```
pub fn reduce_candidates(
    guess: &Word,
    clue: &Clue,
    candidates: &[Word],
) -> Result<Vec<Word>, ClueError> {
    if clue.len() != guess.len() {
        return Err(ClueError::LengthMismatch {
            expected: guess.len(),
            actual: clue.len(),
        });
    }

    let reduced: Vec<Word> = if candidates.len() >= PARALLEL_THRESHOLD {
        candidates
            .par_iter()
            .filter(|candidate| is_consistent(guess, clue, candidate))
            .cloned()
            .collect()
    } else {
        candidates
            .iter()
            .filter(|candidate| is_consistent(guess, clue, candidate))
            .cloned()
            .collect()
    };

    log::debug!(
        "{guess} {clue}: {} -> {} candidates",
        candidates.len(),
        reduced.len()
    );
    Ok(reduced)
}

/// Apply every (guess, clue) observation in turn
///
/// # Errors
/// Returns the first `ClueError::LengthMismatch` among the observations.
pub fn filter_history<'h>(
    history: impl IntoIterator<Item = (&'h Word, &'h Clue)>,
    candidates: &[Word],
) -> Result<Vec<Word>, ClueError> {
    let mut remaining = candidates.to_vec();
    for (guess, clue) in history {
        remaining = reduce_candidates(guess, clue, &remaining)?;
    }
    Ok(remaining)
}
