//! Single clue command

use crate::core::{Clue, Word};
use anyhow::{Context, Result};

/// Compute the clue `answer` gives for `guess`
///
/// Neither word has to be in the dictionary.
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn compute_clue(guess: &str, answer: &str) -> Result<(Word, Clue)> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess '{guess}'"))?;
    let answer = Word::new(answer).with_context(|| format!("invalid answer '{answer}'"))?;
    let clue = Clue::calculate(&guess, &answer)?;
    Ok((guess, clue))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_duplicate_aware_clue() {
        let (guess, clue) = compute_clue("ABCAA", "aabbc").unwrap();
        assert_eq!(guess.text(), "abcaa");
        assert_eq!(clue.to_string(), "21110");
    }

    #[test]
    fn rejects_bad_input() {
        assert!(compute_clue("crate", "book").is_err());
        assert!(compute_clue("cr4te", "trace").is_err());
        assert!(compute_clue("crate", "").is_err());
    }
}
