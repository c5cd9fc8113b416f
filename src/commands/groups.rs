//! Guess analysis command
//!
//! Shows how a guess would split the candidates left after some
//! observed clues.

use crate::core::{Clue, Word};
use crate::engine::{Groups, filter_history, get_groups};
use crate::error::ClueError;
use anyhow::{Context, Result, anyhow};

/// Result of analyzing a guess
#[derive(Debug, Clone)]
pub struct GroupAnalysis {
    pub guess: Word,
    /// Candidates the guess was evaluated against
    pub candidates: usize,
    pub groups: Groups,
}

/// Parse an observation written as `guess=clue` (or `guess:clue`)
///
/// # Errors
///
/// Returns an error if the separator is missing, the guess is not a word,
/// or the clue is malformed or inconsistent with the guess.
pub fn parse_observation(text: &str) -> Result<(Word, Clue)> {
    let (guess, clue) = text
        .split_once(['=', ':'])
        .ok_or_else(|| anyhow!("expected 'guess=clue', got '{text}'"))?;

    let guess = Word::new(guess.trim()).with_context(|| format!("invalid guess in '{text}'"))?;
    let clue = Clue::parse(clue).with_context(|| format!("invalid clue in '{text}'"))?;
    clue.check_against(&guess)
        .with_context(|| format!("clue does not fit guess in '{text}'"))?;

    Ok((guess, clue))
}

/// Group `dictionary`, narrowed by `history`, under `guess`
///
/// # Errors
///
/// Returns an error if the guess is invalid or any word length disagrees.
pub fn analyze_guess(
    guess: &str,
    history: &[(Word, Clue)],
    dictionary: &[Word],
) -> Result<GroupAnalysis> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess '{guess}'"))?;

    if let Some((earlier, _)) = history.iter().find(|(w, _)| w.len() != guess.len()) {
        return Err(ClueError::LengthMismatch {
            expected: guess.len(),
            actual: earlier.len(),
        })
        .with_context(|| format!("observation '{earlier}' does not match '{guess}'"));
    }

    let candidates = filter_history(history.iter().map(|(w, c)| (w, c)), dictionary)?;
    let groups = get_groups(&guess, &candidates)?;

    log::debug!(
        "'{guess}' splits {} candidates into {} groups",
        candidates.len(),
        groups.len()
    );

    Ok(GroupAnalysis {
        guess,
        candidates: candidates.len(),
        groups,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Vec<Word> {
        words_from_slice(&["crate", "trace", "react", "cater", "slate"])
    }

    #[test]
    fn observation_formats() {
        let (guess, clue) = parse_observation("crate=12212").unwrap();
        assert_eq!(guess.text(), "crate");
        assert_eq!(clue.to_string(), "12212");

        let (_, clue) = parse_observation("CRATE:YGGYG").unwrap();
        assert_eq!(clue.to_string(), "12212");
    }

    #[test]
    fn bad_observations() {
        assert!(parse_observation("crate").is_err());
        assert!(parse_observation("cr4te=12212").is_err());
        assert!(parse_observation("crate=12x12").is_err());
        assert!(parse_observation("crate=1221").is_err());
        // second s partial after first s nomatch
        assert!(parse_observation("sassy=01010").is_err());
    }

    #[test]
    fn groups_cover_every_candidate() {
        let analysis = analyze_guess("crate", &[], &dictionary()).unwrap();
        assert_eq!(analysis.candidates, 5);
        assert_eq!(analysis.groups.total(), 5);
        assert_eq!(analysis.groups.len(), 5);
    }

    #[test]
    fn history_narrows_first() {
        let history = vec![parse_observation("slate=00222").unwrap()];
        let analysis = analyze_guess("trace", &history, &dictionary()).unwrap();

        assert_eq!(analysis.candidates, 1);
        assert_eq!(analysis.groups.by_size()[0].1[0].text(), "crate");
    }

    #[test]
    fn length_disagreement_is_an_error() {
        let history = vec![parse_observation("book=0000").unwrap()];
        assert!(analyze_guess("crate", &history, &dictionary()).is_err());
        assert!(analyze_guess("book", &[], &dictionary()).is_err());
    }
}
