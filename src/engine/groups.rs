//! Guess grouping
//!
//! Partitions a candidate set by the clue a guess would produce against each
//! candidate, and summarizes the partition shape.

use super::PARALLEL_THRESHOLD;
use crate::core::{Clue, Word};
use crate::error::ClueError;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Candidates partitioned by clue
///
/// Groups are kept in order of first appearance and each group keeps the
/// candidates' original order. No group is ever empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Groups {
    groups: Vec<(Clue, Vec<Word>)>,
    index: FxHashMap<Clue, usize>,
}

/// Summary of how well a guess splits the candidates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupMetrics {
    /// Number of distinct clues
    pub groups: usize,
    /// Shannon entropy of the group distribution, in bits
    pub entropy: f64,
    /// Expected number of candidates left after the guess
    pub expected_remaining: f64,
    /// Size of the largest group (worst case)
    pub max_partition: usize,
}

impl Groups {
    fn push(&mut self, clue: Clue, word: Word) {
        if let Some(&slot) = self.index.get(&clue) {
            self.groups[slot].1.push(word);
        } else {
            self.index.insert(clue.clone(), self.groups.len());
            self.groups.push((clue, vec![word]));
        }
    }

    /// Number of distinct clues
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Candidates that produce `clue`, if any
    #[must_use]
    pub fn get(&self, clue: &Clue) -> Option<&[Word]> {
        self.index
            .get(clue)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    /// Iterate over (clue, members) in order of first appearance
    pub fn iter(&self) -> impl Iterator<Item = (&Clue, &[Word])> {
        self.groups
            .iter()
            .map(|(clue, words)| (clue, words.as_slice()))
    }

    /// Total number of candidates across all groups
    #[must_use]
    pub fn total(&self) -> usize {
        self.groups.iter().map(|(_, words)| words.len()).sum()
    }

    /// Groups ordered largest first; ties keep first-appearance order
    #[must_use]
    pub fn by_size(&self) -> Vec<(&Clue, &[Word])> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
        sorted
    }

    /// Entropy, expected remaining and worst-case size of the partition
    #[must_use]
    pub fn metrics(&self) -> GroupMetrics {
        let total = self.total();
        if total == 0 {
            return GroupMetrics {
                groups: 0,
                entropy: 0.0,
                expected_remaining: 0.0,
                max_partition: 0,
            };
        }

        let total = total as f64;
        let sizes = self.groups.iter().map(|(_, words)| words.len() as f64);

        let entropy: f64 = sizes
            .clone()
            .map(|size| {
                let p = size / total;
                -p * p.log2()
            })
            .sum();

        let expected_remaining: f64 = sizes.map(|size| size * size / total).sum();

        let max_partition = self
            .groups
            .iter()
            .map(|(_, words)| words.len())
            .max()
            .unwrap_or(0);

        GroupMetrics {
            groups: self.len(),
            entropy,
            expected_remaining,
            max_partition,
        }
    }
}

impl IntoIterator for Groups {
    type Item = (Clue, Vec<Word>);
    type IntoIter = std::vec::IntoIter<(Clue, Vec<Word>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Partition `candidates` by the clue `guess` produces against each
///
/// Clues for large inputs are computed on the rayon pool; the grouping itself
/// is sequential so ordering matches the single-threaded result.
///
/// # Errors
/// Returns `ClueError::LengthMismatch` for the first candidate whose length
/// differs from the guess.
///
/// # Examples
/// ```
/// use wordle_clue::core::Word;
/// use wordle_clue::engine::get_groups;
/// use wordle_clue::wordlists::loader::words_from_slice;
///
/// let candidates = words_from_slice(&["crate", "trace", "react", "cater"]);
/// let guess = Word::new("crate").unwrap();
///
/// let groups = get_groups(&guess, &candidates).unwrap();
/// assert_eq!(groups.len(), 4);
/// assert_eq!(groups.total(), 4);
/// ```
pub fn get_groups(guess: &Word, candidates: &[Word]) -> Result<Groups, ClueError> {
    if let Some(bad) = candidates.iter().find(|c| c.len() != guess.len()) {
        return Err(ClueError::LengthMismatch {
            expected: guess.len(),
            actual: bad.len(),
        });
    }

    let clues: Vec<Clue> = if candidates.len() >= PARALLEL_THRESHOLD {
        candidates
            .par_iter()
            .map(|candidate| Clue::compute(guess, candidate))
            .collect()
    } else {
        candidates
            .iter()
            .map(|candidate| Clue::compute(guess, candidate))
            .collect()
    };

    let mut groups = Groups::default();
    for (clue, candidate) in clues.into_iter().zip(candidates) {
        groups.push(clue, candidate.clone());
    }

    log::debug!(
        "{guess} splits {} candidates into {} groups",
        candidates.len(),
        groups.len()
    );
    Ok(groups)
}
