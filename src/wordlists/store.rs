//! Dictionary partitioned by word length

use super::{WORDS, loader::words_from_slice};
use crate::core::Word;
use crate::error::ClueError;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};

/// Valid-word dictionary
///
/// Holds the answerable words grouped by length (first-seen order, no
/// duplicates) and the set of acceptable guesses. Answerable words are always
/// acceptable guesses.
#[derive(Debug, Clone, Default)]
pub struct WordStore {
    answers: FxHashMap<usize, Vec<Word>>,
    accepted: FxHashSet<String>,
}

impl WordStore {
    /// Build a store where answers and acceptable guesses are the same set
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        Self::with_guesses(words, std::iter::empty())
    }

    /// Build a store with extra acceptable guesses that are never answers
    pub fn with_guesses(
        answers: impl IntoIterator<Item = Word>,
        guesses: impl IntoIterator<Item = Word>,
    ) -> Self {
        let mut store = Self::default();

        for word in answers {
            if store.accepted.insert(word.text().to_string()) {
                store.answers.entry(word.len()).or_default().push(word);
            }
        }
        for word in guesses {
            store.accepted.insert(word.text().to_string());
        }

        log::debug!(
            "Word store ready: {} answers over lengths {:?}, {} acceptable guesses",
            store.len(),
            store.lengths(),
            store.accepted.len()
        );
        store
    }

    /// Store backed by the dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(WORDS))
    }

    /// Pick a uniformly random answer of the given length
    ///
    /// # Errors
    /// Returns `ClueError::EmptyDictionary` if no word has that length.
    pub fn select_word(&self, length: usize) -> Result<Word, ClueError> {
        self.select_word_with(&mut rand::rng(), length)
    }

    /// Pick a uniformly random answer using the supplied generator
    ///
    /// # Errors
    /// Returns `ClueError::EmptyDictionary` if no word has that length.
    pub fn select_word_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<Word, ClueError> {
        self.dictionary(length)
            .choose(rng)
            .cloned()
            .ok_or(ClueError::EmptyDictionary { length })
    }

    /// All answerable words of the given length, in dictionary order
    ///
    /// Returns an empty slice for a length with no words.
    #[must_use]
    pub fn dictionary(&self, length: usize) -> &[Word] {
        self.answers.get(&length).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Case-insensitive membership test against the acceptable guesses
    ///
    /// # Examples
    /// ```
    /// use wordle_clue::core::Word;
    /// use wordle_clue::wordlists::WordStore;
    ///
    /// let store = WordStore::new([Word::new("crate").unwrap()]);
    /// assert!(store.is_word("CRATE"));
    /// assert!(!store.is_word("trace"));
    /// ```
    #[must_use]
    pub fn is_word(&self, text: &str) -> bool {
        self.accepted.contains(text.to_ascii_lowercase().as_str())
    }

    /// Word lengths with at least one answer, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.answers.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Total number of answerable words
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.values().map(Vec::len).sum()
    }

    /// True when no answerable word is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn store() -> WordStore {
        WordStore::new(words_from_slice(&[
            "crate", "trace", "book", "react", "crate", "cater", "bake",
        ]))
    }

    #[test]
    fn dictionary_partitioned_by_length_in_order() {
        let store = store();
        let five: Vec<&str> = store.dictionary(5).iter().map(Word::text).collect();
        assert_eq!(five, vec!["crate", "trace", "react", "cater"]);

        let four: Vec<&str> = store.dictionary(4).iter().map(Word::text).collect();
        assert_eq!(four, vec!["book", "bake"]);

        assert!(store.dictionary(7).is_empty());
        assert_eq!(store.lengths(), vec![4, 5]);
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn select_word_has_requested_length() {
        let store = store();
        for _ in 0..20 {
            let word = store.select_word(4).unwrap();
            assert_eq!(word.len(), 4);
            assert!(store.dictionary(4).contains(&word));
        }
    }

    #[test]
    fn select_word_empty_dictionary() {
        assert_eq!(
            store().select_word(9),
            Err(ClueError::EmptyDictionary { length: 9 })
        );
        assert!(WordStore::default().select_word(5).is_err());
    }

    #[test]
    fn select_word_with_seed_is_reproducible() {
        let store = store();
        let a = store
            .select_word_with(&mut StdRng::seed_from_u64(7), 5)
            .unwrap();
        let b = store
            .select_word_with(&mut StdRng::seed_from_u64(7), 5)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn is_word_case_insensitive() {
        let store = store();
        assert!(store.is_word("crate"));
        assert!(store.is_word("CrAtE"));
        assert!(!store.is_word("crates"));
        assert!(!store.is_word(""));
        assert!(!store.is_word("cr4te"));

        let store = WordStore::new(words_from_slice(&["kayak"]));
        assert!(store.is_word("KAYAK"));
        assert!(!store.is_word("\u{212a}ayak"));
    }

    #[test]
    fn extra_guesses_are_accepted_but_never_answers() {
        let store = WordStore::with_guesses(
            words_from_slice(&["crate"]),
            words_from_slice(&["xylyl"]),
        );
        assert!(store.is_word("xylyl"));
        assert_eq!(store.dictionary(5).len(), 1);
    }

    #[test]
    fn embedded_store_has_five_letter_words() {
        let store = WordStore::embedded();
        assert!(!store.dictionary(5).is_empty());
        assert!(store.is_word("crate"));
        assert!(store.dictionary(5).iter().all(|w| w.len() == 5));
    }
}
