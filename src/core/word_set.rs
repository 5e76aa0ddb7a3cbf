//! Validated word set
//!
//! A WordSet is the entry gate for all graph work: every member is alphabetic,
//! every member has the same length, duplicates are collapsed. Built once and
//! never mutated afterwards.

use super::{ChainError, Word};
use rustc_hash::FxHashSet;

/// A deduplicated set of equal-length words
#[derive(Debug, Clone)]
pub struct WordSet {
    words: FxHashSet<Word>,
    word_length: usize,
}

impl WordSet {
    /// Validate a raw word list into a WordSet
    ///
    /// The first word establishes the common length; every later word must match it.
    /// Duplicates (after case normalization) collapse to one entry.
    ///
    /// # Errors
    /// - [`ChainError::EmptyInput`] if the list has no entries
    /// - [`ChainError::NonAlphabetic`] if any word fails the alphabet check
    /// - [`ChainError::LengthMismatch`] if any word differs in length from the first
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::WordSet;
    ///
    /// let set = WordSet::new(["bird", "bind", "BIRD"]).unwrap();
    /// assert_eq!(set.word_count(), 2);
    /// assert_eq!(set.word_length(), 4);
    /// ```
    pub fn new<I, S>(raw_words: I) -> Result<Self, ChainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = FxHashSet::default();
        let mut word_length = None;

        for raw in raw_words {
            let word = Word::new(raw.as_ref())?;

            let expected = *word_length.get_or_insert(word.length());
            if word.length() != expected {
                return Err(ChainError::LengthMismatch {
                    word: word.text().to_string(),
                    expected,
                });
            }

            words.insert(word);
        }

        match word_length {
            Some(word_length) => Ok(Self { words, word_length }),
            None => Err(ChainError::EmptyInput),
        }
    }

    /// Internal constructor for words already validated to share a length
    pub(crate) fn from_validated(words: FxHashSet<Word>, word_length: usize) -> Self {
        Self { words, word_length }
    }

    /// The common length of every member
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of distinct words in the set
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Membership test by text
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.words.contains(text)
    }

    /// Look up the canonical Word for a text, if present
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.words.get(text)
    }

    /// Iterate over the member words in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}
