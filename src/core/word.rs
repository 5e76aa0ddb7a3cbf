//! Word representation
//!
//! A Word is a lowercase alphabetic string of any length. Equal length across a
//! whole set is enforced by [`super::WordSet`], not here.

use super::ChainError;
use std::borrow::Borrow;
use std::fmt;

/// A validated, case-normalized word
///
/// Stores the word lowercase; equality, hashing, and ordering all operate on the
/// normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Uppercase input is accepted and normalized to lowercase.
    ///
    /// # Errors
    /// Returns [`ChainError::NonAlphabetic`] if the input is empty or contains
    /// anything outside the ASCII alphabet.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("Bird").unwrap();
    /// assert_eq!(word.text(), "bird");
    ///
    /// assert!(Word::new("b1rd").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, ChainError> {
        let raw: String = text.into();
        let text = raw.to_lowercase();

        if text.is_empty() || !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(ChainError::NonAlphabetic(raw));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    ///
    /// Validated words are ASCII, so bytes and letters coincide.
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.text.len()
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
