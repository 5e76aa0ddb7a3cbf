//! Construction-time errors
//!
//! Malformed input fails fast at construction. Unsatisfiable queries (absent words,
//! unreachable pairs, cross-length lookups) are NOT errors and come back as an empty
//! [`crate::chain::WordChain`] instead.

use std::fmt;

/// Error type for invalid word lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// The supplied word list had no entries
    EmptyInput,
    /// A word contained characters outside the alphabet; carries the offending word
    NonAlphabetic(String),
    /// A word did not match the length established by the first word
    LengthMismatch {
        /// The offending word
        word: String,
        /// Length every word in the list must have
        expected: usize,
    },
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Word list must contain at least one word"),
            Self::NonAlphabetic(word) => {
                write!(f, "Words must be alphabetic characters only, got {word:?}")
            }
            Self::LengthMismatch { word, expected } => {
                write!(
                    f,
                    "Words must all be {expected} letters, got {word:?} ({} letters)",
                    word.len()
                )
            }
        }
    }
}

impl std::error::Error for ChainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_empty_input() {
        let message = ChainError::EmptyInput.to_string();
        assert!(message.contains("at least one word"));
    }

    #[test]
    fn display_non_alphabetic_names_word() {
        let message = ChainError::NonAlphabetic("b1rd".to_string()).to_string();
        assert!(message.contains("b1rd"));
    }

    #[test]
    fn display_length_mismatch_names_word_and_length() {
        let error = ChainError::LengthMismatch {
            word: "songs".to_string(),
            expected: 4,
        };
        let message = error.to_string();
        assert!(message.contains("songs"));
        assert!(message.contains('4'));
    }
}
