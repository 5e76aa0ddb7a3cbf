//! Core domain types for word ladders
//!
//! This module contains the fundamental domain types with zero external dependencies
//! beyond hashing. All types here are pure, immutable once built, and validated at
//! construction.

mod error;
mod word;
mod word_set;

pub use error::ChainError;
pub use word::Word;
pub use word_set::WordSet;
