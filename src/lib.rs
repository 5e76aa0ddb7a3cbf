//! Word Ladder
//!
//! Builds graphs of equal-length words differing by exactly one letter and finds
//! ALL shortest chains between a start and end word, not just one of them.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::chain::WordChainer;
//!
//! let chainer = WordChainer::new(["bird", "bind", "bord", "bond", "bong", "song"]).unwrap();
//! let chains = chainer.chains("bird", "song");
//!
//! assert_eq!(chains.path_count(), 2);
//! ```
//!
//! Mixed-length vocabularies go through [`chain::WordChainIndex`], which keeps one
//! independent graph per word length.

// Core domain types
pub mod core;

// Neighbour graph construction
pub mod graph;

// Shortest-chain search and results
pub mod chain;

// Word list loading
pub mod wordlists;

// Terminal output formatting
pub mod output;
