//! Shortest-chain search and results
//!
//! This module contains the breadth-first all-shortest-paths search, the immutable
//! result value it produces, and the multi-length index that dispatches queries to
//! the graph matching the query words' length.

mod chainer;
mod index;
mod word_chain;

pub use chainer::WordChainer;
pub use index::WordChainIndex;
pub use word_chain::WordChain;
