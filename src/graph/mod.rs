//! Neighbour graph construction
//!
//! Connects words that differ by exactly one letter into an adjacency map.

mod word_graph;

pub use word_graph::{AdjacencyMap, WordGraph};
