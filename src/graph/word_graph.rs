//! One-letter-difference graph over a word set
//!
//! Neighbour discovery scans the full lowercase alphabet at every position rather
//! than comparing all word pairs, so a single query costs O(L * 26) set lookups.
//! The full adjacency map is built at most once per graph and cached.

use crate::core::{ChainError, Word, WordSet};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cell::OnceCell;

/// Cached edge structure: every member word mapped to its neighbour set
pub type AdjacencyMap = FxHashMap<Word, FxHashSet<Word>>;

/// A graph of equal-length words differing by exactly one letter
///
/// The word set is fixed at construction, so the adjacency map never needs
/// rebuilding once computed. The cache makes this type single-threaded; each
/// graph is meant to be owned by one caller.
#[derive(Debug)]
pub struct WordGraph {
    words: WordSet,
    adjacency: OnceCell<AdjacencyMap>,
}

impl WordGraph {
    /// Create a graph over an already-validated word set
    #[must_use]
    pub fn new(words: WordSet) -> Self {
        Self {
            words,
            adjacency: OnceCell::new(),
        }
    }

    /// Validate a raw word list and build a graph over it
    ///
    /// # Errors
    /// Propagates the [`WordSet::new`] validation errors.
    pub fn from_list<I, S>(raw_words: I) -> Result<Self, ChainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::new(WordSet::new(raw_words)?))
    }

    /// The underlying word set
    #[must_use]
    pub const fn word_set(&self) -> &WordSet {
        &self.words
    }

    /// Words in the set differing from `word` by exactly one letter
    ///
    /// The queried word does not need to be a member; candidates are still checked
    /// against the set. A word with no one-letter variant present returns an empty
    /// set, which is a normal outcome.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::graph::WordGraph;
    /// use word_ladder::core::Word;
    ///
    /// let graph = WordGraph::from_list(["bird", "bind", "bord", "song"]).unwrap();
    /// let neighbours = graph.neighbours(&Word::new("bird").unwrap());
    /// assert_eq!(neighbours.len(), 2);
    /// ```
    ///
    /// # Panics
    /// Will not panic - candidates only ever hold ASCII letters, so the `expect()`
    /// call is guaranteed safe.
    #[must_use]
    pub fn neighbours(&self, word: &Word) -> FxHashSet<Word> {
        let mut found = FxHashSet::default();
        let mut candidate = word.text().as_bytes().to_vec();

        for index in 0..candidate.len() {
            let original = candidate[index];
            for letter in b'a'..=b'z' {
                // Substituting the original letter back would reproduce the word itself
                if letter == original {
                    continue;
                }
                candidate[index] = letter;
                let text = std::str::from_utf8(&candidate).expect("candidate stays ASCII");
                if let Some(member) = self.words.get(text) {
                    found.insert(member.clone());
                }
            }
            candidate[index] = original;
        }

        found
    }

    /// The full adjacency map, computed on first access and cached
    ///
    /// Idempotent: repeated calls return the same cached map without recomputation.
    #[must_use]
    pub fn adjacency(&self) -> &AdjacencyMap {
        self.adjacency.get_or_init(|| {
            self.words
                .iter()
                .map(|word| (word.clone(), self.neighbours(word)))
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn sample_graph() -> WordGraph {
        WordGraph::from_list(["bird", "bind", "bord", "bond", "bong", "song"]).unwrap()
    }

    #[test]
    fn neighbours_of_bird() {
        let graph = sample_graph();
        let neighbours = graph.neighbours(&word("bird"));
        let mut found: Vec<&str> = neighbours.iter().map(Word::text).collect();
        found.sort_unstable();
        assert_eq!(found, ["bind", "bord"]);
    }

    #[test]
    fn neighbours_of_bond() {
        let graph = sample_graph();
        let neighbours = graph.neighbours(&word("bond"));
        let mut found: Vec<&str> = neighbours.iter().map(Word::text).collect();
        found.sort_unstable();
        assert_eq!(found, ["bind", "bong", "bord"]);
    }

    #[test]
    fn neighbours_never_contains_the_word_itself() {
        let graph = sample_graph();
        for member in graph.word_set().iter() {
            assert!(!graph.neighbours(member).contains(member));
        }
    }

    #[test]
    fn neighbours_relation_is_symmetric() {
        let graph = sample_graph();
        for member in graph.word_set().iter() {
            for neighbour in graph.neighbours(member) {
                assert!(
                    graph.neighbours(&neighbour).contains(member),
                    "{neighbour} -> {member} edge missing"
                );
            }
        }
    }

    #[test]
    fn neighbours_of_non_member_still_computed() {
        let graph = sample_graph();
        // "bund" is not in the set but has members one letter away
        let neighbours = graph.neighbours(&word("bund"));
        assert!(neighbours.contains("bind"));
        assert!(neighbours.contains("bond"));
    }

    #[test]
    fn neighbours_empty_is_normal() {
        let graph = WordGraph::from_list(["bird", "song"]).unwrap();
        assert!(graph.neighbours(&word("bird")).is_empty());
    }

    #[test]
    fn adjacency_covers_every_word() {
        let graph = sample_graph();
        let adjacency = graph.adjacency();
        assert_eq!(adjacency.len(), graph.word_set().word_count());
        for member in graph.word_set().iter() {
            assert!(adjacency.contains_key(member.text()));
        }
    }

    #[test]
    fn adjacency_is_cached() {
        let graph = sample_graph();
        let first = graph.adjacency();
        let second = graph.adjacency();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn from_list_propagates_validation_errors() {
        assert!(matches!(
            WordGraph::from_list(["bird", "b0nd"]),
            Err(ChainError::NonAlphabetic(_))
        ));
    }
}
