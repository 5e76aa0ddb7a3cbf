//! Multi-length chain index
//!
//! A mixed-length vocabulary partitions into independent per-length graphs; words
//! of different lengths can never chain into each other. The index owns one
//! [`WordChainer`] per distinct length and dispatches queries by length.

use super::{WordChain, WordChainer};
use crate::core::{ChainError, Word, WordSet};
use crate::graph::WordGraph;
use rustc_hash::{FxHashMap, FxHashSet};

/// Per-length word graphs over a mixed-length vocabulary
pub struct WordChainIndex {
    buckets: FxHashMap<usize, WordChainer>,
}

impl WordChainIndex {
    /// Validate a mixed-length word list and build one graph per distinct length
    ///
    /// # Errors
    /// - [`ChainError::EmptyInput`] if the list has no entries
    /// - [`ChainError::NonAlphabetic`] if any word fails the alphabet check
    ///
    /// Length mismatches cannot occur here: every length gets its own bucket.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::chain::WordChainIndex;
    ///
    /// let index = WordChainIndex::new(["man", "mat", "bird", "bind"]).unwrap();
    /// assert_eq!(index.lengths(), [3, 4]);
    /// ```
    pub fn new<I, S>(raw_words: I) -> Result<Self, ChainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut partitions: FxHashMap<usize, FxHashSet<Word>> = FxHashMap::default();
        for raw in raw_words {
            let word = Word::new(raw.as_ref())?;
            partitions.entry(word.length()).or_default().insert(word);
        }
        if partitions.is_empty() {
            return Err(ChainError::EmptyInput);
        }

        let buckets = partitions
            .into_iter()
            .map(|(length, words)| {
                let set = WordSet::from_validated(words, length);
                (length, WordChainer::from_graph(WordGraph::new(set)))
            })
            .collect();

        Ok(Self { buckets })
    }

    /// The distinct word lengths present, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.buckets.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// The chainer for one word length, if that length is present
    #[must_use]
    pub fn bucket(&self, length: usize) -> Option<&WordChainer> {
        self.buckets.get(&length)
    }

    /// All shortest chains from `start` to `end`
    ///
    /// Start and end of different lengths, or a length with no bucket, are
    /// unsatisfiable rather than wrong: both yield the empty result.
    #[must_use]
    pub fn query(&self, start: &str, end: &str) -> WordChain {
        if start.len() != end.len() {
            return WordChain::empty();
        }
        match self.buckets.get(&start.len()) {
            Some(chainer) => chainer.chains(start, end),
            None => WordChain::empty(),
        }
    }

    /// Neighbours of a word within its own length's graph
    ///
    /// Malformed words and lengths with no bucket have no neighbours.
    #[must_use]
    pub fn neighbours(&self, word: &str) -> FxHashSet<Word> {
        let Ok(word) = Word::new(word) else {
            return FxHashSet::default();
        };
        self.buckets
            .get(&word.length())
            .map(|chainer| chainer.graph().neighbours(&word))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED: [&str; 12] = [
        "man", "apt", "oat", "mat", "ape", "opt", "bird", "bind", "bord", "bond", "bong", "song",
    ];

    fn path(words: &[&str]) -> Vec<Word> {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn index_partitions_by_length() {
        let index = WordChainIndex::new(MIXED).unwrap();
        assert_eq!(index.lengths(), [3, 4]);
        assert_eq!(index.bucket(3).unwrap().graph().word_set().word_count(), 6);
        assert_eq!(index.bucket(4).unwrap().graph().word_set().word_count(), 6);
        assert!(index.bucket(5).is_none());
    }

    #[test]
    fn query_dispatches_to_matching_bucket() {
        let index = WordChainIndex::new(MIXED).unwrap();

        let chains = index.query("ape", "man");
        assert!(chains.contains(&path(&["ape", "apt", "opt", "oat", "mat", "man"])));

        let chains = index.query("bird", "song");
        assert_eq!(chains.path_count(), 2);
    }

    #[test]
    fn query_cross_length_is_empty_not_an_error() {
        let index = WordChainIndex::new(MIXED).unwrap();
        assert!(index.query("ape", "bird").is_empty());
        assert!(index.query("bird", "ape").is_empty());
    }

    #[test]
    fn query_without_bucket_is_empty() {
        let index = WordChainIndex::new(MIXED).unwrap();
        assert!(index.query("bride", "groom").is_empty());
    }

    #[test]
    fn index_empty_input_fails() {
        let raw: [&str; 0] = [];
        assert!(matches!(
            WordChainIndex::new(raw),
            Err(ChainError::EmptyInput)
        ));
    }

    #[test]
    fn index_non_alphabetic_fails() {
        assert!(matches!(
            WordChainIndex::new(["man", "b0nd"]),
            Err(ChainError::NonAlphabetic(w)) if w == "b0nd"
        ));
    }

    #[test]
    fn index_mixed_lengths_are_not_a_mismatch() {
        // The same list would fail WordSet validation; the index buckets it instead
        assert!(WordSet::new(["man", "bird"]).is_err());
        assert!(WordChainIndex::new(["man", "bird"]).is_ok());
    }

    #[test]
    fn neighbours_resolve_through_the_matching_bucket() {
        let index = WordChainIndex::new(MIXED).unwrap();

        let mut found: Vec<String> = index
            .neighbours("bond")
            .iter()
            .map(ToString::to_string)
            .collect();
        found.sort_unstable();
        assert_eq!(found, ["bind", "bong", "bord"]);

        assert!(index.neighbours("bride").is_empty());
        assert!(index.neighbours("b0nd").is_empty());
    }
}
