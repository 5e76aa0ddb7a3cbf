//! Chain query result
//!
//! An immutable value holding every shortest path found between a start and end
//! word. Absence of a chain is an ordinary outcome, so "not found" is the empty
//! value rather than an error.

use crate::core::Word;
use rustc_hash::FxHashSet;

/// All shortest chains between a start and end word
///
/// Every stored path has the same length: the minimum over the whole graph. The
/// empty result carries no resolved start or end, and is what every unsatisfiable
/// query returns.
#[derive(Debug, Clone)]
pub struct WordChain {
    start: Option<Word>,
    end: Option<Word>,
    paths: FxHashSet<Vec<Word>>,
}

impl WordChain {
    /// Wrap a found path set
    pub(crate) fn new(start: Word, end: Word, paths: FxHashSet<Vec<Word>>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            paths,
        }
    }

    /// The not-found value: no paths, no resolved start or end
    #[must_use]
    pub fn empty() -> Self {
        Self {
            start: None,
            end: None,
            paths: FxHashSet::default(),
        }
    }

    /// Start word of the query, if any chain was found
    #[must_use]
    pub const fn start(&self) -> Option<&Word> {
        self.start.as_ref()
    }

    /// End word of the query, if any chain was found
    #[must_use]
    pub const fn end(&self) -> Option<&Word> {
        self.end.as_ref()
    }

    /// Number of shortest chains found
    #[must_use]
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Whether no chain was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of words in each stored chain, if any were found
    ///
    /// All chains share this length; it equals the graph distance plus one.
    #[must_use]
    pub fn chain_length(&self) -> Option<usize> {
        self.paths.iter().next().map(Vec::len)
    }

    /// Membership test: is this exact word sequence one of the stored chains
    #[must_use]
    pub fn contains(&self, path: &[Word]) -> bool {
        self.paths.contains(path)
    }

    /// Iterate over the stored chains, each exactly once, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &[Word]> {
        self.paths.iter().map(Vec::as_slice)
    }
}
