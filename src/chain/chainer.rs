//! All-shortest-chains search
//!
//! Breadth-first search that keeps EVERY predecessor reaching a word at its minimum
//! distance, then walks the predecessor branches backwards from the end word. This
//! recovers all shortest chains, not just the first one discovered.

use super::WordChain;
use crate::core::{ChainError, Word};
use crate::graph::{AdjacencyMap, WordGraph};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Finds all shortest word chains over one equal-length graph
pub struct WordChainer {
    graph: WordGraph,
}

impl WordChainer {
    /// Validate a raw word list and build the chainer over it
    ///
    /// # Errors
    /// Propagates the [`crate::core::WordSet::new`] validation errors.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::chain::WordChainer;
    ///
    /// let chainer = WordChainer::new(["bird", "bind", "bond"]).unwrap();
    /// assert_eq!(chainer.chains("bird", "bond").path_count(), 1);
    /// ```
    pub fn new<I, S>(raw_words: I) -> Result<Self, ChainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::from_graph(WordGraph::from_list(raw_words)?))
    }

    /// Build the chainer over an existing graph
    #[must_use]
    pub const fn from_graph(graph: WordGraph) -> Self {
        Self { graph }
    }

    /// The underlying neighbour graph
    #[must_use]
    pub const fn graph(&self) -> &WordGraph {
        &self.graph
    }

    /// All shortest chains from `start` to `end`
    ///
    /// Queries are case-normalized like construction input. A start or end word
    /// absent from the graph, or an end unreachable from the start, yields the
    /// empty result rather than an error. `chains(a, a)` for a member word yields
    /// the single-word chain.
    #[must_use]
    pub fn chains(&self, start: &str, end: &str) -> WordChain {
        let start = start.to_lowercase();
        let end = end.to_lowercase();

        let adjacency = self.graph.adjacency();
        let Some((start_word, _)) = adjacency.get_key_value(start.as_str()) else {
            return WordChain::empty();
        };
        let Some((end_word, _)) = adjacency.get_key_value(end.as_str()) else {
            return WordChain::empty();
        };

        if start_word == end_word {
            let mut paths = FxHashSet::default();
            paths.insert(vec![start_word.clone()]);
            return WordChain::new(start_word.clone(), end_word.clone(), paths);
        }

        let predecessors = shortest_predecessors(adjacency, start_word, end_word);
        if !predecessors.contains_key(end_word) {
            return WordChain::empty();
        }

        let paths = collect_paths(&predecessors, start_word, end_word);
        WordChain::new(start_word.clone(), end_word.clone(), paths)
    }
}

/// Level-by-level search recording every predecessor at the minimum distance
///
/// Stops expanding once the level past the end word's depth would begin; later
/// predecessors of the end at its own depth have all been recorded by then because
/// the queue drains strictly in depth order.
fn shortest_predecessors<'a>(
    adjacency: &'a AdjacencyMap,
    start: &'a Word,
    end: &'a Word,
) -> FxHashMap<&'a Word, Vec<&'a Word>> {
    let mut distance: FxHashMap<&Word, usize> = FxHashMap::default();
    let mut predecessors: FxHashMap<&Word, Vec<&Word>> = FxHashMap::default();
    let mut queue: VecDeque<&Word> = VecDeque::new();

    distance.insert(start, 0);
    queue.push_back(start);
    let mut end_depth: Option<usize> = None;

    while let Some(current) = queue.pop_front() {
        let depth = distance[current];
        if end_depth.is_some_and(|found| depth + 1 > found) {
            break;
        }

        let Some(neighbours) = adjacency.get(current) else {
            continue;
        };
        for neighbour in neighbours {
            let known = distance.get(neighbour).copied();
            match known {
                None => {
                    distance.insert(neighbour, depth + 1);
                    predecessors.entry(neighbour).or_default().push(current);
                    if neighbour == end {
                        end_depth = Some(depth + 1);
                    }
                    queue.push_back(neighbour);
                }
                // Another shortest route into an already-discovered word
                Some(found) if found == depth + 1 => {
                    predecessors.entry(neighbour).or_default().push(current);
                }
                Some(_) => {}
            }
        }
    }

    predecessors
}

/// Walk every predecessor branch backwards from `end`, materializing the chains
fn collect_paths(
    predecessors: &FxHashMap<&Word, Vec<&Word>>,
    start: &Word,
    end: &Word,
) -> FxHashSet<Vec<Word>> {
    let mut paths = FxHashSet::default();
    let mut stack: Vec<(&Word, Vec<&Word>)> = vec![(end, vec![end])];

    while let Some((current, tail)) = stack.pop() {
        if current == start {
            paths.insert(tail.iter().rev().map(|&word| word.clone()).collect());
            continue;
        }
        if let Some(into) = predecessors.get(current) {
            for &predecessor in into {
                let mut extended = tail.clone();
                extended.push(predecessor);
                stack.push((predecessor, extended));
            }
        }
    }

    paths
}
