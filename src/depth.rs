//! Hypernymy depth of a word: the number of hypernym edges from its first
//! noun sense up to the concept just below the root.

use std::collections::{HashSet, VecDeque};

use serde_derive::Serialize;
use tracing::{debug, info, warn};

use crate::wordnet::{normalize, SynsetId, Taxonomy};

/// Depth reported for words that cannot be placed in the taxonomy. Walks
/// longer than this are cut off at this value.
pub const MAX_DEPTH: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    FirstHypernym,
    // Breadth-first over all hypernyms
    ShortestPath,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub index: usize,
    pub word: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepthResult {
    pub index: usize,
    pub word: String,
    pub depth: u32,
}

pub struct DepthCalculator<'a> {
    taxonomy: &'a dyn Taxonomy,
    root: SynsetId,
    strategy: Strategy,
}

impl<'a> DepthCalculator<'a> {
    pub fn new(taxonomy: &'a dyn Taxonomy, root: SynsetId, strategy: Strategy) -> Self {
        DepthCalculator {
            taxonomy,
            root,
            strategy,
        }
    }

    /// Depth of `word` in `[1, MAX_DEPTH]`; unknown words get `MAX_DEPTH`.
    pub fn depth_of(&self, word: &str) -> u32 {
        self.lookup(word).1
    }

    fn lookup(&self, word: &str) -> (bool, u32) {
        let word = normalize(word);
        let stems = self.taxonomy.stems(&word);
        let unstemmed = stems.is_empty();
        let lemma = match stems.first() {
            Some(stem) => stem.as_str(),
            None => {
                warn!("Could not find stemmed form of the word {:?}", word);
                word.as_str()
            }
        };
        let depth = match self.taxonomy.lookup_sense(lemma) {
            Some(sense) => match self.strategy {
                Strategy::FirstHypernym => self.first_hypernym_depth(sense),
                Strategy::ShortestPath => self.shortest_path_depth(sense),
            },
            None => {
                debug!("no noun sense for {:?}", lemma);
                MAX_DEPTH
            }
        };
        (unstemmed, depth)
    }

    fn is_top(&self, hypernyms: &[SynsetId]) -> bool {
        hypernyms.is_empty() || hypernyms.contains(&self.root)
    }

    fn first_hypernym_depth(&self, sense: SynsetId) -> u32 {
        let mut current = sense;
        let mut depth = 1;
        loop {
            let hypernyms = self.taxonomy.hypernyms(current);
            if self.is_top(&hypernyms) {
                return depth;
            }
            if depth >= MAX_DEPTH {
                warn!("hypernym chain from {:?} exceeds {} steps", sense, MAX_DEPTH);
                return MAX_DEPTH;
            }
            depth += 1;
            current = hypernyms[0];
        }
    }

    fn shortest_path_depth(&self, sense: SynsetId) -> u32 {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        visited.insert(sense);
        queue.push_back((sense, 1));
        while let Some((current, depth)) = queue.pop_front() {
            let hypernyms = self.taxonomy.hypernyms(current);
            if self.is_top(&hypernyms) {
                return depth;
            }
            if depth >= MAX_DEPTH {
                break;
            }
            for hypernym in hypernyms {
                if visited.insert(hypernym) {
                    queue.push_back((hypernym, depth + 1));
                }
            }
        }
        MAX_DEPTH
    }

    pub fn depths(&self, entries: &[WordEntry]) -> Vec<DepthResult> {
        let mut unknown = 0;
        let mut unstemmed = 0;
        let results: Vec<DepthResult> = entries
            .iter()
            .map(|entry| {
                let (no_stem, depth) = self.lookup(&entry.word);
                if no_stem {
                    unstemmed += 1;
                }
                if depth == MAX_DEPTH {
                    unknown += 1;
                }
                DepthResult {
                    index: entry.index,
                    word: entry.word.clone(),
                    depth,
                }
            })
            .collect();
        info!(
            "Computed {} depths ({} at {}, {} without a stem)",
            results.len(),
            unknown,
            MAX_DEPTH,
            unstemmed
        );
        results
    }
}
