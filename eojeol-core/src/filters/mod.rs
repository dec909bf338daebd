//! Heuristic filter bank
//!
//! Structural tests that tell real nouns apart from noun+particle
//! fragments, noun+ending contractions and compounds. Every filter is a
//! pure predicate over a [`FilterContext`], a snapshot of the graph, the
//! resources and the noun sets known at the time of the call.
//!
//! Three noun sets are consulted:
//! - the dictionary (base entries plus nouns seeded during the run)
//! - the strong candidates of the current extraction
//! - the candidates already accepted by post-processing

mod compound;
mod contraction;
mod hardrule;

use crate::config::Thresholds;
use crate::dictionary::NounDictionary;
use crate::graph::CooccurrenceGraph;
use crate::predictor::{NounPredictor, NounScore};
use crate::resources::ResourceStore;
use std::collections::BTreeMap;

/// Scores of candidates, keyed by substring
pub type CandidateScores = BTreeMap<String, NounScore>;

/// Borrowed state the filters read
#[derive(Debug, Clone, Copy)]
pub struct FilterContext<'a> {
    graph: &'a CooccurrenceGraph,
    resources: &'a ResourceStore,
    thresholds: &'a Thresholds,
    predictor: NounPredictor<'a>,
    dictionary: &'a NounDictionary,
    candidates: &'a CandidateScores,
    accepted: &'a CandidateScores,
}

impl<'a> FilterContext<'a> {
    /// Create a context over the given snapshot
    pub fn new(
        graph: &'a CooccurrenceGraph,
        resources: &'a ResourceStore,
        thresholds: &'a Thresholds,
        dictionary: &'a NounDictionary,
        candidates: &'a CandidateScores,
        accepted: &'a CandidateScores,
    ) -> Self {
        Self {
            graph,
            resources,
            thresholds,
            predictor: NounPredictor::new(graph, resources),
            dictionary,
            candidates,
            accepted,
        }
    }

    /// In the dictionary or among the strong candidates
    #[inline]
    pub fn is_known_noun(&self, word: &str) -> bool {
        self.candidates.contains_key(word) || self.dictionary.contains(word)
    }

    /// In the dictionary or already accepted by post-processing
    #[inline]
    pub fn is_accepted_noun(&self, word: &str) -> bool {
        self.accepted.contains_key(word) || self.dictionary.contains(word)
    }

    /// In the dictionary, or predicted to score above `threshold`
    #[inline]
    pub fn is_likely_noun(&self, word: &str, threshold: f64) -> bool {
        self.dictionary.contains(word) || self.predictor.score(word) > threshold
    }

    /// Total count of `word` as a left substring
    #[inline]
    fn frequency(&self, word: &str) -> u64 {
        self.graph.l_frequency(word)
    }
}
