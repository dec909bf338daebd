//! Noun predictor
//!
//! Scores a left substring by the suffixes that follow it: a noun is
//! mostly followed by particles, which carry positive scores in the
//! suffix table, while verb stems are followed by endings with negative
//! scores.

use crate::graph::CooccurrenceGraph;
use crate::resources::ResourceStore;
use serde::{Deserialize, Serialize};

/// Noun-likelihood record of one left substring
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NounScore {
    /// Frequency-weighted mean score of the known suffixes
    pub score: f64,
    /// Total count of the substring, standalone uses included
    pub count: u64,
    /// Share of non-standalone uses followed by a known suffix
    pub feature_proportion: f64,
    /// Share of uses as a whole token
    pub eojeol_proportion: f64,
    /// Number of distinct known suffixes with a positive score
    pub positive_features: usize,
    /// Fraction of the distinct known suffixes that score positive
    pub positive_feature_ratio: f64,
}

/// Read-only view over the graph and resources that scores substrings
#[derive(Debug, Clone, Copy)]
pub struct NounPredictor<'a> {
    graph: &'a CooccurrenceGraph,
    resources: &'a ResourceStore,
}

impl<'a> NounPredictor<'a> {
    /// Create a predictor over a trained graph
    pub fn new(graph: &'a CooccurrenceGraph, resources: &'a ResourceStore) -> Self {
        Self { graph, resources }
    }

    /// Full noun-likelihood record of `l`
    pub fn predict(&self, l: &str) -> NounScore {
        let mut total = 0u64;
        let mut norm = 0u64;
        let mut weighted = 0.0f64;
        let mut features = 0usize;
        let mut positive_features = 0usize;

        if let Some(extensions) = self.graph.right_extensions(l) {
            for (r, &frequency) in extensions {
                total += frequency;
                let Some(score) = self.resources.suffix_score(r) else {
                    continue;
                };
                norm += frequency;
                weighted += frequency as f64 * score;
                features += 1;
                if score > 0.0 {
                    positive_features += 1;
                }
            }
        }

        let n_eojeol = self.graph.eojeol_frequency(l);
        let non_standalone = total.saturating_sub(n_eojeol);

        NounScore {
            score: ratio(weighted, norm as f64),
            count: total,
            feature_proportion: ratio(norm as f64, non_standalone as f64),
            eojeol_proportion: ratio(n_eojeol as f64, total as f64),
            positive_features,
            positive_feature_ratio: ratio(positive_features as f64, features as f64),
        }
    }

    /// Only the mean suffix score of `l`
    #[inline]
    pub fn score(&self, l: &str) -> f64 {
        self.predict(l).score
    }
}

/// `numerator / denominator`, or 0 when the denominator is not positive
#[inline]
pub(crate) fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
