//! Left/right substring co-occurrence graph
//!
//! Every token (eojeol) of length `n` is split at each point `e` in
//! `1..=min(l_max_length, n)` whose right part is at most `r_max_length`
//! characters long. The forward graph maps each left part to its right
//! parts; the transpose maps right parts back to left parts. Both are built
//! once and read-only afterwards.

use crate::text::{char_boundaries, char_len};
use rustc_hash::FxHashMap;

/// Right (or left) extensions of one substring with their counts
pub type Extensions = FxHashMap<String, u64>;

/// Forward graph, its transpose and token frequencies
#[derive(Debug, Clone, Default)]
pub struct CooccurrenceGraph {
    lr: FxHashMap<String, Extensions>,
    rl: FxHashMap<String, Extensions>,
    eojeols: FxHashMap<String, u64>,
    lcount: FxHashMap<String, u64>,
    rcount: FxHashMap<String, u64>,
}

impl CooccurrenceGraph {
    /// Build the graph from whitespace-delimited sentences
    pub fn build<I, S>(sentences: I, l_max_length: usize, r_max_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let eojeol_max_length = l_max_length + r_max_length;
        let mut eojeols: FxHashMap<String, u64> = FxHashMap::default();

        for sentence in sentences {
            for token in sentence.as_ref().split_whitespace() {
                if char_len(token) > eojeol_max_length {
                    continue;
                }
                *eojeols.entry(token.to_string()).or_insert(0) += 1;
            }
        }

        Self::from_eojeol_counts(eojeols, l_max_length, r_max_length)
    }

    /// Build the graph from pre-counted tokens
    ///
    /// Tokens longer than `l_max_length + r_max_length` are dropped.
    pub fn from_eojeol_counts(
        mut eojeols: FxHashMap<String, u64>,
        l_max_length: usize,
        r_max_length: usize,
    ) -> Self {
        let eojeol_max_length = l_max_length + r_max_length;
        eojeols.retain(|token, count| {
            *count > 0 && !token.is_empty() && char_len(token) <= eojeol_max_length
        });

        let mut lr: FxHashMap<String, Extensions> = FxHashMap::default();
        let mut rl: FxHashMap<String, Extensions> = FxHashMap::default();

        for (eojeol, &count) in &eojeols {
            let bounds = char_boundaries(eojeol);
            let n = bounds.len() - 1;
            for e in 1..=l_max_length.min(n) {
                if n - e > r_max_length {
                    continue;
                }
                let (l, r) = eojeol.split_at(bounds[e]);
                *lr.entry(l.to_string())
                    .or_default()
                    .entry(r.to_string())
                    .or_insert(0) += count;
                if !r.is_empty() {
                    *rl.entry(r.to_string())
                        .or_default()
                        .entry(l.to_string())
                        .or_insert(0) += count;
                }
            }
        }

        let lcount = lr
            .iter()
            .map(|(l, extensions)| (l.clone(), extensions.values().sum()))
            .collect();
        let rcount = rl
            .iter()
            .map(|(r, extensions)| (r.clone(), extensions.values().sum()))
            .collect();

        log::info!(
            "built substring graph: (L, R, eojeol) = ({}, {}, {})",
            lr.len(),
            rl.len(),
            eojeols.len()
        );

        Self {
            lr,
            rl,
            eojeols,
            lcount,
            rcount,
        }
    }

    /// Right extensions of a left substring
    #[inline]
    pub fn right_extensions(&self, l: &str) -> Option<&Extensions> {
        self.lr.get(l)
    }

    /// Left substrings preceding a right substring
    #[inline]
    pub fn left_extensions(&self, r: &str) -> Option<&Extensions> {
        self.rl.get(r)
    }

    /// Count of the (l, r) split
    pub fn count(&self, l: &str, r: &str) -> u64 {
        self.lr
            .get(l)
            .and_then(|extensions| extensions.get(r))
            .copied()
            .unwrap_or(0)
    }

    /// Total count of a left substring across all its extensions
    #[inline]
    pub fn l_frequency(&self, l: &str) -> u64 {
        self.lcount.get(l).copied().unwrap_or(0)
    }

    /// Total count of a right substring
    #[inline]
    pub fn r_frequency(&self, r: &str) -> u64 {
        self.rcount.get(r).copied().unwrap_or(0)
    }

    /// Frequency of a string as a standalone token
    #[inline]
    pub fn eojeol_frequency(&self, token: &str) -> u64 {
        self.eojeols.get(token).copied().unwrap_or(0)
    }

    /// Whether `l` occurs as a left substring
    #[inline]
    pub fn contains_left(&self, l: &str) -> bool {
        self.lcount.contains_key(l)
    }

    /// Share of `l`'s occurrences followed by exactly `r`
    pub fn extension_proportion(&self, l: &str, r: &str) -> f64 {
        let base = self.l_frequency(l);
        if base == 0 {
            return 0.0;
        }
        self.count(l, r) as f64 / base as f64
    }

    /// Left substrings with their total counts
    pub fn left_counts(&self) -> impl Iterator<Item = (&str, u64)> {
        self.lcount.iter().map(|(l, &count)| (l.as_str(), count))
    }

    /// Tokens with their frequencies
    pub fn eojeol_counts(&self) -> impl Iterator<Item = (&str, u64)> {
        self.eojeols.iter().map(|(token, &count)| (token.as_str(), count))
    }

    /// Number of distinct left substrings
    pub fn num_left(&self) -> usize {
        self.lr.len()
    }

    /// Number of distinct non-empty right substrings
    pub fn num_right(&self) -> usize {
        self.rl.len()
    }

    /// Number of distinct tokens
    pub fn num_eojeols(&self) -> usize {
        self.eojeols.len()
    }

    /// Whether no token was kept
    pub fn is_empty(&self) -> bool {
        self.eojeols.is_empty()
    }
}
