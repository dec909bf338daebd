//! Standalone-token analysis
//!
//! Left substrings that almost never take a suffix are whole tokens. Some
//! of them fuse a noun with a predicate stem (공부하 = 공부 + 하); the seed
//! pass mines those nouns before scoring so later filters can see them.

use crate::dictionary::{NounDictionary, NounEntry};
use crate::graph::CooccurrenceGraph;
use crate::predictor::{ratio, NounPredictor};
use crate::resources::ResourceStore;
use crate::text::{char_len, split_at_char};

/// Frequent left substrings used mostly as whole tokens, in key order
pub(crate) fn eojeol_candidates(
    graph: &CooccurrenceGraph,
    min_count: u64,
    minimum_eojeol_proportion: f64,
) -> Vec<(&str, u64)> {
    let mut candidates: Vec<(&str, u64)> = graph
        .left_counts()
        .filter(|&(l, count)| {
            count >= min_count
                && ratio(graph.eojeol_frequency(l) as f64, count as f64)
                    >= minimum_eojeol_proportion
        })
        .collect();
    candidates.sort_unstable_by(|a, b| a.0.cmp(b.0));
    candidates
}

/// Earliest split of `l` into a likely noun and a verb or adjective stem
pub(crate) fn split_noun_predicate<'l>(
    predictor: &NounPredictor<'_>,
    resources: &ResourceStore,
    l: &'l str,
    minimum_noun_score: f64,
) -> Option<(&'l str, &'l str)> {
    let n = char_len(l);
    if n < 4 {
        return None;
    }
    (2..n - 1)
        .map(|e| split_at_char(l, e))
        .find(|(head, tail)| {
            resources.is_predicate_stem(tail) && predictor.score(head) >= minimum_noun_score
        })
}

/// Insert the noun half of every noun + predicate token
///
/// Seeded nouns carry their left-substring count as a provisional score.
/// Returns the number of nouns added.
pub(crate) fn seed_nouns(
    graph: &CooccurrenceGraph,
    resources: &ResourceStore,
    candidates: &[(&str, u64)],
    minimum_noun_score: f64,
    dictionary: &mut NounDictionary,
) -> usize {
    let predictor = NounPredictor::new(graph, resources);
    let before = dictionary.len();

    for &(l, _) in candidates {
        let split = split_noun_predicate(&predictor, resources, l, minimum_noun_score);
        if let Some((noun, _)) = split {
            let count = graph.l_frequency(noun);
            dictionary.insert(noun, NounEntry::Provisional(count as f64));
        }
    }

    dictionary.len() - before
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    fn resources() -> ResourceStore {
        let scores: HashMap<String, f64> = [("를", 0.9), ("에", 0.8), ("다", -0.5)]
            .into_iter()
            .map(|(r, s)| (r.to_string(), s))
            .collect();
        let verbs: HashSet<String> = ["하", "하고"].into_iter().map(String::from).collect();
        ResourceStore::new(scores, verbs, HashSet::new(), 0.1)
    }

    fn corpus() -> Vec<&'static str> {
        vec!["공부하고 공부하고 공부하고 공부를 공부를 공부에", "먹었다 먹었다 먹었다"]
    }

    #[test]
    fn test_eojeol_candidates() {
        let graph = CooccurrenceGraph::build(corpus(), 10, 7);
        let candidates = eojeol_candidates(&graph, 3, 0.99);

        let words: Vec<&str> = candidates.iter().map(|&(l, _)| l).collect();
        assert_eq!(words, vec!["공부하고", "먹었다"]);
        assert_eq!(candidates[0].1, 3);
    }

    #[test]
    fn test_split_noun_predicate() {
        let graph = CooccurrenceGraph::build(corpus(), 10, 7);
        let resources = resources();
        let predictor = NounPredictor::new(&graph, &resources);

        assert_eq!(
            split_noun_predicate(&predictor, &resources, "공부하고", 0.4),
            Some(("공부", "하고"))
        );
        assert_eq!(split_noun_predicate(&predictor, &resources, "먹었다", 0.4), None);
        assert_eq!(split_noun_predicate(&predictor, &resources, "공부하고", 0.99), None);
    }

    #[test]
    fn test_seed_nouns() {
        let graph = CooccurrenceGraph::build(corpus(), 10, 7);
        let resources = resources();
        let candidates = eojeol_candidates(&graph, 3, 0.99);
        let mut dictionary = NounDictionary::new();

        let added = seed_nouns(&graph, &resources, &candidates, 0.4, &mut dictionary);

        assert_eq!(added, 1);
        assert_eq!(dictionary.get("공부"), Some(&NounEntry::Provisional(6.0)));
    }
}
