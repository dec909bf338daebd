//! Property tests for the substring graph and the predictor

use eojeol_core::text::{char_len, split_at_char};
use eojeol_core::{CooccurrenceGraph, NounPredictor, ResourceStore};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

const L_MAX: usize = 4;
const R_MAX: usize = 3;

fn token() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['학', '교', '에', '서', '는', '다']), 1..9)
        .prop_map(|chars| chars.into_iter().collect())
}

fn sentences() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::collection::vec(token(), 1..6), 0..8)
        .prop_map(|sentences| sentences.into_iter().map(|t| t.join(" ")).collect())
}

fn resources() -> ResourceStore {
    let scores: HashMap<String, f64> = [("에", 0.9), ("에서", 0.8), ("는", 0.7), ("다", -0.9)]
        .into_iter()
        .map(|(r, s)| (r.to_string(), s))
        .collect();
    ResourceStore::new(scores, HashSet::new(), HashSet::new(), 0.1)
}

/// Expected (l, r) counts computed directly from the tokens
fn expected_pairs(sentences: &[String]) -> HashMap<(String, String), u64> {
    let mut pairs = HashMap::new();
    for token in sentences.iter().flat_map(|s| s.split_whitespace()) {
        let n = char_len(token);
        if n > L_MAX + R_MAX {
            continue;
        }
        for e in 1..=L_MAX.min(n) {
            if n - e > R_MAX {
                continue;
            }
            let (l, r) = split_at_char(token, e);
            *pairs.entry((l.to_string(), r.to_string())).or_insert(0) += 1;
        }
    }
    pairs
}

proptest! {
    #[test]
    fn forward_graph_matches_direct_count(sentences in sentences()) {
        let graph = CooccurrenceGraph::build(&sentences, L_MAX, R_MAX);
        let expected = expected_pairs(&sentences);

        for ((l, r), count) in &expected {
            prop_assert_eq!(graph.count(l, r), *count);
        }
        let total: usize = graph
            .left_counts()
            .map(|(l, _)| graph.right_extensions(l).map_or(0, |e| e.len()))
            .sum();
        prop_assert_eq!(total, expected.len());
    }

    #[test]
    fn transpose_is_exact(sentences in sentences()) {
        let graph = CooccurrenceGraph::build(&sentences, L_MAX, R_MAX);

        for (l, _) in graph.left_counts() {
            for (r, &count) in graph.right_extensions(l).unwrap() {
                if r.is_empty() {
                    continue;
                }
                let back = graph.left_extensions(r).and_then(|e| e.get(l)).copied();
                prop_assert_eq!(back, Some(count));
            }
        }
    }

    #[test]
    fn left_count_is_sum_of_extensions(sentences in sentences()) {
        let graph = CooccurrenceGraph::build(&sentences, L_MAX, R_MAX);

        for (l, count) in graph.left_counts() {
            prop_assert!(!l.is_empty());
            let sum: u64 = graph.right_extensions(l).unwrap().values().sum();
            prop_assert_eq!(count, sum);
        }
    }

    #[test]
    fn predictor_bounds(sentences in sentences()) {
        let graph = CooccurrenceGraph::build(&sentences, L_MAX, R_MAX);
        let resources = resources();
        let predictor = NounPredictor::new(&graph, &resources);

        for (l, _) in graph.left_counts() {
            let score = predictor.predict(l);
            prop_assert!((0.0..=1.0 + 1e-9).contains(&score.feature_proportion));
            prop_assert!((0.0..=1.0).contains(&score.eojeol_proportion));
            prop_assert!((0.0..=1.0).contains(&score.positive_feature_ratio));
            prop_assert!((-1.0..=1.0).contains(&score.score));
            prop_assert_eq!(score, predictor.predict(l));
        }
    }
}
