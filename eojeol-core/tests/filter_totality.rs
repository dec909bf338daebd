//! Every filter answers for every string

use eojeol_core::filters::CandidateScores;
use eojeol_core::text::{char_len, split_at_char};
use eojeol_core::{
    CooccurrenceGraph, FilterContext, NounDictionary, NounEntry, NounPredictor, ResourceStore,
    Thresholds,
};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

struct State {
    graph: CooccurrenceGraph,
    resources: ResourceStore,
    thresholds: Thresholds,
    dictionary: NounDictionary,
    strong: CandidateScores,
    accepted: CandidateScores,
}

impl State {
    fn new() -> Self {
        let corpus = [
            "대학생은 대학생으로 대학에서 교수가 폭행당했다 당했다 떡볶이는 떡볶이 공부하고 서울",
            "대학교수 대학교수를 학교의 학교에 회의를 성심당에 없는 갔다",
        ];
        let graph = CooccurrenceGraph::build(corpus, 10, 7);
        let scores: HashMap<String, f64> =
            [("은", 0.9), ("으로", 0.8), ("에서", 0.9), ("가", 0.7), ("다", -0.9), ("의", 0.8)]
                .into_iter()
                .map(|(r, s)| (r.to_string(), s))
                .collect();
        let verbs: HashSet<String> = ["하", "하고", "당"].into_iter().map(String::from).collect();
        let adjectives: HashSet<String> = ["없"].into_iter().map(String::from).collect();
        let resources = ResourceStore::new(scores, verbs, adjectives, 0.1);

        let mut dictionary = NounDictionary::new();
        for noun in ["대학", "교수", "학교"] {
            dictionary.insert(noun, NounEntry::Provisional(1.0));
        }
        let predictor = NounPredictor::new(&graph, &resources);
        let strong: CandidateScores = ["대학생", "폭행", "떡볶이"]
            .into_iter()
            .map(|w| (w.to_string(), predictor.predict(w)))
            .collect();
        let accepted = strong.clone();

        Self {
            graph,
            resources,
            thresholds: Thresholds::default(),
            dictionary,
            strong,
            accepted,
        }
    }

    fn context(&self) -> FilterContext<'_> {
        FilterContext::new(
            &self.graph,
            &self.resources,
            &self.thresholds,
            &self.dictionary,
            &self.strong,
            &self.accepted,
        )
    }
}

fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        ".{0,12}",
        prop::collection::vec(
            prop::sample::select(vec!['대', '학', '생', '으', '로', '교', '수', '당', '했', '다']),
            0..10
        )
        .prop_map(|chars| chars.into_iter().collect()),
    ]
}

proptest! {
    #[test]
    fn filters_are_total(w in word()) {
        let state = State::new();
        let ctx = state.context();

        let _ = ctx.is_particle_contraction(&w);
        let _ = ctx.truncated_prefixes(&w);
        let _ = ctx.is_verb_ending_contraction(&w);
        let _ = ctx.is_frequency_drop(&w);
        let _ = ctx.is_noun_particle(&w);
        let _ = ctx.is_noun_predicate(&w);
        let _ = ctx.passes_unique_particle(&w);
        let _ = ctx.passes_suffix_stoplist(&w);
        let _ = ctx.passes_verbalizer(&w);

        if char_len(&w) < 4 {
            prop_assert!(!ctx.is_compound(&w));
        }
    }

    #[test]
    fn compound_parts_are_known(w in word()) {
        let state = State::new();
        let ctx = state.context();

        if ctx.is_compound(&w) {
            let known_head = (2..char_len(&w))
                .any(|e| ctx.is_known_noun(split_at_char(&w, e).0));
            prop_assert!(known_head);
        }
    }

    #[test]
    fn truncated_prefixes_are_proper(w in word()) {
        let state = State::new();
        let ctx = state.context();

        for prefix in ctx.truncated_prefixes(&w) {
            prop_assert!(w.starts_with(&prefix));
            prop_assert!(char_len(&prefix) >= 2 && char_len(&prefix) < char_len(&w));
        }
    }
}
