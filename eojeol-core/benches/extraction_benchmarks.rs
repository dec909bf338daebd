//! Performance benchmarks for graph training and noun extraction
//!
//! Run with: cargo bench --bench extraction_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use eojeol_core::{
    CooccurrenceGraph, ExtractParams, ExtractorConfig, NounExtractor, ResourceStore,
};
use std::collections::{HashMap, HashSet};
use std::hint::black_box;

const NOUNS: &[&str] = &[
    "학교", "대학생", "정부", "경제", "서울", "교수", "연구", "시장", "대통령", "사건", "기자",
    "회의", "국회", "은행", "주식",
];
const PARTICLES: &[&str] = &["은", "는", "이", "가", "을", "를", "에", "에서", "으로", "의", "와"];
const ENDINGS: &[&str] = &["했다", "하고", "하는", "된다"];

fn resources() -> ResourceStore {
    let mut scores: HashMap<String, f64> = PARTICLES
        .iter()
        .map(|p| (p.to_string(), 0.8))
        .collect();
    scores.extend(ENDINGS.iter().map(|e| (e.to_string(), -0.6)));
    let verbs: HashSet<String> = ["하", "되"].into_iter().map(String::from).collect();
    ResourceStore::new(scores, verbs, HashSet::new(), 0.1)
}

/// Deterministic synthetic corpus of `sentences` sentences
fn generate_corpus(sentences: usize) -> Vec<String> {
    (0..sentences)
        .map(|i| {
            (0..8)
                .map(|j| {
                    let k = i * 8 + j;
                    let noun = NOUNS[k % NOUNS.len()];
                    if k % 5 == 0 {
                        format!("{noun}{}", ENDINGS[k % ENDINGS.len()])
                    } else {
                        format!("{noun}{}", PARTICLES[(k / 3) % PARTICLES.len()])
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_graph_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_build");

    for size in [100, 1_000, 10_000] {
        let corpus = generate_corpus(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("build", size), &corpus, |b, corpus| {
            b.iter(|| CooccurrenceGraph::build(black_box(corpus), 10, 7));
        });
    }

    group.finish();
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    for size in [100, 1_000, 10_000] {
        let mut extractor = NounExtractor::new(ExtractorConfig::default(), resources()).unwrap();
        extractor.train(generate_corpus(size));
        let params = ExtractParams::default();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("extract", size), &params, |b, params| {
            b.iter(|| extractor.extract(black_box(params)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_graph_build, bench_extract);
criterion_main!(benches);
