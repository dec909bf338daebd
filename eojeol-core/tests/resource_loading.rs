//! Resource loading from files

use eojeol_core::resources::{load_noun_list, load_suffix_scores};
use eojeol_core::{ResourceError, ResourcePaths, ResourceStore};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_all_resources() {
    let dir = TempDir::new().unwrap();
    let paths = ResourcePaths {
        suffix_scores: vec![
            write(&dir, "first.tsv", "은\t0.9\n다\t-0.8\n으로\t0.05\n"),
            write(&dir, "second.tsv", "은\t0.7\n으로\t0.6\n"),
        ],
        verb_stems: Some(write(&dir, "verbs.txt", "하\tVerb\n먹\n")),
        adjective_stems: Some(write(&dir, "adjectives.txt", "없\n")),
    };

    let outcome = ResourceStore::load(&paths, 0.1);
    assert!(outcome.is_clean());
    let store = outcome.value;

    assert_eq!(store.suffix_score("은"), Some(0.9));
    assert_eq!(store.suffix_score("으로"), Some(0.6));
    // Only one source knows 다, so it stays negative
    assert_eq!(store.suffix_score("다"), Some(-0.8));

    assert!(store.is_particle("은"));
    assert!(store.is_particle("으로"));
    assert!(store.is_particle("는"));
    assert!(!store.is_particle("다"));

    assert!(store.is_verb_stem("하"));
    assert!(store.is_verb_stem("먹"));
    assert!(store.is_adjective_stem("없"));
    assert!(store.is_predicate_stem("없"));
}

#[test]
fn test_missing_files_degrade() {
    let dir = TempDir::new().unwrap();
    let paths = ResourcePaths {
        suffix_scores: vec![
            dir.path().join("missing.tsv"),
            write(&dir, "scores.tsv", "에\t0.9\n"),
        ],
        verb_stems: Some(dir.path().join("missing_verbs.txt")),
        adjective_stems: None,
    };

    let outcome = ResourceStore::load(&paths, 0.1);
    assert_eq!(outcome.issues.len(), 2);
    assert!(outcome
        .issues
        .iter()
        .all(|issue| matches!(issue, ResourceError::Io { .. })));
    assert_eq!(outcome.value.suffix_score("에"), Some(0.9));
    assert_eq!(outcome.value.num_suffix_scores(), 1);
}

#[test]
fn test_malformed_lines_are_skipped() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "scores.tsv", "에\t0.9\n잘못된줄\n를\tabc\n의\t0.8\textra\n가\t0.5\n");

    let outcome = load_suffix_scores(&path);
    assert_eq!(outcome.value.len(), 2);
    assert_eq!(outcome.issues.len(), 3);

    let lines: Vec<usize> = outcome
        .issues
        .iter()
        .filter_map(|issue| match issue {
            ResourceError::MalformedLine { line, .. } => Some(*line),
            _ => None,
        })
        .collect();
    assert_eq!(lines, vec![2, 3, 4]);

    assert!(outcome.into_strict().is_err());
}

#[test]
fn test_load_base_dictionary() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "nouns.tsv", "학교\t0.8\n바다\n하늘\tnope\n");

    let outcome = load_noun_list(&path);
    assert_eq!(outcome.value.get("학교"), Some(&0.8));
    assert_eq!(outcome.value.get("바다"), Some(&0.0));
    assert!(!outcome.value.contains_key("하늘"));
    assert_eq!(outcome.issues.len(), 1);
}
