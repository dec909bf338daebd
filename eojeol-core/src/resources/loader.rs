//! Resource file loaders
//!
//! Every loader returns a [`LoadOutcome`]: missing files and malformed
//! lines are recorded as issues and loading continues with what is left.

use super::LoadOutcome;
use crate::error::ResourceError;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Locations of the resource files
#[derive(Debug, Clone, Default)]
pub struct ResourcePaths {
    /// Suffix score tables, merged by per-suffix maximum
    pub suffix_scores: Vec<PathBuf>,
    /// Verb stem list
    pub verb_stems: Option<PathBuf>,
    /// Adjective stem list
    pub adjective_stems: Option<PathBuf>,
}

fn open(path: &Path) -> Result<BufReader<File>, ResourceError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn source_name(path: &Path) -> String {
    path.display().to_string()
}

/// Iterate over the lines of a reader, recording read failures
fn for_each_line<R: BufRead>(
    reader: R,
    source: &str,
    issues: &mut Vec<ResourceError>,
    mut f: impl FnMut(usize, &str, &mut Vec<ResourceError>),
) {
    for (index, line) in reader.lines().enumerate() {
        match line {
            Ok(line) => {
                let line = line.trim_end_matches(['\r', '\n']);
                if line.trim().is_empty() {
                    continue;
                }
                f(index + 1, line, issues);
            }
            Err(e) => {
                issues.push(ResourceError::MalformedLine {
                    source_name: source.to_string(),
                    line: index + 1,
                    content: String::new(),
                    reason: e.to_string(),
                });
            }
        }
    }
}

/// Parse `suffix<TAB>score` lines
pub fn parse_suffix_scores<R: BufRead>(
    reader: R,
    source: &str,
) -> LoadOutcome<HashMap<String, f64>> {
    let mut scores = HashMap::new();
    let mut issues = Vec::new();

    for_each_line(reader, source, &mut issues, |line_no, line, issues| {
        let malformed = |reason: String| ResourceError::MalformedLine {
            source_name: source.to_string(),
            line: line_no,
            content: line.to_string(),
            reason,
        };

        let mut fields = line.split('\t');
        let (Some(suffix), Some(score), None) = (fields.next(), fields.next(), fields.next())
        else {
            issues.push(malformed("expected exactly two tab-separated fields".to_string()));
            return;
        };

        match score.trim().parse::<f64>() {
            Ok(score) if score.is_finite() => {
                let entry = scores.entry(suffix.to_string()).or_insert(score);
                *entry = entry.max(score);
            }
            Ok(score) => issues.push(malformed(format!("score {score} is not finite"))),
            Err(e) => issues.push(malformed(format!("invalid score: {e}"))),
        }
    });

    LoadOutcome {
        value: scores,
        issues,
    }
}

/// Load a suffix score table from a file
pub fn load_suffix_scores(path: impl AsRef<Path>) -> LoadOutcome<HashMap<String, f64>> {
    let path = path.as_ref();
    match open(path) {
        Ok(reader) => parse_suffix_scores(reader, &source_name(path)),
        Err(e) => LoadOutcome {
            value: HashMap::new(),
            issues: vec![e],
        },
    }
}

/// Merge `from` into `into`, keeping the larger score per suffix
pub fn merge_suffix_scores(into: &mut HashMap<String, f64>, from: HashMap<String, f64>) {
    for (suffix, score) in from {
        into.entry(suffix)
            .and_modify(|current| *current = current.max(score))
            .or_insert(score);
    }
}

/// Parse a word list; the word is the first tab-separated field
pub fn parse_word_list<R: BufRead>(reader: R, source: &str) -> LoadOutcome<HashSet<String>> {
    let mut words = HashSet::new();
    let mut issues = Vec::new();

    for_each_line(reader, source, &mut issues, |_, line, _| {
        if let Some(word) = line.trim().split('\t').next() {
            let word = word.trim();
            if !word.is_empty() {
                words.insert(word.to_string());
            }
        }
    });

    LoadOutcome {
        value: words,
        issues,
    }
}

/// Load a word list from a file
pub fn load_word_list(path: impl AsRef<Path>) -> LoadOutcome<HashSet<String>> {
    let path = path.as_ref();
    match open(path) {
        Ok(reader) => parse_word_list(reader, &source_name(path)),
        Err(e) => LoadOutcome {
            value: HashSet::new(),
            issues: vec![e],
        },
    }
}

/// Parse `noun[<TAB>score]` lines of a base noun dictionary
///
/// A missing score defaults to 0.
pub fn parse_noun_list<R: BufRead>(reader: R, source: &str) -> LoadOutcome<HashMap<String, f64>> {
    let mut nouns = HashMap::new();
    let mut issues = Vec::new();

    for_each_line(reader, source, &mut issues, |line_no, line, issues| {
        let mut fields = line.trim().split('\t');
        let noun = fields.next().unwrap_or_default().trim();
        if noun.is_empty() {
            return;
        }
        let score = match fields.next().map(str::trim).filter(|s| !s.is_empty()) {
            None => 0.0,
            Some(raw) => match raw.parse::<f64>() {
                Ok(score) => score,
                Err(e) => {
                    issues.push(ResourceError::MalformedLine {
                        source_name: source.to_string(),
                        line: line_no,
                        content: line.to_string(),
                        reason: format!("invalid score: {e}"),
                    });
                    return;
                }
            },
        };
        nouns.insert(noun.to_string(), score);
    });

    LoadOutcome {
        value: nouns,
        issues,
    }
}

/// Load a base noun dictionary from a file
pub fn load_noun_list(path: impl AsRef<Path>) -> LoadOutcome<HashMap<String, f64>> {
    let path = path.as_ref();
    match open(path) {
        Ok(reader) => parse_noun_list(reader, &source_name(path)),
        Err(e) => LoadOutcome {
            value: HashMap::new(),
            issues: vec![e],
        },
    }
}
