//! Corpus pattern resolution using glob

use crate::error::CliError;
use anyhow::Result;
use glob::glob;
use std::path::PathBuf;

/// Resolve corpus file patterns to sorted, deduplicated file paths
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|source| CliError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
        let before = files.len();

        for path in paths.filter_map(|entry| entry.ok()) {
            if path.is_file() {
                files.push(path);
            }
        }

        if files.len() == before {
            log::warn!("no corpus file matches {pattern}");
        }
    }

    if files.is_empty() {
        return Err(CliError::NoCorpusFiles {
            patterns: patterns.join(", "),
        }
        .into());
    }

    files.sort();
    files.dedup();

    Ok(files)
}
