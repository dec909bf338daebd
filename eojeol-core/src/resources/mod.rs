//! Resource store
//!
//! Holds the suffix score table, the particle set derived from it and the
//! verb/adjective stem sets. Immutable once built.

mod loader;

pub use loader::{
    load_noun_list, load_suffix_scores, load_word_list, merge_suffix_scores, parse_noun_list,
    parse_suffix_scores, parse_word_list, ResourcePaths,
};

use crate::error::ResourceError;
use crate::tables::DEFAULT_PARTICLES;
use std::collections::{HashMap, HashSet};

/// Data read from a resource together with the problems met on the way
#[derive(Debug)]
pub struct LoadOutcome<T> {
    /// Whatever could be loaded
    pub value: T,
    /// Recoverable problems, in the order they were found
    pub issues: Vec<ResourceError>,
}

impl<T> LoadOutcome<T> {
    /// An outcome with no issues
    pub fn clean(value: T) -> Self {
        Self {
            value,
            issues: Vec::new(),
        }
    }

    /// Whether loading finished without any issue
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Fail on the first issue instead of degrading
    pub fn into_strict(self) -> Result<T, ResourceError> {
        match self.issues.into_iter().next() {
            Some(issue) => Err(issue),
            None => Ok(self.value),
        }
    }

    /// Transform the loaded value, keeping the issues
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadOutcome<U> {
        LoadOutcome {
            value: f(self.value),
            issues: self.issues,
        }
    }
}

/// Suffix scores, particles and predicate stems
#[derive(Debug, Clone, Default)]
pub struct ResourceStore {
    suffix_scores: HashMap<String, f64>,
    particles: HashSet<String>,
    verb_stems: HashSet<String>,
    adjective_stems: HashSet<String>,
}

impl ResourceStore {
    /// Build the store; suffixes scoring above `particle_threshold` become particles
    pub fn new(
        suffix_scores: HashMap<String, f64>,
        verb_stems: HashSet<String>,
        adjective_stems: HashSet<String>,
        particle_threshold: f64,
    ) -> Self {
        Self {
            suffix_scores,
            particles: HashSet::new(),
            verb_stems,
            adjective_stems,
        }
        .with_particle_threshold(particle_threshold)
    }

    /// Rebuild the particle set from the suffixes scoring above `threshold`
    pub fn with_particle_threshold(mut self, threshold: f64) -> Self {
        self.particles = self
            .suffix_scores
            .iter()
            .filter(|&(_, &score)| score > threshold)
            .map(|(suffix, _)| suffix.clone())
            .collect();
        self.particles.extend(DEFAULT_PARTICLES.iter().map(|p| p.to_string()));
        self
    }

    /// Load every resource named in `paths`, degrading on failure
    pub fn load(paths: &ResourcePaths, particle_threshold: f64) -> LoadOutcome<Self> {
        let mut issues = Vec::new();

        let mut suffix_scores = HashMap::new();
        for path in &paths.suffix_scores {
            let outcome = load_suffix_scores(path);
            issues.extend(outcome.issues);
            merge_suffix_scores(&mut suffix_scores, outcome.value);
        }

        let mut load_stems = |path: &Option<std::path::PathBuf>| match path {
            Some(path) => {
                let outcome = load_word_list(path);
                issues.extend(outcome.issues);
                outcome.value
            }
            None => HashSet::new(),
        };
        let verb_stems = load_stems(&paths.verb_stems);
        let adjective_stems = load_stems(&paths.adjective_stems);

        for issue in &issues {
            log::warn!("{issue}");
        }
        log::info!(
            "loaded resources: {} suffix scores, {} verb stems, {} adjective stems",
            suffix_scores.len(),
            verb_stems.len(),
            adjective_stems.len()
        );

        LoadOutcome {
            value: Self::new(
                suffix_scores,
                verb_stems,
                adjective_stems,
                particle_threshold,
            ),
            issues,
        }
    }

    /// Score of a right substring, if it is in the table
    #[inline]
    pub fn suffix_score(&self, suffix: &str) -> Option<f64> {
        self.suffix_scores.get(suffix).copied()
    }

    /// Whether a string is a known particle
    #[inline]
    pub fn is_particle(&self, s: &str) -> bool {
        self.particles.contains(s)
    }

    /// Whether a string is a scored suffix or particle, and so never a noun
    #[inline]
    pub fn is_grammatical(&self, s: &str) -> bool {
        self.suffix_scores.contains_key(s) || self.particles.contains(s)
    }

    /// Whether a string is a known verb stem
    #[inline]
    pub fn is_verb_stem(&self, s: &str) -> bool {
        self.verb_stems.contains(s)
    }

    /// Whether a string is a known adjective stem
    #[inline]
    pub fn is_adjective_stem(&self, s: &str) -> bool {
        self.adjective_stems.contains(s)
    }

    /// Whether a string is a verb or adjective stem
    #[inline]
    pub fn is_predicate_stem(&self, s: &str) -> bool {
        self.is_verb_stem(s) || self.is_adjective_stem(s)
    }

    /// Number of scored suffixes
    pub fn num_suffix_scores(&self) -> usize {
        self.suffix_scores.len()
    }

    /// Number of particles, including the built-in ones
    pub fn num_particles(&self) -> usize {
        self.particles.len()
    }
}
