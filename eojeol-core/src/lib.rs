//! Unsupervised noun extraction for unsegmented Korean text
//!
//! Korean text is written in eojeols: whitespace-delimited units that fuse a
//! stem with particles or verb endings ("학교에서" = "학교" + "에서"). This
//! crate discovers noun-like substrings in such a corpus without a
//! morphological analyzer.
//!
//! # Architecture
//!
//! - **Resources**: suffix scores, the particle set and predicate stems
//! - **Graph**: every token is split into (left, right) substrings and the
//!   co-occurrence counts are kept in both directions
//! - **Predictor**: scores a left substring by how well its right-hand
//!   neighbours look like particles
//! - **Filters**: structural rules separating real nouns from noun+particle
//!   or noun+ending fragments and from compounds
//! - **Extractor**: drives training, scoring and the filter cascade
//!
//! # Example
//!
//! ```rust
//! use eojeol_core::{ExtractParams, ExtractorConfig, NounExtractor, ResourceStore};
//! use std::collections::{HashMap, HashSet};
//!
//! let scores: HashMap<String, f64> = [("에서", 0.9), ("는", 0.9), ("를", 0.9), ("가", 0.8)]
//!     .into_iter()
//!     .map(|(r, s)| (r.to_string(), s))
//!     .collect();
//! let resources = ResourceStore::new(scores, HashSet::new(), HashSet::new(), 0.1);
//!
//! let mut extractor = NounExtractor::new(ExtractorConfig::default(), resources).unwrap();
//! let corpus = ["학교에서 학교는 학교를 학교가"; 3];
//! let nouns = extractor.train_extract(corpus, None, &ExtractParams::default());
//!
//! assert!(nouns.contains("학교"));
//! ```

pub mod config;
pub mod dictionary;
pub mod error;
pub mod extractor;
pub mod filters;
pub mod graph;
pub mod hangul;
pub mod predictor;
pub mod resources;
mod seed;
mod tables;
pub mod text;

// Re-export key types
pub use config::{ConfigBuilder, ExtractParams, ExtractorConfig, Thresholds};
pub use dictionary::{NounDictionary, NounEntry};
pub use error::{ConfigError, ResourceError, Result};
pub use extractor::NounExtractor;
pub use filters::FilterContext;
pub use graph::CooccurrenceGraph;
pub use predictor::{NounPredictor, NounScore};
pub use resources::{LoadOutcome, ResourcePaths, ResourceStore};
