//! Output formatting module

use anyhow::Result;
use eojeol_core::NounEntry;
use serde::{Deserialize, Serialize};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single noun with its entry
    fn format_noun(&mut self, noun: &str, entry: &NounEntry) -> Result<()>;

    /// Finalize output (e.g., close the JSON object)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated text with one noun per line
    Text,
    /// JSON object keyed by noun
    Json,
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
