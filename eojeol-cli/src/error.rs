//! Failures of the command-line front end
//!
//! Library errors are wrapped as they are; the corpus lookup adds its own
//! two cases.

use eojeol_core::{ConfigError, ResourceError};
use thiserror::Error;

/// Errors raised by the CLI before or around extraction
#[derive(Error, Debug)]
pub enum CliError {
    /// No corpus file matched any input pattern
    #[error("No corpus file matches: {patterns}")]
    NoCorpusFiles {
        /// The input patterns, comma separated
        patterns: String,
    },

    /// An input pattern is not valid glob syntax
    #[error("Invalid corpus pattern {pattern}: {source}")]
    InvalidPattern {
        /// The rejected pattern
        pattern: String,
        /// Parser diagnostic
        #[source]
        source: glob::PatternError,
    },

    /// The configuration file or extractor settings were rejected
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A resource problem met in strict mode
    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
