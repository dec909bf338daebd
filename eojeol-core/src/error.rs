//! Layered error types
//!
//! Configuration problems are fatal and surface through [`ConfigError`].
//! Resource problems never abort a run: loaders collect them as
//! [`ResourceError`] values next to whatever data could be read.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A field holds a value outside its valid range
    #[error("invalid configuration: {field} {reason}")]
    Invalid {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// The TOML document could not be parsed
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration file could not be read
    #[error("failed to read configuration file {path}: {source}")]
    Io {
        /// The configuration file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Recoverable problems met while loading resource files
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The resource could not be opened or read
    #[error("failed to read resource {path}: {source}")]
    Io {
        /// The resource file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A line did not match the expected format and was skipped
    #[error("malformed line {line} in {source_name}: {reason} ({content:?})")]
    MalformedLine {
        /// File name or other label of the resource
        source_name: String,
        /// 1-based line number
        line: usize,
        /// The offending line
        content: String,
        /// What was wrong with it
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
