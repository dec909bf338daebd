//! Extractor configuration
//!
//! All numeric thresholds used by the predictor, the seed pass and the
//! filter bank live in [`Thresholds`]. They are validated once when an
//! extractor is constructed and then passed by reference everywhere.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration constants
pub mod defaults {
    /// Maximum length of a left substring, in characters
    pub const L_MAX_LENGTH: usize = 10;

    /// Maximum length of a right substring, in characters
    pub const R_MAX_LENGTH: usize = 7;

    /// Minimum left-substring frequency for candidacy
    pub const MIN_COUNT: u64 = 3;

    /// Minimum predicted score for a strong candidate
    pub const MINIMUM_NOUN_SCORE: f64 = 0.4;

    /// Minimum share of known suffixes for a strong candidate
    pub const MINIMUM_FEATURE_PROPORTION: f64 = 0.6;
}

/// Numeric thresholds of the seed pass and filter bank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Suffixes scoring above this join the particle set
    pub particle_score: f64,
    /// Standalone share required for the eojeol-level passes
    pub minimum_eojeol_proportion: f64,
    /// Predicted score a prefix needs before a verb/adjective stem
    pub seed_noun_score: f64,
    /// Score making a prefix a plausible noun in the particle-contraction test
    pub njsubj_noun_score: f64,
    /// Share of particle-ending extensions marking a particle contraction
    pub njsubj_proportion: f64,
    /// Frequency ratio above which a word is not a contraction of its prefix
    pub njsubj_frequency_droprate: f64,
    /// Predicted score a truncated prefix needs to be flagged
    pub nsubj_noun_score: f64,
    /// Frequency ratio of a truncated prefix against the full word
    pub nsubj_proportion: f64,
    /// Standalone share of `ending + extension` marking a verb-ending contraction
    pub nvsube_eojeol_proportion: f64,
    /// Frequency ratio below which a word is a rare extension of its prefix
    pub nwsub_frequency_droprate: f64,
    /// Candidates at or below this count get the unique-particle check
    pub unijosa_max_count: u64,
    /// Candidates with at most this many positive features get the check
    pub unijosa_max_positive_features: usize,
    /// Share of recognised extensions needed to pass the check
    pub unijosa_pass_proportion: f64,
    /// Frequency retention against the one-shorter prefix for particle endings
    pub suffix_frequency_droprate: f64,
    /// Share of specific particles marking a trailing particle fragment
    pub suffix_particle_proportion: f64,
    /// Share of 'ㅎ'-initial extensions marking a verbalized stem
    pub dang_hada_h_proportion: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            particle_score: 0.1,
            minimum_eojeol_proportion: 0.99,
            seed_noun_score: 0.4,
            njsubj_noun_score: 0.4,
            njsubj_proportion: 0.8,
            njsubj_frequency_droprate: 0.7,
            nsubj_noun_score: 0.7,
            nsubj_proportion: 0.7,
            nvsube_eojeol_proportion: 0.7,
            nwsub_frequency_droprate: 0.1,
            unijosa_max_count: 10,
            unijosa_max_positive_features: 1,
            unijosa_pass_proportion: 0.5,
            suffix_frequency_droprate: 0.8,
            suffix_particle_proportion: 0.5,
            dang_hada_h_proportion: 0.5,
        }
    }
}

impl Thresholds {
    /// Validate every threshold
    pub fn validate(&self) -> Result<()> {
        let scores = [
            ("particle_score", self.particle_score),
            ("seed_noun_score", self.seed_noun_score),
            ("njsubj_noun_score", self.njsubj_noun_score),
            ("nsubj_noun_score", self.nsubj_noun_score),
        ];
        for (field, value) in scores {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, "must be a finite number"));
            }
        }

        let proportions = [
            ("minimum_eojeol_proportion", self.minimum_eojeol_proportion),
            ("njsubj_proportion", self.njsubj_proportion),
            ("nsubj_proportion", self.nsubj_proportion),
            ("nvsube_eojeol_proportion", self.nvsube_eojeol_proportion),
            ("unijosa_pass_proportion", self.unijosa_pass_proportion),
            ("suffix_particle_proportion", self.suffix_particle_proportion),
            ("dang_hada_h_proportion", self.dang_hada_h_proportion),
        ];
        for (field, value) in proportions {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be within [0, 1], got {value}"),
                ));
            }
        }

        // Frequency ratios may exceed 1 but never go negative
        let ratios = [
            ("njsubj_frequency_droprate", self.njsubj_frequency_droprate),
            ("nwsub_frequency_droprate", self.nwsub_frequency_droprate),
            ("suffix_frequency_droprate", self.suffix_frequency_droprate),
        ];
        for (field, value) in ratios {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be a non-negative number, got {value}"),
                ));
            }
        }

        Ok(())
    }
}

/// Construction-time configuration of a [`crate::NounExtractor`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Maximum left-substring length in characters
    pub l_max_length: usize,
    /// Maximum right-substring length in characters
    pub r_max_length: usize,
    /// Filter and seed thresholds
    pub thresholds: Thresholds,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            l_max_length: defaults::L_MAX_LENGTH,
            r_max_length: defaults::R_MAX_LENGTH,
            thresholds: Thresholds::default(),
        }
    }
}

impl ExtractorConfig {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse a TOML document; missing fields keep their defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: ExtractorConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.l_max_length == 0 {
            return Err(ConfigError::invalid(
                "l_max_length",
                "must be greater than 0",
            ));
        }
        if self.r_max_length == 0 {
            return Err(ConfigError::invalid(
                "r_max_length",
                "must be greater than 0",
            ));
        }
        self.thresholds.validate()
    }

    /// Longest token kept in the graph
    pub fn eojeol_max_length(&self) -> usize {
        self.l_max_length + self.r_max_length
    }
}

/// Fluent builder for [`ExtractorConfig`]
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    l_max_length: Option<usize>,
    r_max_length: Option<usize>,
    thresholds: Option<Thresholds>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum left-substring length
    pub fn l_max_length(mut self, length: usize) -> Self {
        self.l_max_length = Some(length);
        self
    }

    /// Set the maximum right-substring length
    pub fn r_max_length(mut self, length: usize) -> Self {
        self.r_max_length = Some(length);
        self
    }

    /// Replace all thresholds
    pub fn thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = Some(thresholds);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ExtractorConfig> {
        let mut config = ExtractorConfig::default();

        if let Some(length) = self.l_max_length {
            config.l_max_length = length;
        }
        if let Some(length) = self.r_max_length {
            config.r_max_length = length;
        }
        if let Some(thresholds) = self.thresholds {
            config.thresholds = thresholds;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Parameters of a single extraction call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractParams {
    /// Minimum left-substring frequency
    pub min_count: u64,
    /// Predicted score a candidate must exceed
    pub minimum_noun_score: f64,
    /// Known-suffix share a candidate must exceed
    pub minimum_feature_proportion: f64,
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self {
            min_count: defaults::MIN_COUNT,
            minimum_noun_score: defaults::MINIMUM_NOUN_SCORE,
            minimum_feature_proportion: defaults::MINIMUM_FEATURE_PROPORTION,
        }
    }
}

impl ExtractParams {
    /// Set the minimum frequency
    pub fn with_min_count(mut self, min_count: u64) -> Self {
        self.min_count = min_count;
        self
    }

    /// Set the minimum noun score
    pub fn with_minimum_noun_score(mut self, score: f64) -> Self {
        self.minimum_noun_score = score;
        self
    }

    /// Set the minimum feature proportion
    pub fn with_minimum_feature_proportion(mut self, proportion: f64) -> Self {
        self.minimum_feature_proportion = proportion;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExtractorConfig::default();
        assert_eq!(config.l_max_length, 10);
        assert_eq!(config.r_max_length, 7);
        assert_eq!(config.eojeol_max_length(), 17);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ExtractorConfig::builder()
            .l_max_length(6)
            .r_max_length(4)
            .build()
            .unwrap();
        assert_eq!(config.l_max_length, 6);
        assert_eq!(config.r_max_length, 4);
        assert_eq!(config.thresholds, Thresholds::default());
    }

    #[test]
    fn test_builder_rejects_zero_length() {
        let err = ExtractorConfig::builder().l_max_length(0).build().unwrap_err();
        assert!(err.to_string().contains("l_max_length"));
    }

    #[test]
    fn test_thresholds_reject_out_of_range_proportion() {
        let thresholds = Thresholds {
            njsubj_proportion: 1.5,
            ..Thresholds::default()
        };
        let err = thresholds.validate().unwrap_err();
        assert!(err.to_string().contains("njsubj_proportion"));
    }

    #[test]
    fn test_thresholds_reject_nan_score() {
        let thresholds = Thresholds {
            seed_noun_score: f64::NAN,
            ..Thresholds::default()
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn test_from_toml_partial_override() {
        let config = ExtractorConfig::from_toml_str(
            r#"
l_max_length = 8

[thresholds]
nsubj_noun_score = 0.75
"#,
        )
        .unwrap();
        assert_eq!(config.l_max_length, 8);
        assert_eq!(config.r_max_length, 7);
        assert_eq!(config.thresholds.nsubj_noun_score, 0.75);
        assert_eq!(config.thresholds.particle_score, 0.1);
    }

    #[test]
    fn test_from_toml_invalid_value() {
        let result = ExtractorConfig::from_toml_str("r_max_length = 0");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_from_toml_parse_error() {
        let result = ExtractorConfig::from_toml_str("l_max_length = \"ten\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_missing_file() {
        let result = ExtractorConfig::from_toml_file("/nonexistent/eojeol.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_extract_params_chain() {
        let params = ExtractParams::default()
            .with_min_count(1)
            .with_minimum_noun_score(0.5)
            .with_minimum_feature_proportion(0.3);
        assert_eq!(params.min_count, 1);
        assert_eq!(params.minimum_noun_score, 0.5);
        assert_eq!(params.minimum_feature_proportion, 0.3);
    }
}
