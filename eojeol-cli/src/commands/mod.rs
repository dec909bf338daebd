//! CLI command implementations

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::{Args, Subcommand};
use eojeol_core::{LoadOutcome, NounExtractor, ResourcePaths, ResourceStore};
use std::path::PathBuf;

pub mod extract;
pub mod generate_config;
pub mod inspect;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract nouns from a corpus
    Extract(extract::ExtractArgs),

    /// Print the predictor record of specific words
    Inspect(inspect::InspectArgs),

    /// Write a configuration file with every default value
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Extract(args) => args.execute(),
            Commands::Inspect(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// Corpus, resource and logging arguments shared by the training commands
#[derive(Debug, Clone, Args)]
pub struct CorpusArgs {
    /// Corpus files or patterns (supports glob), one sentence per line
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Suffix score tables (`suffix<TAB>score`), merged by maximum
    #[arg(short, long, value_name = "FILE")]
    pub predictor: Vec<PathBuf>,

    /// Verb stem list
    #[arg(long, value_name = "FILE")]
    pub verbs: Option<PathBuf>,

    /// Adjective stem list
    #[arg(long, value_name = "FILE")]
    pub adjectives: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "EOJEOL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Fail on the first resource problem instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CorpusArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger installed earlier in the process wins
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }

    /// Resource file locations
    pub fn resource_paths(&self) -> ResourcePaths {
        ResourcePaths {
            suffix_scores: self.predictor.clone(),
            verb_stems: self.verbs.clone(),
            adjective_stems: self.adjectives.clone(),
        }
    }

    /// Load the configuration, build the extractor and train it on the corpus
    pub fn prepare(&self) -> Result<(NounExtractor, CliConfig)> {
        self.init_logging();
        let config = CliConfig::load(self.config.as_deref())?;
        log::debug!("configuration: {config:?}");

        let resources = ResourceStore::load(
            &self.resource_paths(),
            config.extractor.thresholds.particle_score,
        );
        let resources = self.accept(resources)?;
        if resources.num_suffix_scores() == 0 {
            log::warn!("no suffix scores loaded; every candidate scores 0");
        }

        let mut extractor = NounExtractor::new(config.extractor.clone(), resources)
            .map_err(CliError::Config)?;

        let files = resolve_patterns(&self.input)?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut sentences = Vec::new();
        for file in &files {
            let lines = FileReader::read_sentences(file)?;
            progress.file_completed(&file.display().to_string(), lines.len());
            sentences.extend(lines);
        }
        log::info!("read {} sentences from {} files", sentences.len(), files.len());

        progress.start_phase("building substring graph");
        extractor.train(&sentences);
        progress.finish();

        Ok((extractor, config))
    }

    /// Unwrap a load outcome, failing on issues in strict mode
    pub fn accept<T>(&self, outcome: LoadOutcome<T>) -> Result<T> {
        if self.strict {
            return outcome
                .into_strict()
                .map_err(|e| CliError::Resource(e).into());
        }
        Ok(outcome.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus_args(strict: bool) -> CorpusArgs {
        CorpusArgs {
            input: vec!["corpus.txt".to_string()],
            predictor: vec![PathBuf::from("scores.tsv")],
            verbs: None,
            adjectives: Some(PathBuf::from("adjectives.txt")),
            config: None,
            strict,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_resource_paths() {
        let paths = corpus_args(false).resource_paths();
        assert_eq!(paths.suffix_scores, vec![PathBuf::from("scores.tsv")]);
        assert!(paths.verb_stems.is_none());
        assert_eq!(paths.adjective_stems, Some(PathBuf::from("adjectives.txt")));
    }

    #[test]
    fn test_accept_degrades_unless_strict() {
        let missing = || eojeol_core::resources::load_word_list("/nonexistent/verbs.txt");

        assert!(corpus_args(false).accept(missing()).unwrap().is_empty());

        let message = corpus_args(true).accept(missing()).unwrap_err().to_string();
        assert!(message.starts_with("Resource error:"));
    }
}
