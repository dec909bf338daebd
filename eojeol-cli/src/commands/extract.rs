//! Extract command implementation

use super::CorpusArgs;
use crate::config::CliConfig;
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::Args;
use eojeol_core::resources::load_noun_list;
use eojeol_core::{ExtractParams, NounDictionary, NounEntry};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the extract command
#[derive(Debug, Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Nouns every extraction starts from (`noun[<TAB>score]`)
    #[arg(long, value_name = "FILE")]
    pub base_dictionary: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from the configuration, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Minimum left-substring frequency
    #[arg(long, value_name = "N")]
    pub min_count: Option<u64>,

    /// Predicted score a candidate must exceed
    #[arg(long, value_name = "SCORE", allow_negative_numbers = true)]
    pub min_noun_score: Option<f64>,

    /// Known-suffix share a candidate must exceed
    #[arg(long, value_name = "PROPORTION")]
    pub min_feature_proportion: Option<f64>,
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> Result<()> {
        let (extractor, config) = self.corpus.prepare()?;

        let extractor = match &self.base_dictionary {
            Some(path) => extractor.with_base_dictionary(self.load_base_dictionary(path)?),
            None => extractor,
        };

        let params = self.params(&config);
        log::info!("extracting with {params:?}");
        let nouns = extractor.extract(&params);
        log::info!("extracted {} nouns", nouns.len());

        let format = self.format.unwrap_or(config.output.default_format);
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            )),
            None => Box::new(io::stdout().lock()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
        };

        write_dictionary(&nouns, config.output.sort_by_score, formatter.as_mut())?;
        formatter.finish()
    }

    /// Extraction parameters: configuration values overridden by flags
    pub fn params(&self, config: &CliConfig) -> ExtractParams {
        let mut params = config.extraction.clone();
        if let Some(min_count) = self.min_count {
            params = params.with_min_count(min_count);
        }
        if let Some(score) = self.min_noun_score {
            params = params.with_minimum_noun_score(score);
        }
        if let Some(proportion) = self.min_feature_proportion {
            params = params.with_minimum_feature_proportion(proportion);
        }
        params
    }

    fn load_base_dictionary(&self, path: &Path) -> Result<NounDictionary> {
        let nouns = self.corpus.accept(load_noun_list(path))?;
        log::info!("loaded {} base nouns from {}", nouns.len(), path.display());
        Ok(nouns
            .into_iter()
            .map(|(noun, score)| (noun, NounEntry::Provisional(score)))
            .collect())
    }
}

/// Send every noun to `formatter`, by score or in key order
pub fn write_dictionary(
    nouns: &NounDictionary,
    sort_by_score: bool,
    formatter: &mut dyn OutputFormatter,
) -> Result<()> {
    if sort_by_score {
        for (noun, entry) in nouns.ranked() {
            formatter.format_noun(noun, entry)?;
        }
    } else {
        for (noun, entry) in nouns {
            formatter.format_noun(noun, entry)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        args: ExtractArgs,
    }

    fn parse(args: &[&str]) -> ExtractArgs {
        let mut argv = vec!["extract", "-i", "corpus.txt"];
        argv.extend_from_slice(args);
        Harness::try_parse_from(argv).unwrap().args
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = CliConfig::default();
        config.extraction.min_count = 10;
        config.extraction.minimum_feature_proportion = 0.3;

        let params = parse(&["--min-count", "2", "--min-noun-score", "-0.5"]).params(&config);
        assert_eq!(params.min_count, 2);
        assert_eq!(params.minimum_noun_score, -0.5);
        assert_eq!(params.minimum_feature_proportion, 0.3);
    }

    #[test]
    fn test_format_flag() {
        assert_eq!(parse(&["-f", "json"]).format, Some(OutputFormat::Json));
        assert_eq!(parse(&[]).format, None);
    }

    #[test]
    fn test_write_dictionary_order() {
        struct Collect(Vec<String>);
        impl OutputFormatter for Collect {
            fn format_noun(&mut self, noun: &str, _entry: &NounEntry) -> Result<()> {
                self.0.push(noun.to_string());
                Ok(())
            }
            fn finish(&mut self) -> Result<()> {
                Ok(())
            }
        }

        let mut nouns = NounDictionary::new();
        nouns.insert("가", NounEntry::Provisional(0.1));
        nouns.insert("나", NounEntry::Provisional(0.9));

        let mut by_score = Collect(Vec::new());
        write_dictionary(&nouns, true, &mut by_score).unwrap();
        assert_eq!(by_score.0, vec!["나", "가"]);

        let mut by_key = Collect(Vec::new());
        write_dictionary(&nouns, false, &mut by_key).unwrap();
        assert_eq!(by_key.0, vec!["가", "나"]);
    }
}
