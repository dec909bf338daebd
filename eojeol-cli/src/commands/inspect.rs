//! Inspect command implementation

use super::CorpusArgs;
use anyhow::Result;
use clap::Args;
use eojeol_core::{NounExtractor, NounScore};
use std::io::{self, Write};

/// Arguments for the inspect command
#[derive(Debug, Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Words to inspect
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Print the records as JSON
    #[arg(long)]
    pub json: bool,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> Result<()> {
        let (extractor, _) = self.corpus.prepare()?;
        let mut out = io::stdout().lock();
        self.report(&extractor, &mut out)
    }

    /// Write the record of every requested word
    pub fn report(&self, extractor: &NounExtractor, out: &mut impl Write) -> Result<()> {
        let records: Vec<(&str, NounScore)> = self
            .words
            .iter()
            .map(|word| (word.as_str(), extractor.predict(word)))
            .collect();

        if self.json {
            let mut map = serde_json::Map::new();
            for (word, record) in &records {
                map.insert(word.to_string(), serde_json::to_value(record)?);
            }
            serde_json::to_writer_pretty(&mut *out, &map)?;
            writeln!(out)?;
            return Ok(());
        }

        for (word, record) in records {
            writeln!(out, "{word}")?;
            writeln!(out, "  score: {:.4}", record.score)?;
            writeln!(out, "  count: {}", record.count)?;
            writeln!(out, "  feature proportion: {:.4}", record.feature_proportion)?;
            writeln!(out, "  eojeol proportion: {:.4}", record.eojeol_proportion)?;
            writeln!(
                out,
                "  positive features: {} ({:.4})",
                record.positive_features, record.positive_feature_ratio
            )?;
            writeln!(out, "  left substring: {}", extractor.graph().contains_left(word))?;
        }
        Ok(())
    }
}
