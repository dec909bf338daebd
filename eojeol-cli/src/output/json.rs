//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use eojeol_core::NounEntry;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs an array of nouns with their records
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    nouns: Vec<NounData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct NounData {
    /// The noun
    pub noun: String,
    /// Predictor record, or the raw provisional score
    #[serde(flatten)]
    pub entry: EntryData,
}

/// Entry shape in JSON output
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum EntryData {
    /// Full record
    Scored(eojeol_core::NounScore),
    /// Raw value only
    Provisional {
        /// Raw value supplied or seeded for the noun
        score: f64,
    },
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            nouns: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_noun(&mut self, noun: &str, entry: &NounEntry) -> Result<()> {
        let entry = match entry {
            NounEntry::Scored(record) => EntryData::Scored(*record),
            NounEntry::Provisional(score) => EntryData::Provisional { score: *score },
        };
        self.nouns.push(NounData {
            noun: noun.to_string(),
            entry,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.nouns)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.nouns)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
