//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use eojeol_core::NounEntry;
use std::io::{self, Write};

/// Plain text formatter - outputs `noun<TAB>score<TAB>count` per line
///
/// Provisional entries have no count; the column holds `-`.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_noun(&mut self, noun: &str, entry: &NounEntry) -> Result<()> {
        match entry {
            NounEntry::Scored(record) => {
                writeln!(self.writer, "{noun}\t{:.4}\t{}", record.score, record.count)?
            }
            NounEntry::Provisional(value) => writeln!(self.writer, "{noun}\t{value:.4}\t-")?,
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
