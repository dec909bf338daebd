//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the thresholds and extraction parameters");
        println!("2. Validate your configuration:");
        println!("   eojeol validate -c {}", self.output.display());
        println!("3. Use it for extraction:");
        println!(
            "   eojeol extract -i corpus.txt -p suffix-scores.tsv -c {}",
            self.output.display()
        );

        Ok(())
    }

    /// Every default value, preceded by a short header
    fn generate_template(&self) -> Result<String> {
        let body = toml::to_string_pretty(&CliConfig::default())
            .context("Failed to serialize the default configuration")?;
        Ok(format!(
            "# Noun extraction configuration\n\
             #\n\
             # [extractor] sizes the substring graph and holds the filter thresholds.\n\
             # [extraction] holds the per-run candidate cutoffs.\n\n\
             {body}"
        ))
    }
}
