//! eojeol command-line entry point

use anyhow::Result;
use clap::Parser;
use eojeol_cli::commands::Commands;

/// Unsupervised noun extraction for Korean eojeol corpora
#[derive(Debug, Parser)]
#[command(name = "eojeol", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_extract() {
        let cli = Cli::try_parse_from(["eojeol", "extract", "-i", "corpus.txt"]).unwrap();
        assert!(matches!(cli.command, Commands::Extract(_)));
    }
}
