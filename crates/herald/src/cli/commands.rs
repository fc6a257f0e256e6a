//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Herald - generate lottery-analysis articles and announce them on X
#[derive(Parser, Debug)]
#[command(name = "herald")]
#[command(about = "Generate lottery-analysis articles and announce them on X", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file layered over the defaults
    #[arg(long, global = true, env = "HERALD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Topic catalogue replacing the bundled one
    #[arg(long, global = true)]
    pub topics: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Generate and save the next article
    Generate {
        /// Show the selected topic and slug without calling the service
        #[arg(long)]
        dry_run: bool,
    },

    /// Post the newest unpublished article to X
    Publish {
        /// Print the composed post without signing or sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// List articles and their publication state
    Status,

    /// Check the draw dataset for integrity problems
    CheckData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_subcommands_and_global_flags() {
        let cli = Cli::try_parse_from(["herald", "publish", "--dry-run", "-v"]).unwrap();
        assert_eq!(cli.command, Commands::Publish { dry_run: true });
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["herald", "--topics", "t.toml", "check-data"]).unwrap();
        assert_eq!(cli.command, Commands::CheckData);
        assert_eq!(cli.topics, Some(PathBuf::from("t.toml")));
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["herald", "tweet"]).is_err());
    }
}
