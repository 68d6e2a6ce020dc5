//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Quarry - IDE feature catalog harvester.
#[derive(Debug, Parser)]
#[command(name = "quarry")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Harvest a universe snapshot into the versioned catalog store
    Harvest(HarvestArgs),

    /// Show recorded statistics per version
    Stats(StatsArgs),

    /// Build the tag-indexed feature view
    Tags(TagsArgs),
}

/// Arguments for the `harvest` command.
#[derive(Debug, Clone, clap::Args)]
pub struct HarvestArgs {
    /// Path to the universe snapshot file
    #[arg(short, long)]
    pub universe: PathBuf,

    /// Path to the catalog store file
    #[arg(short, long)]
    pub store: PathBuf,

    /// Product version to record newly seen features under
    #[arg(short, long)]
    pub release: String,

    /// Path to quarry.yml (default: next to the snapshot)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Harvest internal-only severity configurations too
    #[arg(long)]
    pub include_internal: bool,

    /// Also write the tag index to this file
    #[arg(long, value_name = "FILE")]
    pub tags_out: Option<PathBuf>,
}

/// Arguments for the `stats` command.
#[derive(Debug, Clone, clap::Args)]
pub struct StatsArgs {
    /// Path to the catalog store file
    #[arg(short, long)]
    pub store: PathBuf,

    /// Show one version only (default: all versions, newest first)
    #[arg(short, long)]
    pub release: Option<String>,
}

/// Arguments for the `tags` command.
#[derive(Debug, Clone, clap::Args)]
pub struct TagsArgs {
    /// Path to the universe snapshot file
    #[arg(short, long)]
    pub universe: PathBuf,

    /// Output file for the tag index
    #[arg(short, long)]
    pub out: PathBuf,

    /// Path to quarry.yml (default: next to the snapshot)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Language to exclude from the index (default from config)
    #[arg(long, value_name = "LANG")]
    pub exclude_lang: Option<String>,

    /// Product label stamped on every entry (default from snapshot/config)
    #[arg(long, value_name = "NAME")]
    pub product: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn harvest_args_parse() {
        let cli = Cli::parse_from([
            "quarry", "harvest", "-u", "u.json", "-s", "c.json", "-r", "2024.2",
        ]);
        match cli.command {
            Commands::Harvest(args) => {
                assert_eq!(args.release, "2024.2");
                assert!(!args.include_internal);
                assert!(args.tags_out.is_none());
            }
            _ => panic!("expected harvest"),
        }
    }

    #[test]
    fn stats_args_parse_with_optional_release() {
        let cli = Cli::parse_from(["quarry", "stats", "-s", "c.json"]);
        match cli.command {
            Commands::Stats(args) => assert!(args.release.is_none()),
            _ => panic!("expected stats"),
        }
    }
}
