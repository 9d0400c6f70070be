//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Redact env values in Cloud Run describe snapshots
/// (ROOT/*/run/*/describes/*.json).
#[derive(Debug, Parser)]
#[command(name = "snapredact")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Path to config file (overrides ./.snapredact.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands. Without one, snapshots are scanned.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for scanning snapshots.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ScanArgs {
    /// Root folder that contains snapshots [default: ops/snapshots]
    #[arg(long, env = "SNAPREDACT_ROOT")]
    pub root: Option<PathBuf>,

    /// Snapshot date folder (e.g. 2026-01-18); scans all snapshots if omitted
    #[arg(long)]
    pub snapshot: Option<String>,

    /// Do not modify files; only report
    #[arg(long)]
    pub dry_run: bool,

    /// Comma-separated extra env var names to redact (repeatable)
    #[arg(long, value_name = "NAMES")]
    pub explicit: Vec<String>,

    /// Maximum number of sample lines in the report [default: 200]
    #[arg(long, value_name = "N")]
    pub sample_limit: Option<usize>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
