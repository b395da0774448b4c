//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// marklint - Rule-based markdown linting.
#[derive(Debug, Parser)]
#[command(name = "marklint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides discovered .marklint.yml)
    #[arg(short, long, global = true, env = "MARKLINT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Lint markdown files
    Check(CheckArgs),

    /// Check built-in rules against their fixtures
    Fixtures(FixturesArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Files to lint
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format: human, json
    #[arg(long, default_value = "human")]
    pub format: String,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            format: "human".to_string(),
        }
    }
}

/// Arguments for the `fixtures` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FixturesArgs {
    /// Only check this rule
    #[arg(long)]
    pub rule: Option<String>,
}
