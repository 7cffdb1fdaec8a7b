//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// cairn - preflight checks and launcher for the local dev server.
#[derive(Debug, Parser)]
#[command(name = "cairn")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check prerequisites, install dependencies, start the dev server
    /// (default if no command specified)
    Up(UpArgs),

    /// Report prerequisite status without installing or launching anything
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `up` command.
#[derive(Debug, Clone, clap::Args)]
pub struct UpArgs {
    /// Dev task to run (as declared in package.json scripts)
    #[arg(short, long, default_value = "dev")]
    pub task: String,

    /// Package manager to use (npm, yarn, pnpm, bun); detected from
    /// lockfiles when omitted
    #[arg(long, value_name = "PM")]
    pub package_manager: Option<String>,
}

impl Default for UpArgs {
    fn default() -> Self {
        Self {
            task: "dev".to_string(),
            package_manager: None,
        }
    }
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
