//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, EnvVarsCommand, ExplainCommand, GetCommand, ShowCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect the configuration gitsign resolves from git config and the
/// environment.
#[derive(Parser)]
#[command(name = "gitsign-config")]
#[command(version, about = "Inspect the resolved gitsign configuration", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Run git in this repository instead of the current directory
    #[arg(long, value_name = "PATH", global = true, conflicts_with = "config_file")]
    pub repo: Option<PathBuf>,

    /// Read a `git config --get-regexp` dump instead of running git
    #[arg(long, value_name = "PATH", global = true)]
    pub config_file: Option<PathBuf>,

    /// Git executable to run
    #[arg(long, value_name = "PATH", global = true, env = "GITSIGN_CONFIG_GIT")]
    pub git: Option<PathBuf>,

    /// Ignore SIGSTORE_* and GITSIGN_* environment overrides
    #[arg(long, global = true)]
    pub no_env: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the resolved configuration
    Show(ShowCommand),

    /// Print a single configuration value
    Get(GetCommand),

    /// Print every value together with the layer that set it
    Explain(ExplainCommand),

    /// List the environment variables that override configuration
    EnvVars(EnvVarsCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
