//! Library exports for gitsign-config-cli.
//!
//! This module exports the CLI structure for use by integration tooling
//! such as man page and completion generation.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
