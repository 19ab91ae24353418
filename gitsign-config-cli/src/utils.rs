//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across commands: building the
//! resolver from global options and writing output.

use crate::error::CliError;
use gitsign_config::config::{ConfigResolver, ConfigSource, FileSource, GitConfigSource};
use gitsign_config::Resolution;
use std::io::{self, Write};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Repository to run git in.
    pub repo: Option<PathBuf>,

    /// Config dump to read instead of running git.
    pub config_file: Option<PathBuf>,

    /// Git executable.
    pub git: Option<PathBuf>,

    /// Skip environment overrides.
    pub no_env: bool,
}

/// Build the configuration source selected by the global options.
///
/// `--config-file` takes precedence; otherwise git is run, optionally in
/// `--repo` and with `--git` as the executable.
pub fn build_source(global: &GlobalOptions) -> Result<Box<dyn ConfigSource>, CliError> {
    if let Some(path) = &global.config_file {
        log::debug!("reading config dump from {}", path.display());
        return Ok(Box::new(FileSource::new(path)));
    }

    let mut source = GitConfigSource::new();
    if let Some(git) = &global.git {
        source = source.with_program(git);
    }
    if let Some(repo) = &global.repo {
        if !repo.is_dir() {
            return Err(CliError::InvalidArguments(format!(
                "repository directory not found: {}",
                repo.display()
            )));
        }
        source = source.with_working_dir(repo);
    }
    Ok(Box::new(source))
}

/// Resolve the configuration, with origins, for the global options.
pub fn resolve(global: &GlobalOptions) -> Result<Resolution, CliError> {
    let mut resolver = ConfigResolver::new().with_source(build_source(global)?);
    if global.no_env {
        resolver = resolver.skip_env();
    }
    resolver.resolve_with_origins().map_err(CliError::from)
}

/// Write `text` and a trailing newline to stdout.
pub fn print_output(text: &str) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}")?;
    stdout.flush()?;
    Ok(())
}
