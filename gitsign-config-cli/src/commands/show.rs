//! Show command implementation.
//!
//! This module implements the `show` command, which prints the resolved
//! configuration in one of several formats.

use crate::error::CliError;
use crate::utils::{print_output, resolve, GlobalOptions};
use clap::{Args, ValueEnum};
use gitsign_config::output::{OutputFormat, ShellType};

/// Print the resolved configuration.
#[derive(Args)]
pub struct ShowCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "human", ignore_case = true)]
    pub format: ShowFormat,

    /// Shell syntax for `--format export` (detected when omitted)
    #[arg(long, value_name = "SHELL")]
    pub shell: Option<ShellType>,
}

/// Output format for the show command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ShowFormat {
    /// Aligned `key = value` lines
    Human,
    /// JSON object
    Json,
    /// YAML mapping
    Yaml,
    /// Dotenv `GITSIGN_*="value"` lines
    Env,
    /// Shell export statements
    Export,
}

impl ShowCommand {
    /// Map the command-line selection onto a library output format.
    fn output_format(&self) -> Result<OutputFormat, CliError> {
        match (self.format, self.shell) {
            (ShowFormat::Export, shell) => Ok(OutputFormat::Export(
                shell.unwrap_or_else(ShellType::detect),
            )),
            (_, Some(_)) => Err(CliError::InvalidArguments(
                "--shell is only valid with --format export".to_string(),
            )),
            (ShowFormat::Human, None) => Ok(OutputFormat::Human),
            (ShowFormat::Json, None) => Ok(OutputFormat::Json),
            (ShowFormat::Yaml, None) => Ok(OutputFormat::Yaml),
            (ShowFormat::Env, None) => Ok(OutputFormat::Env),
        }
    }

    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let format = self.output_format()?;
        let resolution = resolve(global)?;

        log::debug!("rendering configuration as {format}");
        let text = format.create_formatter().format(&resolution.config)?;
        print_output(&text)
    }
}
