//! Output formatting for resolved configuration.
//!
//! This module renders a [`Config`] as human-readable text, JSON, YAML,
//! dotenv lines, or shell-specific export statements.

mod formatters;
mod shell;

use std::fmt;
use std::str::FromStr;

use crate::config::Config;
use crate::Result;

pub use formatters::{
    DotenvFormatter, ExportFormatter, HumanFormatter, JsonFormatter, YamlFormatter,
};
pub use shell::ShellType;

/// Trait for formatting a resolved configuration.
pub trait OutputFormatter {
    /// Format the given configuration into a string.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] if serialization fails.
    fn format(&self, config: &Config) -> Result<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable `key = value` lines.
    Human,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
    /// Dotenv (.env file) format.
    Env,
    /// Shell-specific export statements.
    Export(ShellType),
}

impl OutputFormat {
    /// Create a formatter for this output format.
    ///
    /// # Examples
    ///
    /// ```
    /// use gitsign_config::config::Config;
    /// use gitsign_config::output::OutputFormat;
    ///
    /// let out = OutputFormat::Env.create_formatter().format(&Config::default()).unwrap();
    /// assert!(out.contains("GITSIGN_REKOR_MODE=\"online\""));
    /// ```
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
            Self::Env => Box::new(DotenvFormatter),
            Self::Export(shell) => Box::new(ExportFormatter::new(*shell)),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    /// Parse a format name. `export` detects the shell; `export:<shell>`
    /// names it explicitly.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "env" | "dotenv" => Ok(Self::Env),
            "export" => Ok(Self::Export(ShellType::detect())),
            _ => match lower.strip_prefix("export:") {
                Some(shell) => shell.parse().map(Self::Export),
                None => Err(format!(
                    "unknown output format '{s}': expected human, json, yaml, env, export or export:<shell>"
                )),
            },
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
            Self::Env => write!(f, "env"),
            Self::Export(shell) => write!(f, "export:{shell}"),
        }
    }
}
