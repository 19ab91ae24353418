//! Output formatter implementations.

use crate::config::{Config, EnvironmentConfig, Field};
use crate::Result;

use super::{OutputFormatter, ShellType};

/// `(variable, value)` pairs for every field that has a `GITSIGN_*`
/// variable, in display order.
fn env_pairs(config: &Config) -> Vec<(String, String)> {
    Field::ALL
        .iter()
        .filter_map(|&field| {
            EnvironmentConfig::tool_variable(field).map(|var| (var, config.get(field)))
        })
        .collect()
}

/// Quote a value for a dotenv file.
fn dotenv_quote(value: &str) -> String {
    let escaped = value
        .replace('\\', r"\\")
        .replace('"', "\\\"")
        .replace('\n', r"\n");
    format!("\"{escaped}\"")
}

/// Formatter for shell-specific export statements.
pub struct ExportFormatter {
    shell: ShellType,
}

impl ExportFormatter {
    /// Create a new export formatter for `shell`.
    #[must_use]
    pub fn new(shell: ShellType) -> Self {
        Self { shell }
    }
}

impl OutputFormatter for ExportFormatter {
    fn format(&self, config: &Config) -> Result<String> {
        Ok(env_pairs(config)
            .iter()
            .map(|(var, value)| self.shell.format_export(var, value))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, config: &Config) -> Result<String> {
        Ok(serde_json::to_string_pretty(config)?)
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, config: &Config) -> Result<String> {
        let yaml = serde_yaml::to_string(config)?;
        Ok(yaml.trim_end().to_string())
    }
}

/// Formatter for dotenv (.env file) format.
pub struct DotenvFormatter;

impl OutputFormatter for DotenvFormatter {
    fn format(&self, config: &Config) -> Result<String> {
        Ok(env_pairs(config)
            .iter()
            .map(|(var, value)| format!("{var}={}", dotenv_quote(value)))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Formatter for human-readable output.
///
/// One `key = value` line per field, keyed by git config name.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, config: &Config) -> Result<String> {
        let width = Field::ALL
            .iter()
            .map(|f| f.git_key().len())
            .max()
            .unwrap_or(0);

        Ok(Field::ALL
            .iter()
            .map(|&field| {
                let value = config.get(field);
                format!("{:<width$} = {}", field.git_key(), value)
                    .trim_end()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
