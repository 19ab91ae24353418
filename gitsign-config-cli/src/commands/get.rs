//! Command to print a single configuration value.

use crate::error::CliError;
use crate::utils::{print_output, resolve, GlobalOptions};
use clap::Args;
use gitsign_config::config::classify_key;
use gitsign_config::Field;

/// Print a single configuration value, addressed by its git config key.
#[derive(Args)]
pub struct GetCommand {
    /// Git config key, e.g. gitsign.rekorMode or user.email (case-insensitive)
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Exit with status 1 when the resolved value is empty
    #[arg(long)]
    pub non_empty: bool,
}

impl GetCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let field = classify_key(&self.key).ok_or_else(|| {
            let known: Vec<_> = Field::ALL.iter().map(|f| f.git_key()).collect();
            CliError::InvalidArguments(format!(
                "unknown key '{}': expected one of {}",
                self.key,
                known.join(", ")
            ))
        })?;

        let resolution = resolve(global)?;
        let value = resolution.config.get(field);
        log::debug!("{field} set by {}", resolution.origin(field));

        if self.non_empty && value.is_empty() {
            return Err(CliError::SemanticFailure(format!("{} is not set", field.git_key())));
        }

        print_output(&value)
    }
}
