//! Command to list the environment variables that override configuration.

use crate::error::CliError;
use crate::utils::{print_output, GlobalOptions};
use clap::Args;
use gitsign_config::config::{Environment, EnvironmentConfig, ProcessEnvironment};

/// List consumed environment variables, lowest precedence first.
#[derive(Args)]
pub struct EnvVarsCommand {
    /// Only list variables that are currently set
    #[arg(long)]
    pub set: bool,
}

impl EnvVarsCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        print_output(&render(&ProcessEnvironment, self.set))
    }
}

/// One `VARIABLE  key` line per variable, with a `*` after variables that
/// are set in `env`.
fn render<E: Environment>(env: &E, set_only: bool) -> String {
    let variables = EnvironmentConfig::variables();
    let width = variables
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);

    variables
        .iter()
        .filter_map(|(name, field)| {
            let is_set = env.var(name).is_some();
            if set_only && !is_set {
                return None;
            }
            let marker = if is_set { " *" } else { "" };
            Some(format!("{name:<width$}  {}{marker}", field.git_key()))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
