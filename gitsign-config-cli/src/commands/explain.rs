//! Command to show every configuration value with its origin.

use crate::error::CliError;
use crate::utils::{print_output, resolve, GlobalOptions};
use clap::Args;
use gitsign_config::{Field, Origin, Resolution};

/// Print every value together with the layer that set it.
#[derive(Args)]
pub struct ExplainCommand {
    /// Only list fields that were not left at their default
    #[arg(long)]
    pub changed: bool,
}

impl ExplainCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolution = resolve(global)?;
        print_output(&render(&resolution, self.changed))
    }
}

/// One `key = value  (origin)` line per field.
fn render(resolution: &Resolution, changed_only: bool) -> String {
    let width = Field::ALL
        .iter()
        .map(|f| f.git_key().len())
        .max()
        .unwrap_or(0);

    Field::ALL
        .iter()
        .filter(|&&field| !changed_only || *resolution.origin(field) != Origin::Default)
        .map(|&field| {
            format!(
                "{:<width$} = {}  ({})",
                field.git_key(),
                resolution.config.get(field),
                resolution.origin(field)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use gitsign_config::config::{ConfigResolver, MapEnvironment, StaticSource};

    fn resolution() -> Resolution {
        ConfigResolver::new()
            .with_source(StaticSource::new("gitsign.rekorMode offline\n"))
            .with_environment(MapEnvironment::new().with("GITSIGN_LOG", "/tmp/gitsign.log"))
            .resolve_with_origins()
            .unwrap()
    }

    #[test]
    fn test_render_all_fields() {
        let out = render(&resolution(), false);
        assert_eq!(out.lines().count(), Field::ALL.len());
        assert!(out.contains("offline  (git config gitsign.rekorMode)"));
        assert!(out.contains("/tmp/gitsign.log  (env GITSIGN_LOG)"));
        assert!(out.contains("https://fulcio.sigstore.dev  (default)"));
    }

    #[test]
    fn test_render_changed_only() {
        let out = render(&resolution(), true);
        assert_eq!(out.lines().count(), 2);
        assert!(!out.contains("(default)"));
    }
}
