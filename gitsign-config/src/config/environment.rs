//! Environment variable overrides for configuration.
//!
//! Variables are applied in a fixed order, later ones overriding earlier
//! ones:
//!
//! 1. `SIGSTORE_ROOT_FILE` (legacy cosign name, Fulcio root only)
//! 2. `SIGSTORE_*` variables shared with other Sigstore tools
//! 3. `GITSIGN_*` equivalents of the shared variables
//! 4. `GITSIGN_LOG` and `GITSIGN_REKOR_MODE`
//!
//! A variable overrides only when it is set. A variable set to the empty
//! string clears the field; an unset variable leaves it alone.

use crate::config::schema::{Config, Field};
use std::collections::HashMap;
use std::env;
use std::sync::LazyLock;

/// Legacy variable naming the Fulcio root certificate.
pub const LEGACY_ROOT_VAR: &str = "SIGSTORE_ROOT_FILE";

/// Prefix shared with other Sigstore tools.
pub const SHARED_PREFIX: &str = "SIGSTORE";

/// Prefix specific to gitsign. Applied after [`SHARED_PREFIX`].
pub const TOOL_PREFIX: &str = "GITSIGN";

const PREFIXED: [(&str, Field); 9] = [
    ("FULCIO_URL", Field::FulcioUrl),
    ("FULCIO_ROOT", Field::FulcioRoot),
    ("REKOR_URL", Field::RekorUrl),
    ("OIDC_CLIENT_ID", Field::ClientId),
    ("OIDC_REDIRECT_URL", Field::RedirectUrl),
    ("OIDC_ISSUER", Field::Issuer),
    ("CONNECTOR_ID", Field::ConnectorId),
    ("TIMESTAMP_SERVER_URL", Field::TimestampUrl),
    ("TIMESTAMP_CERT_CHAIN", Field::TimestampCertChain),
];

const TOOL_ONLY: [(&str, Field); 2] = [("LOG", Field::LogPath), ("REKOR_MODE", Field::RekorMode)];

static VARIABLES: LazyLock<Vec<(String, Field)>> = LazyLock::new(|| {
    let mut vars = vec![(LEGACY_ROOT_VAR.to_string(), Field::FulcioRoot)];
    for prefix in [SHARED_PREFIX, TOOL_PREFIX] {
        vars.extend(
            PREFIXED
                .iter()
                .map(|&(suffix, field)| (format!("{prefix}_{suffix}"), field)),
        );
    }
    vars.extend(
        TOOL_ONLY
            .iter()
            .map(|&(suffix, field)| (format!("{TOOL_PREFIX}_{suffix}"), field)),
    );
    vars
});

/// Read-only lookup of environment variables by name.
#[cfg_attr(test, mockall::automock)]
pub trait Environment {
    /// Return the variable's value if it is set, even when empty.
    fn var(&self, name: &str) -> Option<String>;
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        // Non-UTF-8 values are still "set"; decode lossily rather than drop them.
        env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }
}

/// An in-memory environment.
///
/// # Examples
///
/// ```
/// use gitsign_config::config::{Environment, MapEnvironment};
///
/// let env = MapEnvironment::new().with("GITSIGN_LOG", "");
/// assert_eq!(env.var("GITSIGN_LOG"), Some(String::new()));
/// assert_eq!(env.var("GITSIGN_REKOR_MODE"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnvironment {
    vars: HashMap<String, String>,
}

impl MapEnvironment {
    /// Create an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, returning the updated environment.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnvironment {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Environment for MapEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Return the variable's value if it is set, otherwise `value`.
///
/// # Examples
///
/// ```
/// use gitsign_config::config::{env_or_value, MapEnvironment};
///
/// let env = MapEnvironment::new().with("GITSIGN_LOG", "");
/// assert_eq!(env_or_value(&env, "GITSIGN_LOG", "/tmp/log"), "");
/// assert_eq!(env_or_value(&env, "GITSIGN_REKOR_MODE", "online"), "online");
/// ```
pub fn env_or_value<E: Environment + ?Sized>(env: &E, name: &str, value: &str) -> String {
    env.var(name).unwrap_or_else(|| value.to_string())
}

/// Handles environment variable overrides for configuration.
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Every consumed variable with the field it overrides, in application
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use gitsign_config::config::EnvironmentConfig;
    ///
    /// let names: Vec<_> = EnvironmentConfig::variables()
    ///     .iter()
    ///     .map(|(name, _)| name.as_str())
    ///     .collect();
    /// let shared = names.iter().position(|n| *n == "SIGSTORE_FULCIO_URL").unwrap();
    /// let tool = names.iter().position(|n| *n == "GITSIGN_FULCIO_URL").unwrap();
    /// assert!(shared < tool);
    /// ```
    #[must_use]
    pub fn variables() -> &'static [(String, Field)] {
        &VARIABLES
    }

    /// The `GITSIGN_*` variable that overrides `field`, if any.
    #[must_use]
    pub fn tool_variable(field: Field) -> Option<String> {
        PREFIXED
            .iter()
            .chain(TOOL_ONLY.iter())
            .find(|&&(_, f)| f == field)
            .map(|&(suffix, _)| format!("{TOOL_PREFIX}_{suffix}"))
    }

    /// Apply environment variable overrides to `config`.
    ///
    /// Returns the `(variable, field)` pairs that were set, in application
    /// order.
    pub fn apply_overrides<E: Environment + ?Sized>(
        config: &mut Config,
        env: &E,
    ) -> Vec<(String, Field)> {
        let mut applied = Vec::new();
        for (name, field) in Self::variables() {
            if let Some(value) = env.var(name) {
                log::debug!("environment {name} -> {field}");
                config.set(*field, &value);
                applied.push((name.clone(), *field));
            }
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn test_variables_order_and_count() {
        let vars = EnvironmentConfig::variables();
        assert_eq!(vars.len(), 1 + 9 + 9 + 2);
        assert_eq!(vars[0], (LEGACY_ROOT_VAR.to_string(), Field::FulcioRoot));
        assert_eq!(vars[1].0, "SIGSTORE_FULCIO_URL");
        assert_eq!(vars[10].0, "GITSIGN_FULCIO_URL");
        assert_eq!(vars[19], ("GITSIGN_LOG".to_string(), Field::LogPath));
        assert_eq!(vars[20], ("GITSIGN_REKOR_MODE".to_string(), Field::RekorMode));
    }

    #[test]
    fn test_variables_names() {
        let names: Vec<&str> = EnvironmentConfig::variables()
            .iter()
            .map(|(n, _)| n.as_str())
            .collect();
        for expected in [
            "SIGSTORE_FULCIO_ROOT",
            "GITSIGN_FULCIO_ROOT",
            "SIGSTORE_REKOR_URL",
            "GITSIGN_OIDC_CLIENT_ID",
            "SIGSTORE_OIDC_REDIRECT_URL",
            "GITSIGN_OIDC_ISSUER",
            "SIGSTORE_CONNECTOR_ID",
            "GITSIGN_TIMESTAMP_SERVER_URL",
            "SIGSTORE_TIMESTAMP_CERT_CHAIN",
        ] {
            assert!(names.contains(&expected), "{expected}");
        }
        assert!(!names.contains(&"SIGSTORE_LOG"));
        assert!(!names.contains(&"SIGSTORE_REKOR_MODE"));
    }

    #[test]
    fn test_tool_variable() {
        assert_eq!(
            EnvironmentConfig::tool_variable(Field::FulcioUrl).as_deref(),
            Some("GITSIGN_FULCIO_URL")
        );
        assert_eq!(
            EnvironmentConfig::tool_variable(Field::LogPath).as_deref(),
            Some("GITSIGN_LOG")
        );
        assert_eq!(EnvironmentConfig::tool_variable(Field::CommitterName), None);
        assert_eq!(EnvironmentConfig::tool_variable(Field::MatchCommitter), None);
    }

    #[test]
    fn test_apply_overrides_no_env_vars() {
        let mut config = Config::default();
        let applied = EnvironmentConfig::apply_overrides(&mut config, &MapEnvironment::new());
        assert!(applied.is_empty());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_tool_prefix_beats_shared_prefix() {
        let env = MapEnvironment::new()
            .with("SIGSTORE_FULCIO_URL", "A")
            .with("GITSIGN_FULCIO_URL", "B");
        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config, &env);
        assert_eq!(config.fulcio_url, "B");
    }

    #[test]
    fn test_shared_prefix_alone_applies() {
        let env = MapEnvironment::new().with("SIGSTORE_OIDC_ISSUER", "https://issuer.example");
        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config, &env);
        assert_eq!(config.issuer, "https://issuer.example");
    }

    #[test]
    fn test_fulcio_root_chain() {
        let mut config = Config {
            fulcio_root: "from-git".to_string(),
            ..Default::default()
        };
        let env = MapEnvironment::new().with(LEGACY_ROOT_VAR, "legacy");
        EnvironmentConfig::apply_overrides(&mut config, &env);
        assert_eq!(config.fulcio_root, "legacy");

        let env = env.with("SIGSTORE_FULCIO_ROOT", "shared");
        EnvironmentConfig::apply_overrides(&mut config, &env);
        assert_eq!(config.fulcio_root, "shared");

        let env = env.with("GITSIGN_FULCIO_ROOT", "tool");
        let applied = EnvironmentConfig::apply_overrides(&mut config, &env);
        assert_eq!(config.fulcio_root, "tool");
        assert_eq!(applied.last().unwrap().0, "GITSIGN_FULCIO_ROOT");
    }

    #[test]
    fn test_empty_value_overrides() {
        let env = MapEnvironment::new().with("GITSIGN_REKOR_URL", "");
        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config, &env);
        assert_eq!(config.rekor_url, "");
    }

    #[test]
    fn test_tool_only_variables() {
        let env = MapEnvironment::new()
            .with("GITSIGN_LOG", "/var/log/gitsign.log")
            .with("GITSIGN_REKOR_MODE", "offline")
            .with("SIGSTORE_REKOR_MODE", "ignored");
        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config, &env);
        assert_eq!(config.log_path, "/var/log/gitsign.log");
        assert_eq!(config.rekor_mode, "offline");
    }

    #[test]
    fn test_env_or_value() {
        let env = MapEnvironment::new().with("SET", "x").with("EMPTY", "");
        assert_eq!(env_or_value(&env, "SET", "default"), "x");
        assert_eq!(env_or_value(&env, "EMPTY", "default"), "");
        assert_eq!(env_or_value(&env, "UNSET", "default"), "default");
    }

    #[test]
    fn test_map_environment_from_iter() {
        let env: MapEnvironment = [("GITSIGN_LOG", "a")].into_iter().collect();
        assert_eq!(env.var("GITSIGN_LOG").as_deref(), Some("a"));
    }

    #[test]
    fn test_each_variable_queried_once_in_order() {
        let mut mock = MockEnvironment::new();
        let mut seq = mockall::Sequence::new();
        for (name, _) in EnvironmentConfig::variables() {
            let value = (name == "GITSIGN_CONNECTOR_ID").then(|| "dex".to_string());
            mock.expect_var()
                .with(eq(name.clone()))
                .times(1)
                .in_sequence(&mut seq)
                .return_const(value);
        }

        let mut config = Config::default();
        let applied = EnvironmentConfig::apply_overrides(&mut config, &mock);
        assert_eq!(config.connector_id, "dex");
        assert_eq!(
            applied,
            vec![("GITSIGN_CONNECTOR_ID".to_string(), Field::ConnectorId)]
        );
    }
}
