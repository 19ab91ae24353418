//! Resolution of the effective configuration.
//!
//! Layers are applied lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. git config (`user.*` and `gitsign.*` keys)
//! 3. Environment variables (see [`crate::config::environment`])

use crate::config::environment::{Environment, EnvironmentConfig, ProcessEnvironment};
use crate::config::keys::apply_git_options;
use crate::config::parser::RawConfig;
use crate::config::schema::{Config, Field};
use crate::config::source::{ConfigSource, GitConfigSource};
use crate::error::Result;
use std::collections::BTreeMap;
use std::fmt;

/// The layer that supplied a field's final value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// The built-in default.
    Default,
    /// A git config entry.
    GitConfig {
        /// The key as it appeared in the source.
        key: String,
    },
    /// An environment variable.
    Environment {
        /// The variable name.
        variable: String,
    },
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::GitConfig { key } => write!(f, "git config {key}"),
            Self::Environment { variable } => write!(f, "env {variable}"),
        }
    }
}

/// A resolved configuration together with the origin of every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The resolved configuration.
    pub config: Config,
    /// The layer that last set each field.
    pub origins: BTreeMap<Field, Origin>,
}

impl Resolution {
    /// The origin of `field`.
    #[must_use]
    pub fn origin(&self, field: Field) -> &Origin {
        self.origins.get(&field).unwrap_or(&Origin::Default)
    }
}

/// Builder for resolving configuration.
///
/// By default git is run in the current directory and the process
/// environment is consulted.
///
/// # Examples
///
/// ```
/// use gitsign_config::config::{ConfigResolver, MapEnvironment, StaticSource};
///
/// let config = ConfigResolver::new()
///     .with_source(StaticSource::new("gitsign.rekorMode offline\n"))
///     .with_environment(MapEnvironment::new().with("GITSIGN_FULCIO_URL", "https://fulcio.example"))
///     .resolve()
///     .unwrap();
///
/// assert_eq!(config.rekor_mode, "offline");
/// assert_eq!(config.fulcio_url, "https://fulcio.example");
/// ```
#[derive(Debug, Clone)]
pub struct ConfigResolver<S = GitConfigSource, E = ProcessEnvironment> {
    source: S,
    env: E,
    skip_env: bool,
}

impl ConfigResolver {
    /// Create a resolver reading git config and the process environment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: GitConfigSource::new(),
            env: ProcessEnvironment,
            skip_env: false,
        }
    }
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ConfigSource, E: Environment> ConfigResolver<S, E> {
    /// Replace the raw configuration source.
    #[must_use]
    pub fn with_source<T: ConfigSource>(self, source: T) -> ConfigResolver<T, E> {
        ConfigResolver {
            source,
            env: self.env,
            skip_env: self.skip_env,
        }
    }

    /// Replace the environment.
    #[must_use]
    pub fn with_environment<F: Environment>(self, env: F) -> ConfigResolver<S, F> {
        ConfigResolver {
            source: self.source,
            env,
            skip_env: self.skip_env,
        }
    }

    /// Skip environment variable overrides.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Resolve the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::SourceUnavailable`] if the source could not
    /// be read. No partial configuration is produced.
    pub fn resolve(&self) -> Result<Config> {
        self.resolve_with_origins().map(|r| r.config)
    }

    /// Resolve the configuration, recording where each field came from.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::SourceUnavailable`] if the source could not
    /// be read.
    pub fn resolve_with_origins(&self) -> Result<Resolution> {
        let text = self.source.read()?;
        let raw = RawConfig::parse(&text);
        log::debug!("read {} config entries", raw.len());

        let mut config = Config::default();
        let mut origins: BTreeMap<Field, Origin> =
            Field::ALL.iter().map(|&f| (f, Origin::Default)).collect();

        for (key, field) in apply_git_options(&mut config, &raw) {
            origins.insert(field, Origin::GitConfig { key });
        }

        if self.skip_env {
            log::debug!("skipping environment overrides");
        } else {
            for (variable, field) in EnvironmentConfig::apply_overrides(&mut config, &self.env) {
                origins.insert(field, Origin::Environment { variable });
            }
        }

        Ok(Resolution { config, origins })
    }
}
