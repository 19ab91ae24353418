//! Configuration resolution for gitsign.
//!
//! This module turns raw git config output and environment variables into a
//! single [`Config`]:
//! - [`source`]: where raw `key value` text comes from (git, a file, memory)
//! - [`parser`]: line parsing into a [`RawConfig`]
//! - [`keys`]: case-insensitive mapping of git keys onto fields
//! - [`environment`]: `SIGSTORE_*` / `GITSIGN_*` overrides
//! - [`resolver`]: the orchestrating [`ConfigResolver`]
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. `GITSIGN_LOG`, `GITSIGN_REKOR_MODE`
//! 2. `GITSIGN_*` variables
//! 3. `SIGSTORE_*` variables
//! 4. `SIGSTORE_ROOT_FILE` (Fulcio root only)
//! 5. git config (`gitsign.*`, `user.name`, `user.email`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! Resolving from git in the current directory:
//!
//! ```no_run
//! use gitsign_config::config::ConfigResolver;
//!
//! let config = ConfigResolver::new().resolve().unwrap();
//! println!("Fulcio: {}", config.fulcio_url);
//! ```
//!
//! Resolving from fixed inputs:
//!
//! ```
//! use gitsign_config::config::{ConfigResolver, MapEnvironment, StaticSource};
//!
//! let env = MapEnvironment::new()
//!     .with("SIGSTORE_FULCIO_URL", "https://shared.example")
//!     .with("GITSIGN_FULCIO_URL", "https://gitsign.example");
//!
//! let config = ConfigResolver::new()
//!     .with_source(StaticSource::new("gitsign.matchCommitter TRUE\n"))
//!     .with_environment(env)
//!     .resolve()
//!     .unwrap();
//!
//! assert_eq!(config.fulcio_url, "https://gitsign.example");
//! assert!(config.match_committer);
//! ```

pub mod environment;
pub mod keys;
pub mod parser;
pub mod resolver;
pub mod schema;
pub mod source;

#[cfg(test)]
mod proptests;

// Re-export key types at module root
pub use environment::{
    env_or_value, Environment, EnvironmentConfig, MapEnvironment, ProcessEnvironment,
    LEGACY_ROOT_VAR, SHARED_PREFIX, TOOL_PREFIX,
};
pub use keys::{apply_git_options, classify_key};
pub use parser::RawConfig;
pub use resolver::{ConfigResolver, Origin, Resolution};
pub use schema::{
    Config, Field, RekorMode, DEFAULT_CLIENT_ID, DEFAULT_FULCIO_URL, DEFAULT_ISSUER,
    DEFAULT_REKOR_MODE, DEFAULT_REKOR_URL,
};
pub use source::{interpret_git_output, ConfigSource, FileSource, GitConfigSource, StaticSource};
