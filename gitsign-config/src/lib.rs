#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # gitsign-config
//!
//! Resolution of the effective gitsign configuration.
//!
//! Settings are layered from built-in defaults, git config
//! (`git config --get-regexp .*`), and `SIGSTORE_*` / `GITSIGN_*`
//! environment variables into a single [`Config`].
//!
//! ## Core Types
//!
//! - [`Config`]: the fully resolved configuration
//! - [`ConfigResolver`]: builder that runs the resolution
//! - [`config::ConfigSource`] and [`config::Environment`]: injectable inputs
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: stderr backend for the `log` facade
//!
//! ## Examples
//!
//! ```
//! use gitsign_config::ConfigResolver;
//! use gitsign_config::config::{MapEnvironment, StaticSource};
//!
//! let config = ConfigResolver::new()
//!     .with_source(StaticSource::new("gitsign.rekorMode offline\nuser.email jane@example.com\n"))
//!     .with_environment(MapEnvironment::new().with("SIGSTORE_ROOT_FILE", "/etc/fulcio.pem"))
//!     .resolve()
//!     .unwrap();
//!
//! assert_eq!(config.rekor_mode, "offline");
//! assert_eq!(config.committer_email, "jane@example.com");
//! assert_eq!(config.fulcio_root, "/etc/fulcio.pem");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigResolver, Field, Origin, RekorMode, Resolution};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};

/// Resolve the configuration for the repository in the current directory,
/// using git and the process environment.
///
/// # Errors
///
/// Returns [`Error::SourceUnavailable`] if git config could not be read.
///
/// # Examples
///
/// ```no_run
/// let config = gitsign_config::get().unwrap();
/// println!("Rekor: {} ({})", config.rekor_url, config.rekor_mode);
/// ```
pub fn get() -> Result<Config> {
    ConfigResolver::new().resolve()
}
