//! Error types for the gitsign-config library.
//!
//! Resolution has exactly one failure mode: the raw configuration source
//! could not be read. Everything else (malformed lines, unknown keys, unset
//! variables) falls back silently.

use thiserror::Error;

/// Result type alias for operations that may fail with a gitsign-config error.
///
/// # Examples
///
/// ```
/// use gitsign_config::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("https://fulcio.sigstore.dev".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the gitsign-config library.
#[derive(Debug, Error)]
pub enum Error {
    /// The raw configuration source could not be read.
    ///
    /// Resolution is aborted and no partial configuration is returned.
    #[error("error reading config: {reason}")]
    SourceUnavailable {
        /// Description of the underlying failure, including any diagnostic
        /// output produced by the source.
        reason: String,
    },

    /// A resolved configuration could not be rendered.
    #[error("failed to render {format} output: {message}")]
    Serialization {
        /// The output format being rendered.
        format: String,
        /// The serializer's error message.
        message: String,
    },
}

impl Error {
    /// Build a [`Error::SourceUnavailable`] from anything displayable.
    pub(crate) fn source_unavailable(reason: impl std::fmt::Display) -> Self {
        Self::SourceUnavailable {
            reason: reason.to_string(),
        }
    }

    /// Check if error indicates the configuration source was unreadable.
    ///
    /// # Examples
    ///
    /// ```
    /// use gitsign_config::Error;
    ///
    /// let err = Error::SourceUnavailable { reason: "boom".to_string() };
    /// assert!(err.is_source_unavailable());
    /// ```
    #[must_use]
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "json".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            format: "yaml".to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_unavailable_error() {
        let err = Error::SourceUnavailable {
            reason: "exit status: 128: fatal: not in a git directory".to_string(),
        };
        let display = format!("{err}");
        assert!(display.starts_with("error reading config"));
        assert!(display.contains("fatal: not in a git directory"));
        assert!(err.is_source_unavailable());
    }

    #[test]
    fn test_source_unavailable_helper() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "git not found");
        let err = Error::source_unavailable(io_err);
        assert!(format!("{err}").contains("git not found"));
    }

    #[test]
    fn test_serialization_error() {
        let err = Error::Serialization {
            format: "json".to_string(),
            message: "bad".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("json"));
        assert!(display.contains("bad"));
        assert!(!err.is_source_unavailable());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<u16> {
            Err(Error::SourceUnavailable {
                reason: "test".to_string(),
            })
        }

        assert!(returns_result().is_err());
    }
}
