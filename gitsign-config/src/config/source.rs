//! Raw configuration sources.
//!
//! A source produces `git config --get-regexp` style text: one
//! `<key> <value>` pair per line. The default source shells out to git
//! since git is the only reliable reader of global configs with custom
//! sections and deprecated subsection syntax.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Exit status git uses for "no matching entries".
const GIT_NO_MATCH_STATUS: i32 = 1;

/// A supplier of raw configuration text.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigSource {
    /// Read the raw configuration text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceUnavailable`] if the text could not be
    /// obtained.
    fn read(&self) -> Result<String>;
}

impl<S: ConfigSource + ?Sized> ConfigSource for &S {
    fn read(&self) -> Result<String> {
        (**self).read()
    }
}

impl<S: ConfigSource + ?Sized> ConfigSource for Box<S> {
    fn read(&self) -> Result<String> {
        (**self).read()
    }
}

/// Reads configuration by running `git config --get-regexp .*`.
///
/// # Examples
///
/// ```no_run
/// use gitsign_config::config::{ConfigSource, GitConfigSource};
///
/// let text = GitConfigSource::new()
///     .with_working_dir("/path/to/repo")
///     .read()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct GitConfigSource {
    program: PathBuf,
    working_dir: Option<PathBuf>,
}

impl Default for GitConfigSource {
    fn default() -> Self {
        Self {
            program: PathBuf::from("git"),
            working_dir: None,
        }
    }
}

impl GitConfigSource {
    /// Create a source that runs `git` from `PATH` in the current directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git in `dir` instead of the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Use a different git executable.
    #[must_use]
    pub fn with_program(mut self, program: impl AsRef<Path>) -> Self {
        self.program = program.as_ref().to_path_buf();
        self
    }
}

impl ConfigSource for GitConfigSource {
    fn read(&self) -> Result<String> {
        let mut cmd = Command::new(&self.program);
        cmd.args(["config", "--get-regexp", ".*"]);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        log::debug!("running {} config --get-regexp .*", self.program.display());
        let output = cmd.output().map_err(|e| {
            Error::source_unavailable(format!(
                "failed to run {}: {e}",
                self.program.display()
            ))
        })?;

        interpret_git_output(
            output.status.code(),
            &String::from_utf8_lossy(&output.stdout),
            &String::from_utf8_lossy(&output.stderr),
        )
    }
}

/// Decide whether git's output is usable.
///
/// `code` is `None` when the process was terminated by a signal. Exit
/// status 1 with no stderr output means no entries matched and is treated
/// as success.
///
/// # Errors
///
/// Returns [`Error::SourceUnavailable`] carrying the stderr text for any
/// other non-zero status.
///
/// # Examples
///
/// ```
/// use gitsign_config::config::interpret_git_output;
///
/// assert_eq!(interpret_git_output(Some(1), "", "").unwrap(), "");
///
/// let err = interpret_git_output(Some(2), "", "fatal: bad config").unwrap_err();
/// assert!(err.to_string().contains("fatal: bad config"));
/// ```
pub fn interpret_git_output(code: Option<i32>, stdout: &str, stderr: &str) -> Result<String> {
    match code {
        Some(0) => Ok(stdout.to_string()),
        Some(GIT_NO_MATCH_STATUS) if stderr.is_empty() => {
            log::debug!("git config matched no entries");
            Ok(stdout.to_string())
        }
        Some(status) => Err(Error::source_unavailable(format!(
            "exit status {status}: {}",
            stderr.trim_end()
        ))),
        None => Err(Error::source_unavailable(format!(
            "terminated by signal: {}",
            stderr.trim_end()
        ))),
    }
}

/// Reads configuration text from a file holding
/// `git config --get-regexp` output.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source reading from `path`.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ConfigSource for FileSource {
    fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path)
            .map_err(|e| Error::source_unavailable(format!("{}: {e}", self.path.display())))
    }
}

/// A fixed, in-memory configuration text.
///
/// # Examples
///
/// ```
/// use gitsign_config::config::{ConfigSource, StaticSource};
///
/// let source = StaticSource::new("gitsign.rekorMode offline\n");
/// assert_eq!(source.read().unwrap(), "gitsign.rekorMode offline\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSource {
    text: String,
}

impl StaticSource {
    /// Create a source returning `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl ConfigSource for StaticSource {
    fn read(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}
