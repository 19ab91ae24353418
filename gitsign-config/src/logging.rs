//! Logging infrastructure for gitsign-config.
//!
//! The library emits records through the [`log`] facade. This module
//! provides a simple stderr backend with three verbosity levels.

use std::env;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

/// Environment variable selecting the log level when no CLI flag is given.
pub const LOG_MODE_VAR: &str = "GITSIGN_CONFIG_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use gitsign_config::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Errors, warnings, info and debug messages.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use gitsign_config::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    const fn to_u8(self) -> u8 {
        match self {
            Self::Quiet => 0,
            Self::Normal => 1,
            Self::Verbose => 2,
        }
    }

    const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Quiet,
            1 => Self::Normal,
            _ => Self::Verbose,
        }
    }

    /// The most verbose [`log::LevelFilter`] this level lets through.
    #[must_use]
    pub const fn filter(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Off,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Debug,
        }
    }
}

/// A stderr-based [`log::Log`] backend.
///
/// The level can be changed after the logger is installed.
///
/// # Examples
///
/// ```
/// use gitsign_config::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// assert!(logger.allows(log::Level::Error));
/// assert!(!logger.allows(log::Level::Debug));
///
/// logger.set_level(LogLevel::Verbose);
/// assert!(logger.allows(log::Level::Debug));
/// ```
#[derive(Debug)]
pub struct Logger {
    level: AtomicU8,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self {
            level: AtomicU8::new(level.to_u8()),
        }
    }

    /// Returns the current log level.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Changes the log level.
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level.to_u8(), Ordering::Relaxed);
    }

    /// Whether a record at `level` would be written.
    #[must_use]
    pub fn allows(&self, level: log::Level) -> bool {
        level <= self.level().filter()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.allows(metadata.level())
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// The process-wide backend installed by [`init_logger`].
static LOGGER: Logger = Logger::new(LogLevel::Normal);

/// Pick the log level from CLI flags and the environment.
///
/// The priority order is:
/// 1. CLI flags (verbose beats quiet)
/// 2. `GITSIGN_CONFIG_LOG_MODE`
/// 3. Default (Normal)
#[must_use]
pub fn select_level(verbose: bool, quiet: bool) -> LogLevel {
    if verbose {
        return LogLevel::Verbose;
    }
    if quiet {
        return LogLevel::Quiet;
    }

    env::var(LOG_MODE_VAR)
        .ok()
        .and_then(|v| LogLevel::parse(&v).ok())
        .unwrap_or(LogLevel::Normal)
}

/// Install the stderr logger as the global [`log`] backend.
///
/// The backend is installed once; every call sets both its level and the
/// facade's maximum level. Returns the selected level.
///
/// # Examples
///
/// ```
/// use gitsign_config::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(false, true), LogLevel::Quiet);
/// assert!(!log::log_enabled!(log::Level::Error));
///
/// assert_eq!(init_logger(true, false), LogLevel::Verbose);
/// assert!(log::log_enabled!(log::Level::Debug));
/// ```
pub fn init_logger(verbose: bool, quiet: bool) -> LogLevel {
    let level = select_level(verbose, quiet);
    LOGGER.set_level(level);
    if log::set_logger(&LOGGER).is_err() {
        log::debug!("logger already installed");
    }
    log::set_max_level(level.filter());
    level
}
