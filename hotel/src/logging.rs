//! Logging for the hotel library.
//!
//! Library code logs through the [`log`] facade. [`Logger`] is the stderr
//! backend: it filters records by a coarse [`LogLevel`] and can be
//! registered globally with [`install_logger`].

use std::env;
use std::fmt;

use crate::config::Config;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "HOTEL_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use hotel::LogLevel;
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
    /// Everything, including booking activity.
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
    /// use hotel::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The most detailed `log` level this setting lets through.
    #[must_use]
    pub const fn level_filter(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Off,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Debug,
        }
    }
}

/// A simple stderr-based logger.
///
/// # Examples
///
/// ```
/// use hotel::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("Block 'Choir' is close to the size limit");
/// logger.info("Not printed at Normal");
/// ```
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Logs an error message. Suppressed only at Quiet.
    pub fn error(&self, message: &str) {
        self.emit(log::Level::Error, message);
    }

    /// Logs a warning message. Suppressed only at Quiet.
    pub fn warn(&self, message: &str) {
        self.emit(log::Level::Warn, message);
    }

    /// Logs an informational message. Shown at Verbose.
    pub fn info(&self, message: &str) {
        self.emit(log::Level::Info, message);
    }

    /// Logs a debug message. Shown at Verbose.
    pub fn debug(&self, message: &str) {
        self.emit(log::Level::Debug, message);
    }

    fn allows(&self, level: log::Level) -> bool {
        level <= self.level.level_filter()
    }

    fn emit(&self, level: log::Level, message: &str) {
        if self.allows(level) {
            eprintln!("{}: {message}", level.as_str());
        }
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
            eprintln!("{}: {}", record.level().as_str(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Resolves a logger from CLI-style flags and the environment.
///
/// The priority order is:
/// 1. Flags (`verbose` wins over `quiet`)
/// 2. `HOTEL_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// An unrecognised `HOTEL_LOG_MODE` value falls back to Normal.
///
/// # Examples
///
/// ```
/// use hotel::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
/// assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(env_value) = env::var(LOG_MODE_ENV) {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}

/// Resolves a logger from a loaded configuration.
///
/// [`crate::config::ConfigBuilder`] already folds `HOTEL_LOG_MODE` into
/// `log_level`, so this covers every layer from defaults to overrides.
///
/// # Errors
///
/// Returns a validation error if `log_level` is not a known level.
///
/// # Examples
///
/// ```
/// use hotel::{init_logger_from_config, Config, LogLevel};
///
/// let config = Config {
///     log_level: Some("quiet".into()),
///     ..Config::default()
/// };
/// assert_eq!(init_logger_from_config(&config).unwrap().level(), LogLevel::Quiet);
/// ```
pub fn init_logger_from_config(config: &Config) -> crate::Result<Logger> {
    Ok(Logger::new(config.resolved_log_level()?))
}

/// Registers `logger` as the process-wide `log` backend.
///
/// Returns `false` if a backend was already installed, in which case the
/// existing one is kept.
pub fn install_logger(logger: Logger) -> bool {
    let filter = logger.level().level_filter();
    match log::set_boxed_logger(Box::new(logger)) {
        Ok(()) => {
            log::set_max_level(filter);
            true
        }
        Err(_) => false,
    }
}
