//! crates/logging/src/logger.rs
//! The logger facade: severity filter, output lock and console sink.

use std::fmt;
use std::io::Write;
use std::panic::Location;
use std::sync::{Mutex, PoisonError};

use logging_sink::{ConsoleSink, Record, Severity, SourceLocation};

use crate::config::{LoggerConfig, LoggerSettings};

/// Thread-safe leveled logger writing colored records to `W`.
///
/// The process-wide instance returned by [`global`](crate::global) writes to
/// standard output; constructing a `Logger` directly is useful for routing the
/// same engine into a buffer. Configuration lives in atomics, so the severity
/// check in [`log`](Self::log) never touches the output lock and disabled
/// levels cost a single relaxed load. Emission holds one mutex for the whole
/// record, which keeps concurrent records from interleaving.
///
/// Logging never reports failure. Write and flush errors are discarded and a
/// mutex poisoned by a panicking writer is recovered, so one bad record does
/// not silence the others.
///
/// # Examples
///
/// ```
/// use logging::{Logger, Severity};
///
/// let logger = Logger::new(Vec::<u8>::new());
/// logger.log(Severity::Info, "Let's go!", "app", 1);
/// logger.log(Severity::Debug, "filtered", "app", 2);
///
/// assert_eq!(logger.into_inner(), b"\x1b[37m[INFO] Let's go!\n\x1b[0m".to_vec());
/// ```
pub struct Logger<W> {
    config: LoggerConfig,
    sink: Mutex<ConsoleSink<W>>,
}

impl<W> Logger<W> {
    /// Creates a logger with the default configuration.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self::with_settings(writer, LoggerSettings::with_minimum_level(Severity::Info))
    }

    /// Creates a logger with explicit settings.
    #[must_use]
    pub const fn with_settings(writer: W, settings: LoggerSettings) -> Self {
        Self {
            config: LoggerConfig::new(settings),
            sink: Mutex::new(ConsoleSink::new(writer)),
        }
    }

    /// Returns the live configuration.
    pub const fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Sets the minimum severity. Subsequent records ranked below it are dropped.
    pub fn set_minimum_level(&self, level: Severity) {
        self.config.set_minimum_level(level);
    }

    /// Returns the current minimum severity.
    pub fn minimum_level(&self) -> Severity {
        self.config.minimum_level()
    }

    /// Enables or disables the ` at <file>:<line>` suffix.
    pub fn set_include_location(&self, enabled: bool) {
        self.config.set_include_location(enabled);
    }

    /// Reports whether the location suffix is enabled.
    pub fn include_location(&self) -> bool {
        self.config.include_location()
    }

    /// Applies both fields of `settings`.
    pub fn configure(&self, settings: LoggerSettings) {
        self.config.apply(settings);
    }

    /// Returns a snapshot of the current configuration.
    pub fn settings(&self) -> LoggerSettings {
        self.config.snapshot()
    }

    /// Reports whether a record of `level` would be emitted.
    #[inline]
    pub fn enabled(&self, level: Severity) -> bool {
        self.config.enabled(level)
    }

    /// Consumes the logger and returns the writer.
    pub fn into_inner(self) -> W {
        self.sink
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .into_inner()
    }
}

impl<W> Logger<W>
where
    W: Write,
{
    /// Logs `message` at `level` as coming from `file:line`.
    ///
    /// This is the operation every leveled entry point funnels into.
    pub fn log(&self, level: Severity, message: &str, file: &str, line: u32) {
        if !self.enabled(level) {
            return;
        }
        self.emit(level, message, file, line);
    }

    /// Logs pre-formatted arguments. Formatting only happens when `level` is enabled.
    pub fn log_fmt(&self, level: Severity, args: fmt::Arguments<'_>, file: &str, line: u32) {
        if !self.enabled(level) {
            return;
        }
        match args.as_str() {
            Some(message) => self.emit(level, message, file, line),
            None => self.emit(level, &args.to_string(), file, line),
        }
    }

    /// Logs at [`Severity::Trace`] from the caller's location.
    #[track_caller]
    pub fn trace(&self, message: &str) {
        self.log_from_caller(Severity::Trace, message, Location::caller());
    }

    /// Logs at [`Severity::Debug`] from the caller's location.
    #[track_caller]
    pub fn debug(&self, message: &str) {
        self.log_from_caller(Severity::Debug, message, Location::caller());
    }

    /// Logs at [`Severity::Info`] from the caller's location.
    #[track_caller]
    pub fn info(&self, message: &str) {
        self.log_from_caller(Severity::Info, message, Location::caller());
    }

    /// Logs at [`Severity::Warn`] from the caller's location.
    #[track_caller]
    pub fn warn(&self, message: &str) {
        self.log_from_caller(Severity::Warn, message, Location::caller());
    }

    /// Logs at [`Severity::Error`] from the caller's location.
    #[track_caller]
    pub fn error(&self, message: &str) {
        self.log_from_caller(Severity::Error, message, Location::caller());
    }

    /// Logs at [`Severity::Fatal`] from the caller's location.
    ///
    /// The process keeps running; terminating is the caller's decision.
    #[track_caller]
    pub fn fatal(&self, message: &str) {
        self.log_from_caller(Severity::Fatal, message, Location::caller());
    }

    fn log_from_caller(&self, level: Severity, message: &str, caller: &Location<'_>) {
        self.log(level, message, caller.file(), caller.line());
    }

    fn emit(&self, level: Severity, message: &str, file: &str, line: u32) {
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);

        let mut record = Record::new(level, message);
        if self.config.include_location() {
            record = record.with_location(SourceLocation::new(file, line));
        }

        // Best effort: the sink has already attempted the reset.
        let _ = sink.write_record(&record);
        let _ = sink.flush();
    }
}

impl<W> fmt::Debug for Logger<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
