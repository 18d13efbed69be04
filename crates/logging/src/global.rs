//! crates/logging/src/global.rs
//! Process-wide logger writing to standard output.

use std::fmt;
use std::io::{self, Stdout};
use std::panic::Location;
use std::sync::OnceLock;

use logging_sink::Severity;

use crate::config::LoggerSettings;
use crate::logger::Logger;

static GLOBAL: OnceLock<Logger<Stdout>> = OnceLock::new();

/// Returns the process-wide logger.
///
/// The logger is created on first use with the default configuration
/// (minimum [`Severity::Info`], no source locations) and lives until the
/// process exits. Every free function in this crate and every `log_*!` macro
/// without an explicit `logger =` target goes through this instance.
pub fn global() -> &'static Logger<Stdout> {
    GLOBAL.get_or_init(|| Logger::new(io::stdout()))
}

/// Sets the process-wide minimum severity.
pub fn set_minimum_level(level: Severity) {
    global().set_minimum_level(level);
}

/// Returns the process-wide minimum severity.
pub fn minimum_level() -> Severity {
    global().minimum_level()
}

/// Enables or disables the process-wide ` at <file>:<line>` suffix.
pub fn set_include_location(enabled: bool) {
    global().set_include_location(enabled);
}

/// Reports whether the process-wide location suffix is enabled.
pub fn include_location() -> bool {
    global().include_location()
}

/// Applies `settings` to the process-wide logger.
pub fn configure(settings: LoggerSettings) {
    global().configure(settings);
}

/// Returns a snapshot of the process-wide configuration.
pub fn settings() -> LoggerSettings {
    global().settings()
}

/// Reports whether the process-wide logger would emit a record of `level`.
pub fn enabled(level: Severity) -> bool {
    global().enabled(level)
}

/// Logs `message` at `level` through the process-wide logger.
pub fn log(level: Severity, message: &str, file: &str, line: u32) {
    global().log(level, message, file, line);
}

/// Logs formatted arguments through the process-wide logger.
///
/// This is the expansion target of the `log_*!` macros.
pub fn log_fmt(level: Severity, args: fmt::Arguments<'_>, file: &str, line: u32) {
    global().log_fmt(level, args, file, line);
}

/// Logs at [`Severity::Trace`] from the caller's location.
#[track_caller]
pub fn trace(message: &str) {
    log_from_caller(Severity::Trace, message, Location::caller());
}

/// Logs at [`Severity::Debug`] from the caller's location.
#[track_caller]
pub fn debug(message: &str) {
    log_from_caller(Severity::Debug, message, Location::caller());
}

/// Logs at [`Severity::Info`] from the caller's location.
#[track_caller]
pub fn info(message: &str) {
    log_from_caller(Severity::Info, message, Location::caller());
}

/// Logs at [`Severity::Warn`] from the caller's location.
#[track_caller]
pub fn warn(message: &str) {
    log_from_caller(Severity::Warn, message, Location::caller());
}

/// Logs at [`Severity::Error`] from the caller's location.
#[track_caller]
pub fn error(message: &str) {
    log_from_caller(Severity::Error, message, Location::caller());
}

/// Logs at [`Severity::Fatal`] from the caller's location.
///
/// The process keeps running; terminating is the caller's decision.
#[track_caller]
pub fn fatal(message: &str) {
    log_from_caller(Severity::Fatal, message, Location::caller());
}

fn log_from_caller(level: Severity, message: &str, caller: &Location<'_>) {
    global().log(level, message, caller.file(), caller.line());
}
