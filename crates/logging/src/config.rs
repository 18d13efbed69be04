//! crates/logging/src/config.rs
//! Logger configuration: an atomic live view and a plain settings snapshot.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use logging_sink::Severity;

/// Plain snapshot of the logger configuration.
///
/// Used to construct a [`LoggerConfig`], to apply several changes at once with
/// [`Logger::configure`](crate::Logger::configure), and to report the current
/// state. With the `serde` feature enabled the snapshot can be embedded in a
/// host application's configuration file; absent fields take their defaults.
///
/// # Examples
///
/// ```
/// use logging::{LoggerSettings, Severity};
///
/// let settings = LoggerSettings::default();
/// assert_eq!(settings.minimum_level, Severity::Info);
/// assert!(!settings.include_location);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerSettings {
    /// Records ranked below this severity are dropped.
    pub minimum_level: Severity,
    /// Append ` at <file>:<line>` to every record.
    pub include_location: bool,
}

impl LoggerSettings {
    /// Returns settings with the given minimum level and location disabled.
    #[must_use]
    pub const fn with_minimum_level(minimum_level: Severity) -> Self {
        Self {
            minimum_level,
            include_location: false,
        }
    }
}

/// Live logger configuration shared by every caller.
///
/// Both fields are atomics, so readers never observe a torn value and a store
/// is visible to the next load on any thread. The fields are independent, so
/// relaxed ordering is sufficient.
#[derive(Debug)]
pub struct LoggerConfig {
    minimum_level: AtomicU8,
    include_location: AtomicBool,
}

impl LoggerConfig {
    /// Creates a configuration from a snapshot.
    #[must_use]
    pub const fn new(settings: LoggerSettings) -> Self {
        Self {
            minimum_level: AtomicU8::new(settings.minimum_level.as_u8()),
            include_location: AtomicBool::new(settings.include_location),
        }
    }

    /// Returns the current minimum severity.
    ///
    /// An unrecognised stored rank reads as [`Severity::Trace`], so a corrupted
    /// threshold lets every record through instead of suppressing them.
    pub fn minimum_level(&self) -> Severity {
        match self.minimum_level.load(Ordering::Relaxed) {
            rank if rank <= Severity::Fatal.as_u8() => Severity::from_u8(rank),
            _ => Severity::Trace,
        }
    }

    /// Sets the minimum severity.
    pub fn set_minimum_level(&self, level: Severity) {
        self.minimum_level.store(level.as_u8(), Ordering::Relaxed);
    }

    /// Reports whether source locations are appended.
    pub fn include_location(&self) -> bool {
        self.include_location.load(Ordering::Relaxed)
    }

    /// Enables or disables the source location suffix.
    pub fn set_include_location(&self, enabled: bool) {
        self.include_location.store(enabled, Ordering::Relaxed);
    }

    /// Reports whether a record of `level` passes the filter.
    #[inline]
    pub fn enabled(&self, level: Severity) -> bool {
        level >= self.minimum_level()
    }

    /// Applies every field of `settings`.
    pub fn apply(&self, settings: LoggerSettings) {
        self.set_minimum_level(settings.minimum_level);
        self.set_include_location(settings.include_location);
    }

    /// Returns a snapshot of the current values.
    pub fn snapshot(&self) -> LoggerSettings {
        LoggerSettings {
            minimum_level: self.minimum_level(),
            include_location: self.include_location(),
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new(LoggerSettings::default())
    }
}

impl From<LoggerSettings> for LoggerConfig {
    fn from(settings: LoggerSettings) -> Self {
        Self::new(settings)
    }
}
