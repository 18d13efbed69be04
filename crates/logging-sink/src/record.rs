//! crates/logging-sink/src/record.rs
//! Borrowed log record handed to a sink for a single emission.

use std::fmt;

use crate::severity::Severity;

/// Source position of a logging call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SourceLocation<'a> {
    file: &'a str,
    line: u32,
}

impl<'a> SourceLocation<'a> {
    /// Creates a location from a file path and a line number.
    #[must_use]
    pub const fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }

    /// Returns the file path as recorded at the call site.
    #[must_use]
    pub const fn file(&self) -> &'a str {
        self.file
    }

    /// Returns the line number recorded at the call site.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for SourceLocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

impl From<&'static std::panic::Location<'static>> for SourceLocation<'static> {
    fn from(location: &'static std::panic::Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

/// A single log record.
///
/// Records are built by the caller, rendered once by
/// [`ConsoleSink::write_record`](crate::ConsoleSink::write_record) and then
/// dropped. The label and color are not stored; they are looked up from the
/// [`Severity`] so the presentation table has a single source.
///
/// # Examples
///
/// ```
/// use logging_sink::{Record, Severity, SourceLocation};
///
/// let record = Record::new(Severity::Error, "fail")
///     .with_location(SourceLocation::new("app", 42));
///
/// assert_eq!(record.label(), "ERROR");
/// assert_eq!(record.color(), "31");
/// assert_eq!(record.location().map(|l| l.line()), Some(42));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Record<'a> {
    severity: Severity,
    message: &'a str,
    location: Option<SourceLocation<'a>>,
}

impl<'a> Record<'a> {
    /// Creates a record without a source location.
    #[must_use]
    pub const fn new(severity: Severity, message: &'a str) -> Self {
        Self {
            severity,
            message,
            location: None,
        }
    }

    /// Attaches the location that produced the record.
    #[must_use]
    pub const fn with_location(mut self, location: SourceLocation<'a>) -> Self {
        self.location = Some(location);
        self
    }

    /// Returns the record's severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the uppercase label for the record's severity.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.severity.as_str()
    }

    /// Returns the SGR color parameters for the record's severity.
    #[must_use]
    pub const fn color(&self) -> &'static str {
        self.severity.ansi_code()
    }

    /// Returns the message text.
    #[must_use]
    pub const fn message(&self) -> &'a str {
        self.message
    }

    /// Returns the attached source location, if any.
    #[must_use]
    pub const fn location(&self) -> Option<SourceLocation<'a>> {
        self.location
    }
}
