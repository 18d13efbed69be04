//! crates/logging-sink/src/severity.rs
//! Ordered log severities and their fixed console presentation.

use std::fmt;
use std::str::FromStr;

/// Severity of a console log record.
///
/// Variants are declared in increasing rank so the derived [`Ord`] matches the
/// filtering order: a record is emitted when its severity is greater than or
/// equal to the configured minimum.
///
/// # Examples
///
/// ```
/// use logging_sink::Severity;
///
/// assert!(Severity::Trace < Severity::Debug);
/// assert!(Severity::Error < Severity::Fatal);
/// assert_eq!(Severity::default(), Severity::Info);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Severity {
    /// Fine-grained tracing output.
    Trace = 0,
    /// Developer diagnostics.
    Debug = 1,
    /// Informational message.
    #[default]
    Info = 2,
    /// Something unexpected that does not stop the program.
    Warn = 3,
    /// An operation failed.
    Error = 4,
    /// An unrecoverable condition. Logging it never terminates the process.
    Fatal = 5,
}

impl Severity {
    /// Every severity in increasing rank.
    pub const ALL: [Self; 6] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
    ];

    /// Returns the uppercase label rendered between brackets.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::Severity;
    ///
    /// assert_eq!(Severity::Warn.as_str(), "WARN");
    /// assert_eq!(Severity::Fatal.as_str(), "FATAL");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Returns the SGR parameters selecting this severity's color.
    ///
    /// The value is the text placed between `ESC[` and `m`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::Severity;
    ///
    /// assert_eq!(Severity::Trace.ansi_code(), "90");
    /// assert_eq!(Severity::Fatal.ansi_code(), "41;97");
    /// ```
    #[must_use]
    pub const fn ansi_code(self) -> &'static str {
        match self {
            Self::Trace => "90",
            Self::Debug => "36",
            Self::Info => "37",
            Self::Warn => "33",
            Self::Error => "31",
            Self::Fatal => "41;97",
        }
    }

    /// Returns the numeric rank used when the severity is stored atomically.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Decodes a stored rank.
    ///
    /// Ranks outside the six defined values decode to [`Severity::Fatal`] so an
    /// unexpected value is always logged rather than silently filtered.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::Severity;
    ///
    /// assert_eq!(Severity::from_u8(3), Severity::Warn);
    /// assert_eq!(Severity::from_u8(200), Severity::Fatal);
    /// ```
    #[must_use]
    pub const fn from_u8(rank: u8) -> Self {
        match rank {
            0 => Self::Trace,
            1 => Self::Debug,
            2 => Self::Info,
            3 => Self::Warn,
            4 => Self::Error,
            _ => Self::Fatal,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<u8> for Severity {
    fn from(rank: u8) -> Self {
        Self::from_u8(rank)
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.as_u8()
    }
}

/// Error returned when parsing a [`Severity`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unrecognised log severity: {input:?}")]
pub struct ParseSeverityError {
    input: String,
}

impl ParseSeverityError {
    /// Returns the text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            _ => Err(ParseSeverityError {
                input: input.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_increase_with_severity() {
        for pair in Severity::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{:?} should rank below {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn presentation_table_is_exact() {
        let expected = [
            (Severity::Trace, "TRACE", "90"),
            (Severity::Debug, "DEBUG", "36"),
            (Severity::Info, "INFO", "37"),
            (Severity::Warn, "WARN", "33"),
            (Severity::Error, "ERROR", "31"),
            (Severity::Fatal, "FATAL", "41;97"),
        ];
        for (severity, label, code) in expected {
            assert_eq!(severity.as_str(), label);
            assert_eq!(severity.ansi_code(), code);
        }
    }

    #[test]
    fn stored_rank_round_trips_for_defined_values() {
        for severity in Severity::ALL {
            assert_eq!(Severity::from_u8(severity.as_u8()), severity);
        }
    }

    #[test]
    fn out_of_range_rank_fails_open() {
        assert_eq!(Severity::from_u8(6), Severity::Fatal);
        assert_eq!(Severity::from(u8::MAX), Severity::Fatal);
    }

    #[test]
    fn parse_accepts_labels_in_any_case() {
        assert_eq!("INFO".parse::<Severity>(), Ok(Severity::Info));
        assert_eq!("trace".parse::<Severity>(), Ok(Severity::Trace));
        assert_eq!(" Warning ".parse::<Severity>(), Ok(Severity::Warn));
        assert_eq!("Fatal".parse::<Severity>(), Ok(Severity::Fatal));
    }

    #[test]
    fn parse_rejects_unknown_labels() {
        let err = "verbose".parse::<Severity>().unwrap_err();
        assert_eq!(err.input(), "verbose");
        assert_eq!(err.to_string(), "unrecognised log severity: \"verbose\"");
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(Severity::Error.to_string(), "ERROR");
    }
}
