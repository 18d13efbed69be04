//! crates/logging/src/macros.rs
//! Leveled logging macros that capture the call site.
//!
//! Each macro takes `format!`-style arguments and records `file!()` and
//! `line!()` where it is expanded. Prefix the arguments with
//! `logger = <expr>;` to log through a specific [`Logger`](crate::Logger)
//! instead of the process-wide one.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_at {
    ($level:expr, logger = $logger:expr; $($arg:tt)+) => {
        $logger.log_fmt(
            $level,
            ::core::format_args!($($arg)+),
            ::core::file!(),
            ::core::line!(),
        )
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::log_fmt(
            $level,
            ::core::format_args!($($arg)+),
            ::core::file!(),
            ::core::line!(),
        )
    };
}

/// Logs a trace message.
///
/// # Example
/// ```
/// logging::log_trace!("entering {}", "poll");
/// ```
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Trace, $($arg)+)
    };
}

/// Logs a debug message.
///
/// # Example
/// ```
/// logging::log_debug!("queue depth {}", 3);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Debug, $($arg)+)
    };
}

/// Logs an informational message.
///
/// # Example
/// ```
/// use logging::Logger;
///
/// let logger = Logger::new(Vec::<u8>::new());
/// logging::log_info!(logger = logger; "Let's go!");
/// assert_eq!(logger.into_inner(), b"\x1b[37m[INFO] Let's go!\n\x1b[0m".to_vec());
/// ```
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Info, $($arg)+)
    };
}

/// Logs a warning.
///
/// # Example
/// ```
/// logging::log_warn!("retrying in {}s", 5);
/// ```
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Warn, $($arg)+)
    };
}

/// Logs an error.
///
/// # Example
/// ```
/// logging::log_error!("failed to open {}", "config.toml");
/// ```
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Error, $($arg)+)
    };
}

/// Logs a fatal error. The process is not terminated.
///
/// # Example
/// ```
/// logging::log_fatal!("cannot continue: {}", "disk full");
/// ```
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Logger, LoggerSettings, Severity};

    fn located() -> Logger<Vec<u8>> {
        Logger::with_settings(
            Vec::new(),
            LoggerSettings {
                minimum_level: Severity::Trace,
                include_location: true,
            },
        )
    }

    #[test]
    fn macros_capture_expansion_site() {
        let logger = located();
        let line = line!() + 1;
        log_error!(logger = logger; "fail {}", 7);

        let output = String::from_utf8(logger.into_inner()).expect("utf-8");
        assert_eq!(
            output,
            format!("\x1b[31m[ERROR] fail 7 at {}:{line}\n\x1b[0m", file!())
        );
    }

    #[test]
    fn every_macro_uses_its_severity() {
        let logger = Logger::new(Vec::<u8>::new());
        logger.set_minimum_level(Severity::Trace);
        log_trace!(logger = logger; "t");
        log_debug!(logger = logger; "d");
        log_info!(logger = logger; "i");
        log_warn!(logger = logger; "w");
        log_error!(logger = logger; "e");
        log_fatal!(logger = logger; "f");

        let expected: String = Severity::ALL
            .iter()
            .zip(["t", "d", "i", "w", "e", "f"])
            .map(|(severity, message)| {
                format!(
                    "\x1b[{}m[{}] {message}\n\x1b[0m",
                    severity.ansi_code(),
                    severity.as_str()
                )
            })
            .collect();
        let output = String::from_utf8(logger.into_inner()).expect("utf-8");
        assert_eq!(output, expected);
    }

    #[test]
    fn logger_target_accepts_references() {
        let logger = located();
        let by_ref = &logger;
        log_warn!(logger = by_ref; "through a reference");
        let output = String::from_utf8(logger.into_inner()).expect("utf-8");
        assert!(output.contains("[WARN] through a reference at "));
    }
}
