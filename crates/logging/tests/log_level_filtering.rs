//! Integration tests for severity threshold filtering.
//!
//! These tests verify that a record is emitted exactly when its severity is
//! at or above the configured minimum, for every threshold.

use logging::{Logger, LoggerSettings, Severity};
use proptest::prelude::*;

fn captured(logger: Logger<Vec<u8>>) -> String {
    String::from_utf8(logger.into_inner()).expect("utf-8")
}

fn record_count(output: &str) -> usize {
    output.matches("\x1b[0m").count()
}

// ============================================================================
// Threshold Tests
// ============================================================================

/// Verifies the full threshold matrix: below is silent, at or above emits once.
#[test]
fn every_threshold_against_every_severity() {
    for threshold in Severity::ALL {
        for severity in Severity::ALL {
            let logger = Logger::new(Vec::<u8>::new());
            logger.set_minimum_level(threshold);
            logger.log(severity, "probe", "app", 1);

            let output = captured(logger);
            if severity < threshold {
                assert!(output.is_empty(), "{severity} leaked past {threshold}");
            } else {
                assert_eq!(record_count(&output), 1, "{severity} at {threshold}");
            }
        }
    }
}

/// Verifies the default threshold drops trace and debug.
#[test]
fn default_threshold_is_info() {
    let logger = Logger::new(Vec::<u8>::new());
    logger.trace("t");
    logger.debug("d");
    logger.info("i");

    assert_eq!(captured(logger), "\x1b[37m[INFO] i\n\x1b[0m");
}

/// Verifies two identical sets behave like one.
#[test]
fn repeated_threshold_is_idempotent() {
    let once = Logger::new(Vec::<u8>::new());
    once.set_minimum_level(Severity::Warn);
    once.warn("w");

    let twice = Logger::new(Vec::<u8>::new());
    twice.set_minimum_level(Severity::Warn);
    twice.set_minimum_level(Severity::Warn);
    twice.warn("w");

    assert_eq!(captured(once), captured(twice));
}

/// Verifies a threshold of ERROR suppresses a warning entirely.
#[test]
fn error_threshold_suppresses_warn() {
    let logger = Logger::with_settings(
        Vec::new(),
        LoggerSettings::with_minimum_level(Severity::Error),
    );
    logger.warn("quiet");
    assert_eq!(captured(logger), "");
}

/// Verifies lowering the threshold to TRACE lets trace records through.
#[test]
fn trace_threshold_admits_trace() {
    let logger = Logger::new(Vec::<u8>::new());
    logger.set_minimum_level(Severity::Trace);
    logger.trace("now visible");
    assert_eq!(captured(logger), "\x1b[90m[TRACE] now visible\n\x1b[0m");
}

/// Verifies the threshold can be raised again after lowering it.
#[test]
fn threshold_changes_take_effect_immediately() {
    let logger = Logger::new(Vec::<u8>::new());
    logger.set_minimum_level(Severity::Trace);
    logger.debug("first");
    logger.set_minimum_level(Severity::Fatal);
    logger.error("second");
    logger.fatal("third");

    let output = captured(logger);
    assert!(output.contains("[DEBUG] first"));
    assert!(!output.contains("second"));
    assert!(output.contains("[FATAL] third"));
}

// ============================================================================
// Location Tests
// ============================================================================

/// Verifies toggling location only changes the suffix.
#[test]
fn location_toggle_changes_only_suffix() {
    let logger = Logger::new(Vec::<u8>::new());
    logger.log(Severity::Error, "fail", "app", 42);
    logger.set_include_location(true);
    logger.log(Severity::Error, "fail", "app", 42);

    assert_eq!(
        captured(logger),
        "\x1b[31m[ERROR] fail\n\x1b[0m\x1b[31m[ERROR] fail at app:42\n\x1b[0m"
    );
}

// ============================================================================
// Properties
// ============================================================================

fn any_severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

proptest! {
    #[test]
    fn emitted_iff_at_or_above_threshold(
        threshold in any_severity(),
        severity in any_severity(),
        include_location in any::<bool>(),
        line in 1u32..10_000,
    ) {
        let logger = Logger::with_settings(
            Vec::new(),
            LoggerSettings { minimum_level: threshold, include_location },
        );
        logger.log(severity, "msg", "src/app.rs", line);
        let output = captured(logger);

        if severity >= threshold {
            let suffix = if include_location { format!(" at src/app.rs:{line}") } else { String::new() };
            prop_assert_eq!(
                output,
                format!("\x1b[{}m[{}] msg{}\n\x1b[0m", severity.ansi_code(), severity.as_str(), suffix)
            );
        } else {
            prop_assert!(output.is_empty());
        }
    }
}
