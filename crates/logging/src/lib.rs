#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is a small, thread-safe console logger. It prints leveled,
//! colored records to standard output, drops records below a process-wide
//! minimum [`Severity`], and can append the source location of each call.
//!
//! # Design
//!
//! - [`Logger`] combines an atomic [`LoggerConfig`] with a mutex-guarded
//!   [`ConsoleSink`](logging_sink::ConsoleSink). The severity check runs before
//!   the mutex is taken, so disabled levels never contend.
//! - [`global`] returns the process-wide `Logger<Stdout>`, created on first use
//!   with the default settings. The free functions ([`info`], [`set_minimum_level`],
//!   ...) and the `log_*!` macros go through it.
//! - Call sites are captured with `file!()`/`line!()` in the macros and with
//!   `#[track_caller]` in the functions.
//! - With the `tracing` feature, [`ConsoleLayer`] routes `tracing` events into
//!   the same logger.
//!
//! # Output
//!
//! Each emitted record is written as
//!
//! ```text
//! ESC[<color>m[<LABEL>] <message>[ at <file>:<line>]\nESC[0m
//! ```
//!
//! | Severity | Label | Color |
//! |---|---|---|
//! | Trace | `TRACE` | `90` |
//! | Debug | `DEBUG` | `36` |
//! | Info | `INFO` | `37` |
//! | Warn | `WARN` | `33` |
//! | Error | `ERROR` | `31` |
//! | Fatal | `FATAL` | `41;97` |
//!
//! # Errors
//!
//! Logging never fails from the caller's point of view. Write errors, including
//! a closed pipe, are discarded. Logging at [`Severity::Fatal`] does not
//! terminate the process.
//!
//! # Examples
//!
//! ```
//! use logging::{Severity, log_info, log_warn};
//!
//! logging::set_minimum_level(Severity::Debug);
//! logging::set_include_location(true);
//!
//! log_info!("listening on port {}", 8080);
//! log_warn!("cache miss ratio {:.1}%", 12.5);
//! logging::debug("plain message, caller location captured");
//! ```

mod config;
mod global;
mod logger;
mod macros;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{LoggerConfig, LoggerSettings};
pub use global::{
    configure, debug, enabled, error, fatal, global, include_location, info, log, log_fmt,
    minimum_level, set_include_location, set_minimum_level, settings, trace, warn,
};
pub use logger::Logger;
pub use logging_sink::{ParseSeverityError, Severity};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{ConsoleLayer, init_tracing, init_tracing_with_filter, try_init_tracing};
