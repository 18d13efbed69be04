#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` holds the rendering half of the console logger: the ordered
//! [`Severity`] scale with its fixed label and color table, the borrowed
//! [`Record`] handed to a sink, and [`ConsoleSink`], which turns one record into
//! one colored console line on any [`std::io::Write`] implementor.
//!
//! # Design
//!
//! Rendering is separated from policy. This crate never filters, locks or
//! swallows errors; the `logging` crate decides whether a record is emitted,
//! serializes concurrent callers and discards I/O failures. Keeping the sink
//! generic over the writer lets tests render into a `Vec<u8>` with exactly the
//! bytes a terminal would receive.
//!
//! # Invariants
//!
//! - Every rendered record starts with `ESC[<color>m` and ends with `ESC[0m`.
//! - The reset is emitted by [`ColorGuard`]'s `Drop`, so it is written even when
//!   a write inside the colored block fails or panics.
//! - Label and color come only from [`Severity::as_str`] and
//!   [`Severity::ansi_code`].
//!
//! # Errors
//!
//! [`ConsoleSink::write_record`] surfaces the first [`std::io::Error`] returned
//! by the writer. Parsing a severity name reports [`ParseSeverityError`].
//!
//! # Examples
//!
//! ```
//! use logging_sink::{ConsoleSink, Record, Severity};
//!
//! let mut sink = ConsoleSink::new(Vec::<u8>::new());
//! sink.write_record(&Record::new(Severity::Fatal, "out of memory"))?;
//! assert_eq!(sink.into_inner(), b"\x1b[41;97m[FATAL] out of memory\n\x1b[0m".to_vec());
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # See also
//!
//! - `logging` crate for the process-wide facade and the `log_*!` macros.

mod record;
mod severity;
mod sink;

pub use record::{Record, SourceLocation};
pub use severity::{ParseSeverityError, Severity};
pub use sink::{ColorGuard, ConsoleSink, RESET};
