use std::fmt;
use std::io::{self, Write};

use crate::record::Record;

mod guard;

pub use guard::{ColorGuard, RESET};

/// Streaming sink that renders [`Record`] values as colored console lines.
///
/// Each call to [`write_record`](Self::write_record) produces exactly
///
/// ```text
/// ESC[<color>m[<LABEL>] <message>[ at <file>:<line>]\nESC[0m
/// ```
///
/// with the location clause present only when the record carries one. The
/// colored block is wrapped in a [`ColorGuard`], so the reset is written even
/// when an earlier write fails or the writer panics. The sink performs no
/// locking; callers that share it across threads serialize access themselves.
///
/// # Examples
///
/// ```
/// use logging_sink::{ConsoleSink, Record, Severity, SourceLocation};
///
/// let mut sink = ConsoleSink::new(Vec::<u8>::new());
/// sink.write_record(&Record::new(Severity::Info, "Let's go!"))?;
/// sink.write_record(
///     &Record::new(Severity::Error, "fail").with_location(SourceLocation::new("app", 42)),
/// )?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(
///     output,
///     "\x1b[37m[INFO] Let's go!\n\x1b[0m\x1b[31m[ERROR] fail at app:42\n\x1b[0m"
/// );
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct ConsoleSink<W> {
    writer: W,
}

impl<W> ConsoleSink<W> {
    /// Creates a sink writing into `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> ConsoleSink<W>
where
    W: Write,
{
    /// Renders one record.
    ///
    /// The first I/O error aborts the remaining content steps and is returned
    /// after the reset sequence has been attempted.
    pub fn write_record(&mut self, record: &Record<'_>) -> io::Result<()> {
        let mut colored = ColorGuard::new(&mut self.writer, record.color())?;
        write!(colored, "[{}] {}", record.label(), record.message())?;
        if let Some(location) = record.location() {
            write!(colored, " at {}:{}", location.file(), location.line())?;
        }
        colored.write_all(b"\n")
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W> fmt::Debug for ConsoleSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink")
            .field("writer", &self.writer)
            .finish()
    }
}
