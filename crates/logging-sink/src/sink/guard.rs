use std::io::{self, Write};

/// Control sequence restoring the terminal's default rendition.
pub const RESET: &str = "\x1b[0m";

/// RAII guard that keeps a writer in a colored state.
///
/// [`ColorGuard::new`] emits `ESC[<code>m` and dropping the guard emits
/// [`RESET`]. The reset is written on every exit path: normal scope end, an
/// early return through `?`, and unwinding out of a panicking writer. Errors
/// from the reset write are ignored because `Drop` cannot report them. The guard
/// implements [`Deref`](std::ops::Deref) and [`DerefMut`](std::ops::DerefMut) so
/// the colored block is written through it directly.
///
/// # Examples
///
/// ```
/// use std::io::Write;
/// use logging_sink::ColorGuard;
///
/// let mut out: Vec<u8> = Vec::new();
/// {
///     let mut guard = ColorGuard::new(&mut out, "33")?;
///     guard.write_all(b"careful")?;
/// }
/// assert_eq!(out, b"\x1b[33mcareful\x1b[0m".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[must_use = "dropping the guard immediately emits the color reset"]
pub struct ColorGuard<'a, W: Write> {
    writer: &'a mut W,
}

impl<'a, W: Write> ColorGuard<'a, W> {
    /// Switches `writer` to the SGR parameters in `code`.
    ///
    /// The guard exists before the color sequence is written, so a failed write
    /// still emits the reset when the error is propagated.
    pub fn new(writer: &'a mut W, code: &str) -> io::Result<Self> {
        let guard = Self { writer };
        write!(guard.writer, "\x1b[{code}m")?;
        Ok(guard)
    }
}

impl<W: Write> Drop for ColorGuard<'_, W> {
    fn drop(&mut self) {
        let _ = self.writer.write_all(RESET.as_bytes());
    }
}

impl<W: Write> std::ops::Deref for ColorGuard<'_, W> {
    type Target = W;

    fn deref(&self) -> &Self::Target {
        self.writer
    }
}

impl<W: Write> std::ops::DerefMut for ColorGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.writer
    }
}
