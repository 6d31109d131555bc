//! crates/logging/src/sink.rs
//! The pluggable output callback and the sinks shipped with the crate.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use crate::record::LogRecord;

/// Output callback invoked with each passing diagnostic.
///
/// The first argument is the pre-rendered line (see
/// [`LogRecord::formatted`]); the second is the structured record for sinks
/// that want field-level access. Failures surface as [`std::io::Error`] and
/// propagate unchanged to the emission call site; the facade never swallows
/// sink failures.
pub type LogSink = Arc<dyn Fn(&str, &LogRecord) -> io::Result<()> + Send + Sync>;

/// Returns the default sink: one newline-terminated line per record on
/// standard output.
#[must_use]
pub fn stdout_sink() -> LogSink {
    Arc::new(|formatted, _record| {
        let mut stdout = io::stdout().lock();
        stdout.write_all(formatted.as_bytes())?;
        stdout.write_all(b"\n")?;
        stdout.flush()
    })
}

/// Wraps any [`io::Write`] implementor as a sink.
///
/// Each record is written as a newline-terminated line. The writer lives
/// behind a mutex so the sink stays shareable across threads; a poisoned lock
/// is recovered rather than propagated, since a half-written log line cannot
/// corrupt anything the next line depends on.
///
/// # Examples
///
/// Collect formatted lines into an in-memory buffer:
///
/// ```
/// use std::io::Write;
/// use std::sync::{Arc, Mutex};
/// use logging::{writer_sink, Level, LogRecord};
///
/// let buffer = Arc::new(Mutex::new(Vec::new()));
/// let sink = writer_sink(SharedBuffer(Arc::clone(&buffer)));
///
/// let record = LogRecord::new(Level::Info, "Connection", "ready");
/// sink(&record.formatted(), &record)?;
///
/// let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
/// assert!(output.ends_with("ready\n"));
///
/// struct SharedBuffer(Arc<Mutex<Vec<u8>>>);
///
/// impl std::io::Write for SharedBuffer {
///     fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
///         self.0.lock().unwrap().write(buf)
///     }
///     fn flush(&mut self) -> std::io::Result<()> {
///         Ok(())
///     }
/// }
/// # Ok::<(), std::io::Error>(())
/// ```
#[must_use]
pub fn writer_sink<W>(writer: W) -> LogSink
where
    W: Write + Send + 'static,
{
    let writer = Mutex::new(writer);
    Arc::new(move |formatted, _record| {
        let mut guard = writer.lock().unwrap_or_else(PoisonError::into_inner);
        guard.write_all(formatted.as_bytes())?;
        guard.write_all(b"\n")
    })
}
