//! crates/logging/src/logger.rs
//! Per-class logger handles: construction, predicates, and emission.

use std::io;
use std::sync::Arc;

use crate::context::LoggingContext;
use crate::level::Level;
use crate::record::LogRecord;
use crate::sink::LogSink;

/// Optional construction-time overrides applied to the target context.
///
/// Both fields follow last-writer-wins semantics: constructing a second
/// logger with a `sink` replaces whatever sink the first installed, and
/// sinks never stack.
#[derive(Clone, Default)]
pub struct LoggerOptions {
    /// Replacement for the context's sink.
    pub sink: Option<LogSink>,
    /// Replacement for the context's severity threshold.
    pub level: Option<Level>,
}

/// A class-scoped handle for emitting diagnostics.
///
/// The handle owns nothing but its class name and a reference to the shared
/// [`LoggingContext`]; all gating state lives in the context. Each emission
/// is an independent gate-then-emit with no memory of prior calls.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use logging::{Level, Logger, LoggerOptions, LoggingContext};
///
/// let context = Arc::new(LoggingContext::new());
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink_seen = Arc::clone(&seen);
/// context.set_sink(Arc::new(move |formatted, _record| {
///     sink_seen.lock().unwrap().push(formatted.to_string());
///     Ok(())
/// }));
/// context.set_level(Level::Debug);
///
/// let logger = Logger::with_context("Connection", LoggerOptions::default(), context);
/// logger.debug("handshake started")?;
/// logger.error("handshake failed")?;
///
/// let lines = seen.lock().unwrap();
/// assert_eq!(lines.len(), 2);
/// assert!(lines[0].contains("DEBUG-Connection"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct Logger {
    class_name: String,
    context: Arc<LoggingContext>,
}

impl Logger {
    /// Creates a logger for `class_name` bound to the process-wide context.
    ///
    /// Construction registers the class name into the context's allow-list
    /// unless the explicit filter already names it.
    #[must_use]
    pub fn new(class_name: impl Into<String>) -> Self {
        Self::with_context(class_name, LoggerOptions::default(), LoggingContext::global())
    }

    /// Creates a logger bound to the process-wide context, applying
    /// `options` to it first.
    #[must_use]
    pub fn with_options(class_name: impl Into<String>, options: LoggerOptions) -> Self {
        Self::with_context(class_name, options, LoggingContext::global())
    }

    /// Creates a logger bound to an explicit context.
    #[must_use]
    pub fn with_context(
        class_name: impl Into<String>,
        options: LoggerOptions,
        context: Arc<LoggingContext>,
    ) -> Self {
        if let Some(sink) = options.sink {
            context.set_sink(sink);
        }
        if let Some(level) = options.level {
            context.set_level(level);
        }
        let class_name = class_name.into();
        context.register(&class_name);
        Self {
            class_name,
            context,
        }
    }

    /// Returns the class name this logger was constructed with.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Reports whether debug emissions currently pass the severity gate.
    #[must_use]
    pub fn is_debug(&self) -> bool {
        self.context.level().allows(Level::Debug)
    }

    /// Reports whether info emissions currently pass the severity gate.
    #[must_use]
    pub fn is_info(&self) -> bool {
        self.context.level().allows(Level::Info)
    }

    /// Reports whether warn emissions currently pass the severity gate.
    #[must_use]
    pub fn is_warn(&self) -> bool {
        self.context.level().allows(Level::Warn)
    }

    /// Reports whether error emissions currently pass the severity gate.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.context.level().allows(Level::Error)
    }

    /// Emits a debug diagnostic.
    pub fn debug(&self, message: &str) -> io::Result<()> {
        self.emit(Level::Debug, message, None)
    }

    /// Emits a debug diagnostic carrying a structured payload.
    pub fn debug_with(&self, message: &str, meta: serde_json::Value) -> io::Result<()> {
        self.emit(Level::Debug, message, Some(meta))
    }

    /// Emits an info diagnostic.
    pub fn info(&self, message: &str) -> io::Result<()> {
        self.emit(Level::Info, message, None)
    }

    /// Emits an info diagnostic carrying a structured payload.
    pub fn info_with(&self, message: &str, meta: serde_json::Value) -> io::Result<()> {
        self.emit(Level::Info, message, Some(meta))
    }

    /// Emits a warn diagnostic.
    pub fn warn(&self, message: &str) -> io::Result<()> {
        self.emit(Level::Warn, message, None)
    }

    /// Emits a warn diagnostic carrying a structured payload.
    pub fn warn_with(&self, message: &str, meta: serde_json::Value) -> io::Result<()> {
        self.emit(Level::Warn, message, Some(meta))
    }

    /// Emits an error diagnostic.
    pub fn error(&self, message: &str) -> io::Result<()> {
        self.emit(Level::Error, message, None)
    }

    /// Emits an error diagnostic carrying a structured payload.
    pub fn error_with(&self, message: &str, meta: serde_json::Value) -> io::Result<()> {
        self.emit(Level::Error, message, Some(meta))
    }

    /// Gate-then-emit. A gate failure is a silent success; a sink failure
    /// propagates unchanged.
    fn emit(
        &self,
        severity: Level,
        message: &str,
        meta: Option<serde_json::Value>,
    ) -> io::Result<()> {
        let Some(sink) = self.context.sink_for(severity, &self.class_name) else {
            return Ok(());
        };
        let mut record = LogRecord::new(severity, self.class_name.as_str(), message);
        record.meta = meta;
        let formatted = record.formatted();
        sink(&formatted, &record)
    }
}
