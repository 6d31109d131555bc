#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! Class-scoped diagnostic logging for the driver. Each driver component
//! ("class": `Connection`, `Server`, `Topology`, …) holds a [`Logger`] that
//! gates messages twice — by severity against the configured [`Level`], then
//! by class visibility — and forwards passing messages to a single pluggable
//! [`LogSink`] as a formatted line plus a structured [`LogRecord`].
//!
//! # Design
//!
//! All mutable configuration (level, sink, visibility sets) lives in a
//! [`LoggingContext`] rather than hidden globals. A process-wide default
//! context backs [`Logger::new`] for convenience; tests and embedders that
//! need isolation construct their own context and use
//! [`Logger::with_context`]. Logger instances carry only their class name and
//! a context handle, so they are cheap to create and hold no per-call state.
//!
//! The facade is not a logging pipeline: no rotation, buffering, async
//! delivery, or fan-out. Whatever the sink does with a record is the sink's
//! business, including failing — sink errors propagate unchanged out of the
//! emission methods.
//!
//! # Invariants
//!
//! - Exactly one visibility set gates emissions at any time: the explicit
//!   filter installed via [`LoggingContext::filter`] when non-empty,
//!   otherwise the allow-list populated by logger construction.
//! - The configured level is always one of the four [`Level`] variants;
//!   string entry points validate before applying.
//! - A gated-out emission is a silent success with no side effects.
//!
//! # Errors
//!
//! Configuration misuse (an unknown level name) surfaces as
//! [`errors::DriverError::InvalidArgument`]. Emission returns whatever
//! [`std::io::Error`] the sink produced, untouched.
//!
//! # Examples
//!
//! Capture records with a custom sink on a private context:
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use logging::{Level, Logger, LoggerOptions, LoggingContext};
//!
//! let context = Arc::new(LoggingContext::new());
//! let lines = Arc::new(Mutex::new(Vec::new()));
//! let sink_lines = Arc::clone(&lines);
//! context.set_sink(Arc::new(move |formatted, _record| {
//!     sink_lines.lock().unwrap().push(formatted.to_string());
//!     Ok(())
//! }));
//! context.set_level(Level::Debug);
//!
//! let logger = Logger::with_context("Connection", LoggerOptions::default(), context);
//! logger.debug("handshake started")?;
//!
//! assert!(lines.lock().unwrap()[0].contains("[DEBUG-Connection:"));
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! Restrict output to particular classes:
//!
//! ```
//! use std::sync::Arc;
//! use logging::{Logger, LoggerOptions, LoggingContext};
//!
//! let context = Arc::new(LoggingContext::new());
//! context.filter("class", ["Connection"]);
//!
//! let connection =
//!     Logger::with_context("Connection", LoggerOptions::default(), Arc::clone(&context));
//! let cursor = Logger::with_context("Cursor", LoggerOptions::default(), context);
//!
//! connection.error("visible")?; // passes the class gate
//! cursor.error("suppressed")?; // silently dropped
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # See also
//!
//! - [`errors`] for the configuration error type.
//! - The `tracing` feature for routing records into the tracing ecosystem.

mod context;
mod level;
mod logger;
mod record;
mod sink;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use context::LoggingContext;
pub use level::Level;
pub use logger::{Logger, LoggerOptions};
pub use record::LogRecord;
pub use sink::{LogSink, stdout_sink, writer_sink};

#[cfg(feature = "tracing")]
pub use tracing_bridge::{init_tracing, tracing_sink};
