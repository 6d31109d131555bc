//! crates/logging/src/tracing_bridge.rs
//! Bridge between the driver logging facade and the tracing ecosystem.
//!
//! Applications that standardise on `tracing` can point a context's sink at
//! [`tracing_sink`] so every passing driver diagnostic becomes a tracing
//! event, carrying the class name and pid as fields. [`init_tracing`] wires
//! the common case: an fmt subscriber filtered by `RUST_LOG` plus the bridge
//! sink on the given context.

use std::sync::Arc;

use crate::context::LoggingContext;
use crate::level::Level;
use crate::record::LogRecord;
use crate::sink::LogSink;

/// Returns a sink that forwards each record as a `tracing` event.
///
/// Severities map one-to-one onto tracing levels; the record's class name and
/// pid travel as event fields, and the `meta` payload (when present) is
/// rendered as a field too. The sink itself never fails.
#[must_use]
pub fn tracing_sink() -> LogSink {
    Arc::new(|_formatted, record| {
        forward(record);
        Ok(())
    })
}

fn forward(record: &LogRecord) {
    let meta = record
        .meta
        .as_ref()
        .map_or_else(String::new, ToString::to_string);
    match record.severity {
        Level::Error => tracing::error!(
            target: "driver::logging",
            class = %record.class_name,
            pid = record.pid,
            meta = %meta,
            "{}",
            record.message
        ),
        Level::Warn => tracing::warn!(
            target: "driver::logging",
            class = %record.class_name,
            pid = record.pid,
            meta = %meta,
            "{}",
            record.message
        ),
        Level::Info => tracing::info!(
            target: "driver::logging",
            class = %record.class_name,
            pid = record.pid,
            meta = %meta,
            "{}",
            record.message
        ),
        Level::Debug => tracing::debug!(
            target: "driver::logging",
            class = %record.class_name,
            pid = record.pid,
            meta = %meta,
            "{}",
            record.message
        ),
    }
}

/// Installs an fmt subscriber filtered by `RUST_LOG` and points `context` at
/// the bridge sink.
///
/// Installing a second global subscriber is a no-op, so the function is safe
/// to call from tests and embedders that may initialise tracing themselves.
pub fn init_tracing(context: &LoggingContext) {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .ok();
    context.set_sink(tracing_sink());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracing_sink_never_fails() {
        let sink = tracing_sink();
        let record = LogRecord::new(Level::Info, "Connection", "ready");
        sink(&record.formatted(), &record).unwrap();

        let with_meta = record.with_meta(serde_json::json!({ "attempt": 2 }));
        sink(&with_meta.formatted(), &with_meta).unwrap();
    }

    #[test]
    fn init_tracing_replaces_the_sink() {
        let context = LoggingContext::new();
        init_tracing(&context);
        // Emission through the bridge sink succeeds even with no subscriber
        // interested in the event.
        let record = LogRecord::new(Level::Error, "Server", "down");
        (context.sink())(&record.formatted(), &record).unwrap();
    }
}
