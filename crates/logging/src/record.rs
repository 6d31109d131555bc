//! crates/logging/src/record.rs
//! The structured record handed to sinks alongside the formatted line.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::level::Level;

/// Structured diagnostic record emitted to the active sink.
///
/// The serde field names mirror the envelope consumed by existing driver
/// tooling: `type`, `message`, `className`, `pid`, `date`, and an optional
/// `meta` document that is omitted entirely when absent.
///
/// # Examples
///
/// ```
/// use logging::{Level, LogRecord};
///
/// let record = LogRecord::new(Level::Info, "Connection", "handshake complete");
/// let line = record.formatted();
/// assert!(line.starts_with("[INFO-Connection:"));
/// assert!(line.ends_with("handshake complete"));
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LogRecord {
    /// Severity the record was emitted at.
    #[serde(rename = "type")]
    pub severity: Level,
    /// The caller-supplied message, unformatted.
    pub message: String,
    /// Name of the driver class that emitted the record.
    #[serde(rename = "className")]
    pub class_name: String,
    /// Process id of the emitting process.
    pub pid: u32,
    /// Emission time in milliseconds since the Unix epoch.
    #[serde(rename = "date")]
    pub timestamp: u64,
    /// Optional structured payload supplied by the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

impl LogRecord {
    /// Builds a record stamped with the current process id and wall clock.
    #[must_use]
    pub fn new(severity: Level, class_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            class_name: class_name.into(),
            pid: std::process::id(),
            timestamp: unix_millis(),
            meta: None,
        }
    }

    /// Attaches a structured payload to the record.
    #[must_use]
    pub fn with_meta(mut self, meta: serde_json::Value) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Renders the canonical single-line form:
    /// `[<SEVERITY>-<class>:<pid>] <millis> <message>`.
    ///
    /// The `meta` payload is never part of the line; sinks that want it read
    /// the record directly.
    #[must_use]
    pub fn formatted(&self) -> String {
        format!(
            "[{}-{}:{}] {} {}",
            self.severity.label(),
            self.class_name,
            self.pid,
            self.timestamp,
            self.message
        )
    }
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as u64)
}
