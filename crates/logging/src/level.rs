//! crates/logging/src/level.rs
//! Severity levels and the gating rules applied before emission.

use std::fmt;
use std::str::FromStr;

use errors::DriverError;

/// Severity of a diagnostic message, doubling as the configured threshold.
///
/// The four levels are ordered by verbosity: `Debug` admits everything,
/// `Error` is the quiet default. The exact admission rules live in
/// [`Level::allows`] and are not a plain total order; see the notes there.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Only error diagnostics.
    #[default]
    Error,
    /// Warning diagnostics.
    Warn,
    /// Informational diagnostics.
    Info,
    /// Full debug output.
    Debug,
}

impl Level {
    /// Returns the lowercase name used in configuration and the record
    /// envelope's `type` field.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Level;
    ///
    /// assert_eq!(Level::Warn.as_str(), "warn");
    /// assert_eq!(Level::Debug.as_str(), "debug");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Returns the uppercase label rendered in the formatted line prefix,
    /// e.g. the `DEBUG` in `[DEBUG-Connection:4242]`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }

    /// Reports whether a message of severity `severity` passes the gate when
    /// `self` is the configured level.
    ///
    /// The admission table is inherited from the classic driver logger and is
    /// deliberately not a clean ordering: `Warn` as the configured level
    /// admits warnings only, and does not admit errors. Callers depend on the
    /// table staying stable across releases.
    ///
    /// | configured | error | warn | info | debug |
    /// |------------|-------|------|------|-------|
    /// | `Error`    | yes   | no   | no   | no    |
    /// | `Warn`     | no    | yes  | no   | no    |
    /// | `Info`     | yes   | yes  | yes  | no    |
    /// | `Debug`    | yes   | yes  | yes  | yes   |
    #[must_use]
    pub const fn allows(self, severity: Self) -> bool {
        match severity {
            Self::Error => matches!(self, Self::Error | Self::Info | Self::Debug),
            Self::Warn => matches!(self, Self::Warn | Self::Info | Self::Debug),
            Self::Info => matches!(self, Self::Info | Self::Debug),
            Self::Debug => matches!(self, Self::Debug),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = DriverError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            other => Err(DriverError::invalid_argument(format!(
                "{other} is an illegal logging level"
            ))),
        }
    }
}
