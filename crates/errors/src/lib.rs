#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/errors/src/lib.rs
//!
//! # Overview
//!
//! Shared error types for the driver workspace. Configuration surfaces across
//! the driver signal misuse through [`DriverError`] rather than panicking, so
//! embedding applications can surface the failure to their own callers.
//!
//! # Design
//!
//! A single public enum keeps the error surface small: each variant carries a
//! human-readable message and nothing else. Operational failures (socket I/O,
//! sink writes) are *not* modelled here; those travel as [`std::io::Error`]
//! through the APIs that produce them.
//!
//! # Examples
//!
//! ```
//! use errors::DriverError;
//!
//! let err = DriverError::invalid_argument("trace is an illegal logging level");
//! assert_eq!(
//!     err.to_string(),
//!     "invalid argument: trace is an illegal logging level"
//! );
//! ```

use thiserror::Error;

/// Errors raised synchronously by driver configuration APIs.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum DriverError {
    /// A caller supplied a value outside the legal domain of an argument.
    ///
    /// Raised immediately at the call site and never retried; the message
    /// names the offending value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DriverError {
    /// Builds an [`DriverError::InvalidArgument`] carrying `message`.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Reports whether this error is an invalid-argument failure.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
