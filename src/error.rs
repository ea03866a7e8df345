//! Unified error type for the sgready crate.
//!
//! A single `Error` enum that every operation funnels into, keeping the
//! consumer's error handling uniform. Failures from injected ports are
//! carried verbatim in [`Error::Backend`] — never wrapped further, never
//! retried here.

use core::fmt;

/// Every fallible operation in this crate returns this type.
#[derive(Debug)]
pub enum Error {
    /// The device is in Stop mode: intentionally forced off, no
    /// meaningful charge status available. A reported condition, not a
    /// retryable fault.
    StopMode,

    /// A raw mode register value outside the SG Ready enumeration.
    /// Contract violation of the reading adapter, surfaced explicitly.
    UnknownMode(i64),

    /// The requested capability or reading is not configured on this
    /// device instance.
    NotAvailable,

    /// Configuration is invalid or a mandatory dependency is missing.
    /// The message names the offending field.
    Config(&'static str),

    /// The injected mode/power backend failed (transport, hardware,
    /// remote API). Propagated unchanged from the port.
    Backend(anyhow::Error),
}

impl Error {
    /// Wrap an adapter failure for propagation through the port boundary.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StopMode => write!(f, "stop mode"),
            Self::UnknownMode(raw) => write!(f, "unknown mode: {raw}"),
            Self::NotAvailable => write!(f, "not available"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Backend(err) => write!(f, "backend: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Backend(err) => err.source(),
            _ => None,
        }
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
