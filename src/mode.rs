//! SG Ready operating mode.
//!
//! The SG Ready interface exposes three operating states relevant to
//! charge control. `Normal` and `Boost` are freely switchable; `Stop`
//! is an externally forced-off state that can only be observed, never
//! commanded through this crate (see [`Charger`](crate::api::Charger)).

use crate::error::Error;

/// The three-valued operating mode of an SG Ready device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i64)]
pub enum Mode {
    /// Default operation: the device runs its own program.
    Normal = 1,
    /// Accelerated/forced-on operation (recommended-on signal).
    Boost = 2,
    /// Device forced off; unavailable for charge-style control.
    Stop = 3,
}

impl Mode {
    /// Decode a raw register value.
    ///
    /// The wire encoding is `1 = Normal`, `2 = Boost`, `3 = Stop`.
    /// Any other value violates the SG Ready contract and yields
    /// [`Error::UnknownMode`] — adapters that read hardware registers
    /// must route through this instead of assuming the range.
    pub fn from_raw(raw: i64) -> Result<Self, Error> {
        match raw {
            1 => Ok(Self::Normal),
            2 => Ok(Self::Boost),
            3 => Ok(Self::Stop),
            other => Err(Error::UnknownMode(other)),
        }
    }

    /// The raw register value for this mode.
    pub const fn as_raw(self) -> i64 {
        self as i64
    }
}

impl core::fmt::Display for Mode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Boost => write!(f, "boost"),
            Self::Stop => write!(f, "stop"),
        }
    }
}
