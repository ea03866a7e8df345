//! The charge-control vocabulary this crate speaks to its consumers.
//!
//! [`ChargeStatus`] follows the IEC 61851 letter convention charge-control
//! stacks use across device kinds: `A` disconnected, `B` connected but not
//! consuming, `C` actively consuming. A heating device on SG Ready only
//! ever reports `B` or `C` (or an error for Stop mode); `Disconnected` is
//! part of the shared vocabulary for pluggable loads.

use crate::error::Result;

/// Coarse connection/activity status of a charge-controllable device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChargeStatus {
    /// No device present (status A). Not produced by SG Ready devices.
    Disconnected,
    /// Device present but not actively consuming (status B).
    Connected,
    /// Device actively consuming (status C).
    Charging,
}

impl ChargeStatus {
    /// Whether this status means the device is drawing power.
    pub const fn is_charging(self) -> bool {
        matches!(self, Self::Charging)
    }
}

impl core::fmt::Display for ChargeStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Disconnected => write!(f, "A"),
            Self::Connected => write!(f, "B"),
            Self::Charging => write!(f, "C"),
        }
    }
}

/// The capability contract a charge-control consumer drives.
///
/// Note the asymmetry: `enable` can only move the device between Normal
/// and Boost. Stop mode is an external safety/forced-off state — it is
/// observable through `status` but deliberately unreachable through this
/// trait.
pub trait Charger {
    /// Current charge status of the device.
    fn status(&mut self) -> Result<ChargeStatus>;

    /// Whether charging is currently enabled (Boost mode).
    ///
    /// When mode resolution fails, this returns `Err` — never a boolean
    /// of unclear provenance alongside an error.
    fn enabled(&mut self) -> Result<bool>;

    /// Switch charging on (Boost) or off (Normal).
    fn enable(&mut self, enable: bool) -> Result<()>;
}

/// The power-limiting capability of devices with a configurable maximum.
pub trait MaxPower {
    /// Set the maximum power the device may draw, in watts.
    fn set_max_power(&mut self, watts: u32) -> Result<()>;

    /// Set the limit as a per-phase current in amps; converted to watts
    /// using the configured phase count and nominal voltage.
    fn set_max_current(&mut self, amps: f64) -> Result<()>;

    /// The last successfully applied power limit, in watts.
    fn max_power(&self) -> u32;
}
