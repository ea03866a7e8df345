//! Port traits — the boundary between the controllers and the mechanism
//! that actually moves the device.
//!
//! ```text
//!   Adapter (relay / Modbus register / remote API) ──▶ Port trait ──▶ Controller
//! ```
//!
//! Driven adapters implement these traits; the controllers consume them as
//! boxed trait objects injected at construction. The controllers never
//! touch hardware or a wire protocol directly.
//!
//! Plain `FnMut` closures implement the mode and power write/read ports via
//! blanket impls, so a configuration layer can hand in bare functions.

use crate::error::Result;
use crate::events::DeviceEvent;
use crate::mode::Mode;

// ───────────────────────────────────────────────────────────────
// Mode ports (controller ↔ device operating mode)
// ───────────────────────────────────────────────────────────────

/// Write-side port: set the device's operating mode.
///
/// Implementations must attempt exactly one mode change per call and must
/// not partially apply. Any transport or hardware failure is returned as
/// [`Error::Backend`](crate::error::Error::Backend), untouched.
pub trait ModeSetPort {
    fn set_mode(&mut self, mode: Mode) -> Result<()>;
}

/// Read-side port: report the device's authoritative operating mode.
///
/// Adapters decoding raw register values must go through
/// [`Mode::from_raw`] so out-of-range values surface as a defined
/// `UnknownMode` error instead of undefined behavior downstream.
pub trait ModeGetPort {
    fn get_mode(&mut self) -> Result<Mode>;
}

impl<F> ModeSetPort for F
where
    F: FnMut(Mode) -> Result<()>,
{
    fn set_mode(&mut self, mode: Mode) -> Result<()> {
        self(mode)
    }
}

impl<F> ModeGetPort for F
where
    F: FnMut() -> Result<Mode>,
{
    fn get_mode(&mut self) -> Result<Mode> {
        self()
    }
}

// ───────────────────────────────────────────────────────────────
// Power limit port (controller ──▶ device maximum)
// ───────────────────────────────────────────────────────────────

/// Write-side port: apply a maximum-power limit in watts.
pub trait PowerSetPort {
    fn set_max_power(&mut self, watts: u32) -> Result<()>;
}

impl<F> PowerSetPort for F
where
    F: FnMut(u32) -> Result<()>,
{
    fn set_max_power(&mut self, watts: u32) -> Result<()> {
        self(watts)
    }
}

// ───────────────────────────────────────────────────────────────
// Reading ports (optional decorations on the device adapter)
// ───────────────────────────────────────────────────────────────

/// Instantaneous power draw in watts.
pub trait PowerReadPort {
    fn power_w(&mut self) -> Result<f64>;
}

/// Cumulative energy in kWh.
pub trait EnergyReadPort {
    fn energy_kwh(&mut self) -> Result<f64>;
}

/// A temperature in degrees Celsius. Used for both the current and the
/// limit temperature reading.
pub trait TempReadPort {
    fn temperature_c(&mut self) -> Result<f64>;
}

// ───────────────────────────────────────────────────────────────
// Event sink (device adapter ──▶ telemetry / logging)
// ───────────────────────────────────────────────────────────────

/// The device adapter emits structured [`DeviceEvent`]s through this
/// port. Adapters decide where they go (log, MQTT, UI).
pub trait EventSink {
    fn emit(&mut self, event: &DeviceEvent);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn closures_act_as_mode_ports() {
        let mut written = Vec::new();
        let mut set = |mode: Mode| -> Result<()> {
            written.push(mode);
            Ok(())
        };
        set.set_mode(Mode::Boost).unwrap();
        assert_eq!(written, vec![Mode::Boost]);

        let mut get = || -> Result<Mode> { Ok(Mode::Stop) };
        assert_eq!(get.get_mode().unwrap(), Mode::Stop);
    }

    #[test]
    fn closure_errors_pass_through() {
        let mut set =
            |_: Mode| -> Result<()> { Err(Error::backend(anyhow::anyhow!("relay stuck"))) };
        assert!(matches!(set.set_mode(Mode::Normal), Err(Error::Backend(_))));
    }
}
