//! Power-limiting controller.
//!
//! Sibling of the mode controller: applies a maximum-power limit through
//! an optional write port and converts per-phase current limits to watts
//! using the device's electrical configuration. Devices without a power
//! port report `NotAvailable` on use; only the mode setter is mandatory
//! for an SG Ready device.

use log::debug;

use crate::api::MaxPower;
use crate::config::DeviceConfig;
use crate::error::{Error, Result};
use crate::ports::PowerSetPort;

/// Applies and tracks the device's maximum-power limit.
pub struct PowerController {
    set: Option<Box<dyn PowerSetPort>>,
    phases: u8,
    voltage_v: f32,
    /// Last limit accepted by the device, in watts. 0 until the first
    /// successful write.
    max_power_w: u32,
}

impl PowerController {
    pub fn new(set: Option<Box<dyn PowerSetPort>>, config: &DeviceConfig) -> Self {
        Self {
            set,
            phases: config.phases,
            voltage_v: config.voltage_v,
            max_power_w: 0,
        }
    }

    /// Whether a power write port was configured.
    pub fn is_available(&self) -> bool {
        self.set.is_some()
    }
}

impl MaxPower for PowerController {
    fn set_max_power(&mut self, watts: u32) -> Result<()> {
        let port = self.set.as_mut().ok_or(Error::NotAvailable)?;
        debug!("max power write: {watts} W");
        port.set_max_power(watts)?;
        self.max_power_w = watts;
        Ok(())
    }

    fn set_max_current(&mut self, amps: f64) -> Result<()> {
        if !amps.is_finite() || amps < 0.0 {
            return Err(Error::Config("current must be non-negative"));
        }
        let watts = (f64::from(self.voltage_v) * f64::from(self.phases) * amps) as u32;
        self.set_max_power(watts)
    }

    fn max_power(&self) -> u32 {
        self.max_power_w
    }
}
