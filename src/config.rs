//! Device configuration parameters.
//!
//! Electrical parameters the power controller needs for current/power
//! conversion. Plugin-descriptor decoding (which ports to build and how)
//! lives in the embedding application, not here.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Electrical configuration of a single SG Ready device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Number of connected phases (1 or 3 for typical heat pumps).
    pub phases: u8,
    /// Nominal per-phase voltage in volts.
    pub voltage_v: f32,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            phases: 1,
            voltage_v: 230.0,
        }
    }
}

impl DeviceConfig {
    /// Range-check the configuration. Invalid values are rejected, not
    /// silently clamped.
    pub fn validate(&self) -> Result<()> {
        if self.phases == 0 || self.phases > 3 {
            return Err(Error::Config("phases must be 1..=3"));
        }
        if !self.voltage_v.is_finite() || self.voltage_v <= 0.0 {
            return Err(Error::Config("voltage_v must be positive"));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration blob (provisioning).
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|_| Error::Config("malformed JSON"))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to JSON for read-back.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
