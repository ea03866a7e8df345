//! SG Ready device adapter — the composition root.
//!
//! [`SgReady`] bundles a [`ModeController`] and a [`PowerController`] with
//! zero-or-more optional reading sources into the single capability set a
//! charge-control consumer expects. It performs no logic of its own beyond
//! forwarding calls to whichever sub-controller or reading source
//! implements them, plus emitting telemetry events.
//!
//! ```text
//!  Charger  ──▶ ┌───────────────────────────┐ ──▶ EventSink
//!               │          SgReady           │
//!  MaxPower ──▶ │  ModeController · Power    │ ──▶ mode / power ports
//!               │  optional readings         │
//!               └───────────────────────────┘
//! ```

use crate::api::{ChargeStatus, Charger, MaxPower};
use crate::config::DeviceConfig;
use crate::control::{ModeController, PowerController};
use crate::error::{Error, Result};
use crate::events::DeviceEvent;
use crate::ports::{
    EnergyReadPort, EventSink, ModeGetPort, ModeSetPort, PowerReadPort, PowerSetPort,
    TempReadPort,
};

// ───────────────────────────────────────────────────────────────
// Optional readings
// ───────────────────────────────────────────────────────────────

/// Optional reading sources attached to a device. Each is present only if
/// the embedding configuration wired one in.
#[derive(Default)]
pub struct Readings {
    pub power: Option<Box<dyn PowerReadPort>>,
    pub energy: Option<Box<dyn EnergyReadPort>>,
    pub temperature: Option<Box<dyn TempReadPort>>,
    pub limit_temperature: Option<Box<dyn TempReadPort>>,
}

// ───────────────────────────────────────────────────────────────
// Builder
// ───────────────────────────────────────────────────────────────

/// Assembles an [`SgReady`] from injected ports. The mode setter is the
/// only mandatory dependency; `build` fails without it.
#[derive(Default)]
pub struct SgReadyBuilder {
    config: DeviceConfig,
    mode_set: Option<Box<dyn ModeSetPort>>,
    mode_get: Option<Box<dyn ModeGetPort>>,
    power_set: Option<Box<dyn PowerSetPort>>,
    readings: Readings,
    sink: Option<Box<dyn EventSink>>,
}

impl SgReadyBuilder {
    pub fn new(config: DeviceConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn mode_setter(mut self, port: Box<dyn ModeSetPort>) -> Self {
        self.mode_set = Some(port);
        self
    }

    pub fn mode_getter(mut self, port: Box<dyn ModeGetPort>) -> Self {
        self.mode_get = Some(port);
        self
    }

    pub fn power_setter(mut self, port: Box<dyn PowerSetPort>) -> Self {
        self.power_set = Some(port);
        self
    }

    pub fn readings(mut self, readings: Readings) -> Self {
        self.readings = readings;
        self
    }

    pub fn event_sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn build(self) -> Result<SgReady> {
        self.config.validate()?;
        let mode_set = self.mode_set.ok_or(Error::Config("mode setter is mandatory"))?;
        let mode = ModeController::new(mode_set, self.mode_get);
        let power = PowerController::new(self.power_set, &self.config);
        Ok(SgReady {
            mode,
            power,
            readings: self.readings,
            sink: self.sink,
        })
    }
}

// ───────────────────────────────────────────────────────────────
// Device adapter
// ───────────────────────────────────────────────────────────────

/// An SG Ready heating/charging device as seen by a charge-control
/// consumer.
pub struct SgReady {
    mode: ModeController,
    power: PowerController,
    readings: Readings,
    sink: Option<Box<dyn EventSink>>,
}

impl SgReady {
    pub fn builder(config: DeviceConfig) -> SgReadyBuilder {
        SgReadyBuilder::new(config)
    }

    /// Instantaneous power draw in watts, if a meter was configured.
    pub fn current_power(&mut self) -> Result<f64> {
        match &mut self.readings.power {
            Some(port) => port.power_w(),
            None => Err(Error::NotAvailable),
        }
    }

    /// Cumulative energy in kWh, if an energy meter was configured.
    pub fn total_energy(&mut self) -> Result<f64> {
        match &mut self.readings.energy {
            Some(port) => port.energy_kwh(),
            None => Err(Error::NotAvailable),
        }
    }

    /// Current temperature in °C, if a sensor was configured.
    pub fn temperature(&mut self) -> Result<f64> {
        match &mut self.readings.temperature {
            Some(port) => port.temperature_c(),
            None => Err(Error::NotAvailable),
        }
    }

    /// Configured limit temperature in °C, if available.
    pub fn limit_temperature(&mut self) -> Result<f64> {
        match &mut self.readings.limit_temperature {
            Some(port) => port.temperature_c(),
            None => Err(Error::NotAvailable),
        }
    }

    /// Whether this device accepts a power limit.
    pub fn has_power_limit(&self) -> bool {
        self.power.is_available()
    }

    fn emit(&mut self, event: DeviceEvent) {
        if let Some(sink) = &mut self.sink {
            sink.emit(&event);
        }
    }
}

impl Charger for SgReady {
    fn status(&mut self) -> Result<ChargeStatus> {
        self.mode.status()
    }

    fn enabled(&mut self) -> Result<bool> {
        self.mode.enabled()
    }

    fn enable(&mut self, enable: bool) -> Result<()> {
        let from = self.mode.cached_mode();
        if let Err(err) = self.mode.enable(enable) {
            self.emit(DeviceEvent::EnableFailed(enable));
            return Err(err);
        }
        let to = self.mode.cached_mode();
        if from != to {
            log::info!("mode changed: {from} -> {to}");
            self.emit(DeviceEvent::ModeChanged { from, to });
        }
        Ok(())
    }
}

impl MaxPower for SgReady {
    fn set_max_power(&mut self, watts: u32) -> Result<()> {
        self.power.set_max_power(watts)?;
        self.emit(DeviceEvent::PowerLimitChanged { watts });
        Ok(())
    }

    fn set_max_current(&mut self, amps: f64) -> Result<()> {
        self.power.set_max_current(amps)?;
        let watts = self.power.max_power();
        self.emit(DeviceEvent::PowerLimitChanged { watts });
        Ok(())
    }

    fn max_power(&self) -> u32 {
        self.power.max_power()
    }
}
