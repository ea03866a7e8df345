//! SG Ready charge-control adapter library.
//!
//! Adapts controllable heating/charging devices that speak the SG Ready
//! mode interface (Normal / Boost / Stop) to the capability surface a
//! charge-control consumer expects: charge status, enabled flag, and
//! enable/disable. The physical mechanism (relay, Modbus register, remote
//! API) is injected through the port traits in [`ports`]; this crate
//! contains no I/O of its own.

#![deny(unused_must_use)]

pub mod api;
pub mod config;
pub mod control;
pub mod device;
pub mod events;
pub mod mode;
pub mod ports;

mod error;

pub use api::{ChargeStatus, Charger, MaxPower};
pub use config::DeviceConfig;
pub use device::{Readings, SgReady, SgReadyBuilder};
pub use error::{Error, Result};
pub use mode::Mode;
