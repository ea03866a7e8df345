//! Outbound device events.
//!
//! The [`SgReady`](crate::device::SgReady) adapter emits these through the
//! [`EventSink`](crate::ports::EventSink) port. Adapters on the other side
//! decide what to do with them — log to serial, publish over MQTT, update
//! a dashboard.

use crate::mode::Mode;

/// Structured events emitted by the device adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceEvent {
    /// A successful enable/disable moved the device to a new mode.
    ModeChanged { from: Mode, to: Mode },

    /// An enable/disable request failed at the write port.
    /// Carries the requested enable flag; the device's actual mode after
    /// the failure is unknown.
    EnableFailed(bool),

    /// A new maximum-power limit was applied, in watts.
    PowerLimitChanged { watts: u32 },
}
