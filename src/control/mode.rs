//! SG Ready mode controller.
//!
//! Translates the device's three-valued operating mode into the
//! charge-control vocabulary and drives Normal ↔ Boost transitions on
//! enable/disable requests. Stop mode is observed, never commanded.
//!
//! ```text
//!                 enable(true)
//!        ┌──────────────────────────▶
//!  Normal                              Boost
//!        ◀──────────────────────────┘
//!                 enable(false)
//!
//!  Stop: externally driven only; reported as an error from status().
//! ```

use log::{debug, warn};

use crate::api::{ChargeStatus, Charger};
use crate::error::{Error, Result};
use crate::mode::Mode;
use crate::ports::{ModeGetPort, ModeSetPort};

/// Where the controller learns the device's current mode.
///
/// Resolved once at construction; `Cached` means no external reader is
/// available and the last successfully written mode is ground truth.
pub enum ModeSource {
    /// Trust the controller's own last-written mode.
    Cached,
    /// Ask the device (or its remote API) on every query.
    External(Box<dyn ModeGetPort>),
}

/// Single authority for mode ↔ charge-status translation on one device.
///
/// All operations take `&mut self`; exclusive ownership serializes the
/// read-modify-write on the cached mode. Share an instance across threads
/// by wrapping it in a mutex.
pub struct ModeController {
    /// Last mode successfully written by this controller. Mutated only by
    /// a successful `enable`; never resynchronized from reads.
    mode: Mode,
    set: Box<dyn ModeSetPort>,
    source: ModeSource,
}

impl ModeController {
    /// Create a controller around a mandatory write port and an optional
    /// read port. Initial cached mode is `Normal`.
    pub fn new(set: Box<dyn ModeSetPort>, get: Option<Box<dyn ModeGetPort>>) -> Self {
        let source = match get {
            Some(port) => ModeSource::External(port),
            None => ModeSource::Cached,
        };
        Self {
            mode: Mode::Normal,
            set,
            source,
        }
    }

    /// The controller's local belief about the current mode (last
    /// successful write). Authoritative only without an external reader.
    pub fn cached_mode(&self) -> Mode {
        self.mode
    }

    fn resolve(&mut self) -> Result<Mode> {
        match &mut self.source {
            ModeSource::Cached => Ok(self.mode),
            ModeSource::External(port) => port.get_mode(),
        }
    }
}

impl Charger for ModeController {
    fn status(&mut self) -> Result<ChargeStatus> {
        match self.resolve()? {
            Mode::Stop => Err(Error::StopMode),
            Mode::Boost => Ok(ChargeStatus::Charging),
            Mode::Normal => Ok(ChargeStatus::Connected),
        }
    }

    fn enabled(&mut self) -> Result<bool> {
        Ok(self.resolve()? == Mode::Boost)
    }

    fn enable(&mut self, enable: bool) -> Result<()> {
        let target = if enable { Mode::Boost } else { Mode::Normal };
        debug!("mode write: {target}");
        if let Err(err) = self.set.set_mode(target) {
            warn!("mode write to {target} failed: {err}");
            return Err(err);
        }
        self.mode = target;
        Ok(())
    }
}
