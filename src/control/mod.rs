//! Device controllers — pure translation logic, zero I/O.
//!
//! All interaction with the mechanism happens through the port traits in
//! [`crate::ports`], keeping this layer fully testable without hardware.

pub mod mode;
pub mod power;

pub use mode::{ModeController, ModeSource};
pub use power::PowerController;
