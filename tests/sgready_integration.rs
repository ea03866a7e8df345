//! Integration tests: SgReady adapter → controllers → mock ports.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use sgready::events::DeviceEvent;
use sgready::ports::{EnergyReadPort, EventSink, ModeGetPort, PowerReadPort, TempReadPort};
use sgready::{ChargeStatus, Charger, DeviceConfig, Error, MaxPower, Mode, Readings, SgReady};

// ── Mock implementations ──────────────────────────────────────

/// Simulated device backend shared between the mock ports and the test.
#[derive(Default)]
struct DeviceState {
    mode: Option<Mode>,
    max_power: Option<u32>,
    mode_writes: u32,
    fail_writes: bool,
}

type Shared = Rc<RefCell<DeviceState>>;

fn mode_setter(state: &Shared) -> Box<dyn sgready::ports::ModeSetPort> {
    let state = Rc::clone(state);
    Box::new(move |mode: Mode| -> sgready::Result<()> {
        let mut s = state.borrow_mut();
        s.mode_writes += 1;
        if s.fail_writes {
            return Err(Error::backend(anyhow::anyhow!("device offline")));
        }
        s.mode = Some(mode);
        Ok(())
    })
}

fn mode_getter(state: &Shared) -> Box<dyn ModeGetPort> {
    let state = Rc::clone(state);
    Box::new(move || -> sgready::Result<Mode> {
        state
            .borrow()
            .mode
            .ok_or_else(|| Error::backend(anyhow::anyhow!("register read failed")))
    })
}

fn power_setter(state: &Shared) -> Box<dyn sgready::ports::PowerSetPort> {
    let state = Rc::clone(state);
    Box::new(move |watts: u32| -> sgready::Result<()> {
        state.borrow_mut().max_power = Some(watts);
        Ok(())
    })
}

struct RecordingSink {
    events: Rc<RefCell<Vec<DeviceEvent>>>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &DeviceEvent) {
        self.events.borrow_mut().push(*event);
    }
}

struct FixedPower(f64);
impl PowerReadPort for FixedPower {
    fn power_w(&mut self) -> sgready::Result<f64> {
        Ok(self.0)
    }
}

struct FixedEnergy(f64);
impl EnergyReadPort for FixedEnergy {
    fn energy_kwh(&mut self) -> sgready::Result<f64> {
        Ok(self.0)
    }
}

struct FixedTemp(Rc<Cell<f64>>);
impl TempReadPort for FixedTemp {
    fn temperature_c(&mut self) -> sgready::Result<f64> {
        Ok(self.0.get())
    }
}

fn shared() -> Shared {
    Rc::new(RefCell::new(DeviceState {
        mode: Some(Mode::Normal),
        ..DeviceState::default()
    }))
}

// ── Full device round-trip ────────────────────────────────────

#[test]
fn enable_drives_device_and_status_follows() {
    let state = shared();
    let mut dev = SgReady::builder(DeviceConfig::default())
        .mode_setter(mode_setter(&state))
        .mode_getter(mode_getter(&state))
        .build()
        .unwrap();

    assert_eq!(dev.status().unwrap(), ChargeStatus::Connected);
    assert!(!dev.enabled().unwrap());

    dev.enable(true).unwrap();
    assert_eq!(state.borrow().mode, Some(Mode::Boost));
    assert_eq!(dev.status().unwrap(), ChargeStatus::Charging);
    assert!(dev.enabled().unwrap());

    dev.enable(false).unwrap();
    assert_eq!(state.borrow().mode, Some(Mode::Normal));
    assert_eq!(dev.status().unwrap(), ChargeStatus::Connected);
}

#[test]
fn externally_forced_stop_reported_as_error() {
    let state = shared();
    let mut dev = SgReady::builder(DeviceConfig::default())
        .mode_setter(mode_setter(&state))
        .mode_getter(mode_getter(&state))
        .build()
        .unwrap();

    // Utility forces the device off behind our back.
    state.borrow_mut().mode = Some(Mode::Stop);
    assert!(matches!(dev.status(), Err(Error::StopMode)));
    assert!(!dev.enabled().unwrap());
}

#[test]
fn failed_write_keeps_consumer_view_stable() {
    let state = shared();
    let mut dev = SgReady::builder(DeviceConfig::default())
        .mode_setter(mode_setter(&state))
        .build()
        .unwrap();

    state.borrow_mut().fail_writes = true;
    assert!(dev.enable(true).is_err());
    // No getter configured: the cache still says Normal.
    assert!(!dev.enabled().unwrap());
    assert_eq!(dev.status().unwrap(), ChargeStatus::Connected);
    assert_eq!(state.borrow().mode_writes, 1);
}

// ── Events ────────────────────────────────────────────────────

#[test]
fn mode_and_power_changes_emit_events() {
    let state = shared();
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut dev = SgReady::builder(DeviceConfig::default())
        .mode_setter(mode_setter(&state))
        .power_setter(power_setter(&state))
        .event_sink(Box::new(RecordingSink {
            events: Rc::clone(&events),
        }))
        .build()
        .unwrap();

    dev.enable(true).unwrap();
    dev.enable(true).unwrap(); // no-op, no event
    dev.set_max_power(4000).unwrap();

    assert_eq!(
        *events.borrow(),
        vec![
            DeviceEvent::ModeChanged {
                from: Mode::Normal,
                to: Mode::Boost,
            },
            DeviceEvent::PowerLimitChanged { watts: 4000 },
        ]
    );
}

#[test]
fn failed_enable_emits_failure_event() {
    let state = shared();
    state.borrow_mut().fail_writes = true;
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut dev = SgReady::builder(DeviceConfig::default())
        .mode_setter(mode_setter(&state))
        .event_sink(Box::new(RecordingSink {
            events: Rc::clone(&events),
        }))
        .build()
        .unwrap();

    assert!(dev.enable(true).is_err());
    assert_eq!(*events.borrow(), vec![DeviceEvent::EnableFailed(true)]);
}

// ── Power limiting ────────────────────────────────────────────

#[test]
fn three_phase_current_limit_converts_to_power() {
    let state = shared();
    let config = DeviceConfig {
        phases: 3,
        voltage_v: 230.0,
    };
    let mut dev = SgReady::builder(config)
        .mode_setter(mode_setter(&state))
        .power_setter(power_setter(&state))
        .build()
        .unwrap();

    assert!(dev.has_power_limit());
    dev.set_max_current(16.0).unwrap();
    assert_eq!(state.borrow().max_power, Some(11040));
    assert_eq!(dev.max_power(), 11040);
}

// ── Optional readings ─────────────────────────────────────────

#[test]
fn configured_readings_forward_values() {
    let state = shared();
    let temp = Rc::new(Cell::new(48.5));
    let mut dev = SgReady::builder(DeviceConfig::default())
        .mode_setter(mode_setter(&state))
        .readings(Readings {
            power: Some(Box::new(FixedPower(1850.0))),
            energy: Some(Box::new(FixedEnergy(321.7))),
            temperature: Some(Box::new(FixedTemp(Rc::clone(&temp)))),
            limit_temperature: None,
        })
        .build()
        .unwrap();

    assert!((dev.current_power().unwrap() - 1850.0).abs() < f64::EPSILON);
    assert!((dev.total_energy().unwrap() - 321.7).abs() < f64::EPSILON);
    assert!((dev.temperature().unwrap() - 48.5).abs() < f64::EPSILON);
    assert!(matches!(dev.limit_temperature(), Err(Error::NotAvailable)));

    temp.set(55.0);
    assert!((dev.temperature().unwrap() - 55.0).abs() < f64::EPSILON);
}
