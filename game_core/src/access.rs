//! Panel access adapters over a shared engine.
//!
//! The host's step loop and the panel both hold the engine; borrows never
//! overlap because everything runs on one thread between frames.

use std::cell::RefCell;
use std::rc::Rc;

use tuning_panel::{ParamAccess, ParamId, ParamStatus};

use crate::engine::Engine;
use crate::tuning::TUNING_SCHEMA_VERSION;

pub type SharedEngine = Rc<RefCell<Engine>>;

pub fn shared(engine: Engine) -> SharedEngine {
    Rc::new(RefCell::new(engine))
}

/// Put `engine` in the host's slot. An engine already there is overwritten in
/// place, so adapters bound to it keep following the live game.
pub fn install(slot: &mut Option<SharedEngine>, engine: Engine) {
    match slot {
        Some(existing) => *existing.borrow_mut() = engine,
        None => *slot = Some(shared(engine)),
    }
}

/// Gameplay tuning table
#[derive(Clone)]
pub struct GameplayAccess {
    engine: SharedEngine,
}

impl GameplayAccess {
    pub fn new(engine: SharedEngine) -> Self {
        Self { engine }
    }
}

impl ParamAccess for GameplayAccess {
    fn get(&self, id: ParamId) -> f64 {
        self.engine
            .borrow()
            .get_tuning_param(id.0)
            .map_or(f64::NAN, f64::from)
    }

    fn set(&self, id: ParamId, value: f64) -> ParamStatus {
        self.engine.borrow_mut().set_tuning_param(id.0, value as f32)
    }

    fn reset(&self) {
        self.engine.borrow_mut().reset_tuning_defaults();
    }

    fn schema_version(&self) -> Option<u32> {
        Some(self.engine.borrow().tuning_schema_version())
    }
}

/// Read-only ball probes
#[derive(Clone)]
pub struct BallProbeAccess {
    engine: SharedEngine,
}

impl BallProbeAccess {
    pub fn new(engine: SharedEngine) -> Self {
        Self { engine }
    }
}

impl ParamAccess for BallProbeAccess {
    fn get(&self, id: ParamId) -> f64 {
        self.engine.borrow().probe(id.0).map_or(f64::NAN, f64::from)
    }

    fn set(&self, _id: ParamId, _value: f64) -> ParamStatus {
        ParamStatus::Rejected
    }

    fn reset(&self) {}

    fn schema_version(&self) -> Option<u32> {
        Some(TUNING_SCHEMA_VERSION)
    }
}
