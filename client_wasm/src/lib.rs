//! Browser host for the Pong engine and its tuning panel
//!
//! The page owns the frame loop: it calls `engine_step` each animation frame,
//! reports the frame time to any mounted `TuningPanelHandle`, and optionally
//! pushes debug records to a `DebugOverlayHandle`.
//! Note: only compiled for the wasm32 target

#![cfg(target_arch = "wasm32")]

macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
}

macro_rules! console_error {
    ($($t:tt)*) => (web_sys::console::error_1(&format!($($t)*).into()))
}

mod input;
mod overlay;
mod panel;

pub use input::InputTracker;
pub use overlay::DebugOverlayHandle;
pub use panel::TuningPanelHandle;

use std::cell::RefCell;

use game_core::{install, Engine, GameMap, SharedEngine};
use tuning_panel::{DebugBridge, ParamStatus};
use wasm_bindgen::prelude::*;

thread_local! {
    static ENGINE: RefCell<Option<SharedEngine>> = const { RefCell::new(None) };
    static BRIDGE: DebugBridge = DebugBridge::new();
}

pub(crate) fn with_shared_engine<T>(f: impl FnOnce(&SharedEngine) -> T) -> Option<T> {
    ENGINE.with(|slot| slot.borrow().as_ref().map(f))
}

pub(crate) fn with_bridge<T>(f: impl FnOnce(&DebugBridge) -> T) -> T {
    BRIDGE.with(f)
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Create (or replace) the engine on a `width` x `height` field. Mounted
/// panels keep working against the replacement.
#[wasm_bindgen]
pub fn engine_init(width: f32, height: f32, seed: u32) {
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        console_error!("engine_init: invalid field size {}x{}", width, height);
        return;
    }
    let engine = Engine::with_map(GameMap::with_size(width, height), u64::from(seed));
    ENGINE.with(|slot| install(&mut slot.borrow_mut(), engine));
    console_log!("Engine initialized: {}x{}", width, height);
}

#[wasm_bindgen]
pub fn engine_step(dt_seconds: f32, input_bits: u32) {
    with_shared_engine(|engine| engine.borrow_mut().step(dt_seconds, input_bits));
}

/// Flat game state, `game_state_len()` floats
#[wasm_bindgen]
pub fn game_state() -> Vec<f32> {
    with_shared_engine(|engine| engine.borrow().state().to_vec()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn game_state_len() -> usize {
    with_shared_engine(|engine| engine.borrow().state_len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn engine_set_tuning_param(param_id: u32, value: f32) -> u32 {
    with_shared_engine(|engine| engine.borrow_mut().set_tuning_param(param_id, value))
        .unwrap_or(ParamStatus::UnknownParam)
        .code()
}

/// NaN for unknown ids or before `engine_init`
#[wasm_bindgen]
pub fn engine_get_tuning_param(param_id: u32) -> f32 {
    with_shared_engine(|engine| engine.borrow().get_tuning_param(param_id))
        .flatten()
        .unwrap_or(f32::NAN)
}

#[wasm_bindgen]
pub fn engine_probe(probe_id: u32) -> f32 {
    with_shared_engine(|engine| engine.borrow().probe(probe_id))
        .flatten()
        .unwrap_or(f32::NAN)
}

#[wasm_bindgen]
pub fn engine_reset_tuning_defaults() {
    with_shared_engine(|engine| engine.borrow_mut().reset_tuning_defaults());
}

#[wasm_bindgen]
pub fn engine_tuning_schema_version() -> u32 {
    with_shared_engine(|engine| engine.borrow().tuning_schema_version()).unwrap_or(0)
}

/// Push the engine's debug record to the overlay, if one is mounted.
/// Returns false when nothing received it.
#[wasm_bindgen]
pub fn publish_debug_state() -> bool {
    let Some(record) = with_shared_engine(|engine| engine.borrow().debug_record()) else {
        return false;
    };
    with_bridge(|bridge| bridge.publish(record))
}
