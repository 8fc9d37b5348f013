//! Mountable tuning panel for the page

use std::rc::Rc;

use game_core::{BallProbeAccess, ControlMode, GameplayAccess, SharedEngine};
use tuning_panel::{EditOutcome, PanelConfig, ParamAccess, ParamId, TuningPanel};
use wasm_bindgen::prelude::*;

use crate::with_shared_engine;

type DynAccess = Box<dyn ParamAccess>;

fn parse_mode(mode: &str) -> Result<ControlMode, JsValue> {
    match mode {
        "gameplay" => Ok(ControlMode::Gameplay),
        "ball" | "ballProbe" => Ok(ControlMode::BallProbe),
        other => Err(JsValue::from_str(&format!("Unknown panel mode: {other}"))),
    }
}

fn access_for(mode: ControlMode, engine: SharedEngine) -> DynAccess {
    match mode {
        ControlMode::Gameplay => Box::new(GameplayAccess::new(engine)),
        ControlMode::BallProbe => Box::new(BallProbeAccess::new(engine)),
    }
}

/// Panel bound to the running engine. Freeing the handle unmounts it.
#[wasm_bindgen]
pub struct TuningPanelHandle {
    panel: TuningPanel<DynAccess>,
}

#[wasm_bindgen]
impl TuningPanelHandle {
    /// Mount in `mode` ("gameplay" or "ball"), with an optional JSON
    /// `PanelConfig`. Requires `engine_init` first.
    pub fn mount(mode: &str, config_json: Option<String>) -> Result<TuningPanelHandle, JsValue> {
        let mode = parse_mode(mode)?;
        let config = match config_json {
            Some(json) => serde_json::from_str::<PanelConfig>(&json)
                .map_err(|e| JsValue::from_str(&format!("Invalid panel config: {e}")))?,
            None => PanelConfig::new(),
        };
        let descriptors = mode
            .descriptors()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let engine = with_shared_engine(Rc::clone)
            .ok_or_else(|| JsValue::from_str("Engine not initialized"))?;

        let panel = TuningPanel::mount(config, descriptors, access_for(mode, engine));
        console_log!("Tuning panel mounted: {:?}", mode);
        Ok(Self { panel })
    }

    /// Swap to another table; the old one is no longer polled
    pub fn switch_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        let mode = parse_mode(mode)?;
        let descriptors = mode
            .descriptors()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let engine = with_shared_engine(Rc::clone)
            .ok_or_else(|| JsValue::from_str("Engine not initialized"))?;
        self.panel
            .switch_descriptors(descriptors, access_for(mode, engine));
        Ok(())
    }

    /// Report frame time in fractional milliseconds. Returns true when a new
    /// snapshot is ready.
    pub fn tick(&mut self, elapsed_ms: f64) -> bool {
        self.panel.tick(elapsed_ms).is_some()
    }

    pub fn title(&self) -> String {
        self.panel.title().to_string()
    }

    /// Title, with the schema version when the engine reports one
    pub fn header(&self) -> String {
        match self.panel.schema_version() {
            Some(version) => format!("{} (schema v{})", self.panel.title(), version),
            None => self.panel.title().to_string(),
        }
    }

    pub fn has_reset(&self) -> bool {
        self.panel.has_reset()
    }

    pub fn is_mounted(&self) -> bool {
        self.panel.is_mounted()
    }

    pub fn rows_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.panel.rows()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Forward raw slider text for `id`. Returns the engine status code, or
    /// undefined when the edit was dropped.
    pub fn submit(&self, id: u32, raw: &str) -> Option<u32> {
        let row = self
            .panel
            .rows()
            .into_iter()
            .find(|row| row.id == ParamId(id))?;
        let handle = row.control.slider()?;
        match self.panel.submit_raw(handle, raw) {
            EditOutcome::Sent(status) => Some(status.code()),
            EditOutcome::Dropped(_) => None,
        }
    }

    pub fn reset(&self) -> bool {
        self.panel.reset()
    }

    pub fn unmount(&mut self) -> bool {
        let was_mounted = self.panel.unmount();
        if was_mounted {
            console_log!("Tuning panel unmounted");
        }
        was_mounted
    }
}
