//! Debug overlay fed by `publish_debug_state`

use tuning_panel::DebugOverlay;
use wasm_bindgen::prelude::*;

use crate::with_bridge;

/// Registered overlay; freeing the handle unregisters it
#[wasm_bindgen]
pub struct DebugOverlayHandle {
    overlay: DebugOverlay,
}

#[wasm_bindgen]
impl DebugOverlayHandle {
    /// Register as the bridge's consumer, replacing any previous overlay
    pub fn mount() -> DebugOverlayHandle {
        let overlay = with_bridge(DebugOverlay::mount);
        console_log!("Debug overlay mounted");
        Self { overlay }
    }

    /// Records delivered since mount; redraw when it changes
    pub fn revision(&self) -> u32 {
        self.overlay.revision() as u32
    }

    pub fn text(&self) -> String {
        self.overlay.lines().join("\n")
    }

    pub fn state_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.overlay.state()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
