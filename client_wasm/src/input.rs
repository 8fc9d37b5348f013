//! Keyboard input handling

use game_core::{INPUT_ACTION, INPUT_DOWN, INPUT_UP};
use wasm_bindgen::prelude::*;
use web_sys::KeyboardEvent;

/// Input bit for a key, 0 for keys the game ignores
pub fn key_bit(key: &str) -> u32 {
    match key {
        "ArrowUp" | "w" | "W" => INPUT_UP,
        "ArrowDown" | "s" | "S" => INPUT_DOWN,
        " " | "Enter" => INPUT_ACTION,
        _ => 0,
    }
}

/// Handle key down event
pub fn handle_key_down(key: &str, bits: u32) -> u32 {
    bits | key_bit(key)
}

/// Handle key up event
pub fn handle_key_up(key: &str, bits: u32) -> u32 {
    bits & !key_bit(key)
}

/// Held keys folded into the bits `engine_step` expects
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct InputTracker {
    bits: u32,
}

#[wasm_bindgen]
impl InputTracker {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, event: &KeyboardEvent) {
        self.bits = handle_key_down(&event.key(), self.bits);
    }

    pub fn key_up(&mut self, event: &KeyboardEvent) {
        self.bits = handle_key_up(&event.key(), self.bits);
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    pub fn clear(&mut self) {
        self.bits = 0;
    }
}
