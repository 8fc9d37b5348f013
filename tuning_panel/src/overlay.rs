use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::bridge::{BridgeRegistration, DebugBridge, DebugStateRecord};
use crate::display::format_fixed;

fn one_decimal(value: f32) -> String {
    format_fixed(f64::from(value), 1)
}

/// Non-tunable status overlay fed through a [`DebugBridge`].
///
/// Registered for as long as the overlay lives; dropping it clears the
/// bridge slot so a late publish never reaches a torn-down overlay.
pub struct DebugOverlay {
    state: Rc<RefCell<DebugStateRecord>>,
    revision: Rc<Cell<u64>>,
    _registration: BridgeRegistration<DebugStateRecord>,
}

impl DebugOverlay {
    pub fn mount(bridge: &DebugBridge<DebugStateRecord>) -> Self {
        let state = Rc::new(RefCell::new(DebugStateRecord::default()));
        let revision = Rc::new(Cell::new(0_u64));

        let sink = Rc::clone(&state);
        let counter = Rc::clone(&revision);
        let registration = bridge.register(move |record| {
            *sink.borrow_mut() = record;
            counter.set(counter.get() + 1);
        });

        Self {
            state,
            revision,
            _registration: registration,
        }
    }

    /// Last delivered record, zeroed until the first publish.
    pub fn state(&self) -> DebugStateRecord {
        *self.state.borrow()
    }

    /// Number of records delivered since mount.
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    pub fn lines(&self) -> Vec<String> {
        let s = self.state();
        vec![
            "Game Running".to_string(),
            format!(
                "Ball position: ({}, {})",
                one_decimal(s.ball_x),
                one_decimal(s.ball_y)
            ),
            format!(
                "Paddle 1 Y: {} | Paddle 2 Y: {}",
                one_decimal(s.paddle1_y),
                one_decimal(s.paddle2_y)
            ),
            format!(
                "Score: P1={} | P2={} | Phase={} | Len={}",
                s.p1_score, s.p2_score, s.game_phase, s.state_len
            ),
            "Controls: W/ArrowUp (up) | S/ArrowDown (down)".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_starts_zeroed() {
        let bridge = DebugBridge::new();
        let overlay = DebugOverlay::mount(&bridge);
        assert_eq!(overlay.state(), DebugStateRecord::default());
        assert_eq!(overlay.revision(), 0);
        assert_eq!(overlay.lines()[1], "Ball position: (0.0, 0.0)");
    }

    #[test]
    fn test_overlay_renders_published_record() {
        let bridge = DebugBridge::new();
        let overlay = DebugOverlay::mount(&bridge);
        bridge.publish(DebugStateRecord {
            ball_x: 412.25,
            ball_y: 300.0,
            paddle1_y: 120.0,
            paddle2_y: 290.5,
            p1_score: 2,
            p2_score: 5,
            game_phase: 0,
            state_len: 17,
        });

        assert_eq!(overlay.revision(), 1);
        let lines = overlay.lines();
        assert_eq!(lines[1], "Ball position: (412.3, 300.0)", "Ties round away from zero");
        assert_eq!(lines[2], "Paddle 1 Y: 120.0 | Paddle 2 Y: 290.5");
        assert_eq!(lines[3], "Score: P1=2 | P2=5 | Phase=0 | Len=17");
    }

    #[test]
    fn test_unmount_clears_registration() {
        let bridge = DebugBridge::new();
        let overlay = DebugOverlay::mount(&bridge);
        assert!(bridge.has_consumer());
        drop(overlay);
        assert!(!bridge.has_consumer());
        assert!(!bridge.publish(DebugStateRecord::default()));
    }
}
