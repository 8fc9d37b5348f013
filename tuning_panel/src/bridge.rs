//! Debug state bridge
//!
//! A single consumer slot the simulation's driving loop can push status
//! records into. The handle is passed explicitly to whoever publishes; there
//! is no process-wide state. Publishing with no live consumer is dropped
//! without buffering, so records published before a consumer registers are
//! never seen.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use serde::Serialize;
use tracing::{debug, trace};

/// Ad-hoc status of the running game, pushed whole.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DebugStateRecord {
    pub ball_x: f32,
    pub ball_y: f32,
    pub paddle1_y: f32,
    pub paddle2_y: f32,
    pub p1_score: u32,
    pub p2_score: u32,
    pub game_phase: u32,
    /// Length of the flat state buffer the engine exposes.
    #[serde(rename = "stateLen")]
    pub state_len: u32,
}

type Consumer<R> = Box<dyn FnMut(R)>;

struct Slot<R> {
    live_token: Option<u64>,
    consumer: Option<Consumer<R>>,
    next_token: u64,
}

/// At-most-one-subscriber, lossy broadcast.
pub struct DebugBridge<R = DebugStateRecord> {
    slot: Rc<RefCell<Slot<R>>>,
}

impl<R> Clone for DebugBridge<R> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<R> Default for DebugBridge<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for DebugBridge<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebugBridge")
            .field("has_consumer", &self.has_consumer())
            .finish()
    }
}

impl<R> DebugBridge<R> {
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(Slot {
                live_token: None,
                consumer: None,
                next_token: 1,
            })),
        }
    }

    /// Install `consumer`, replacing any previous one. The slot is cleared
    /// when the returned registration drops; a replaced registration's drop
    /// leaves the newer consumer alone.
    pub fn register(&self, consumer: impl FnMut(R) + 'static) -> BridgeRegistration<R> {
        let (token, replaced) = {
            let mut slot = self.slot.borrow_mut();
            let token = slot.next_token;
            slot.next_token += 1;
            if slot.live_token.is_some() {
                debug!(token, "debug consumer replaced");
            } else {
                debug!(token, "debug consumer registered");
            }
            slot.live_token = Some(token);
            (token, slot.consumer.replace(Box::new(consumer)))
        };
        // the old consumer may own a registration whose drop borrows the slot
        drop(replaced);

        BridgeRegistration {
            slot: Rc::downgrade(&self.slot),
            token,
        }
    }

    pub fn has_consumer(&self) -> bool {
        self.slot
            .try_borrow()
            .map(|slot| slot.live_token.is_some())
            .unwrap_or(true)
    }

    /// Deliver `record` to the live consumer. Returns false, and does nothing
    /// else, when there is none.
    pub fn publish(&self, record: R) -> bool {
        let (token, mut consumer) = {
            let Ok(mut slot) = self.slot.try_borrow_mut() else {
                return false;
            };
            match (slot.live_token, slot.consumer.take()) {
                (Some(token), Some(consumer)) => (token, consumer),
                _ => {
                    trace!("debug record dropped, no consumer");
                    return false;
                }
            }
        };

        // The slot is not borrowed while the consumer runs, so it may publish
        // (dropped: the consumer is out of the slot) or unregister.
        consumer(record);

        let mut slot = self.slot.borrow_mut();
        if slot.live_token == Some(token) && slot.consumer.is_none() {
            slot.consumer = Some(consumer);
        }
        true
    }
}

/// Keeps a consumer installed; dropping it clears the slot.
#[must_use = "dropping the registration unregisters the consumer"]
pub struct BridgeRegistration<R = DebugStateRecord> {
    slot: Weak<RefCell<Slot<R>>>,
    token: u64,
}

impl<R> BridgeRegistration<R> {
    pub fn is_live(&self) -> bool {
        self.slot
            .upgrade()
            .map(|slot| slot.borrow().live_token == Some(self.token))
            .unwrap_or(false)
    }
}

impl<R> fmt::Debug for BridgeRegistration<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeRegistration")
            .field("token", &self.token)
            .finish()
    }
}

impl<R> Drop for BridgeRegistration<R> {
    fn drop(&mut self) {
        let Some(slot) = self.slot.upgrade() else {
            return;
        };
        let Ok(mut slot) = slot.try_borrow_mut() else {
            return;
        };
        if slot.live_token == Some(self.token) {
            slot.live_token = None;
            let cleared = slot.consumer.take();
            drop(slot);
            drop(cleared);
            debug!(token = self.token, "debug consumer cleared");
        }
    }
}
