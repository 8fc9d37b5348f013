//! Reconciliation loop
//!
//! Pulls every descriptor's value from the engine on a fixed period and
//! publishes the result as one snapshot. The loop is the only writer of the
//! published snapshot; the engine never notifies it.

use tracing::{debug, trace};

use crate::access::ParamAccess;
use crate::descriptor::DescriptorSet;
use crate::snapshot::ParameterSnapshot;
use crate::timer::PollTimer;

/// Loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// No timer armed, no snapshot held.
    Idle,
    /// Timer armed, last snapshot held.
    Polling,
}

/// Polling loop bound to one descriptor set.
#[derive(Debug)]
pub struct Reconciler {
    descriptors: DescriptorSet,
    timer: PollTimer,
    snapshot: Option<ParameterSnapshot>,
    next_generation: u64,
}

impl Reconciler {
    pub fn new(descriptors: DescriptorSet, poll_interval_ms: u32) -> Self {
        Self {
            descriptors,
            timer: PollTimer::new(poll_interval_ms),
            snapshot: None,
            next_generation: 1,
        }
    }

    pub fn state(&self) -> LoopState {
        if self.timer.is_armed() {
            LoopState::Polling
        } else {
            LoopState::Idle
        }
    }

    pub fn descriptors(&self) -> &DescriptorSet {
        &self.descriptors
    }

    pub fn snapshot(&self) -> Option<&ParameterSnapshot> {
        self.snapshot.as_ref()
    }

    /// Idle -> Polling. Arms the timer and publishes an initial snapshot so
    /// the first render does not wait a full period. No-op while polling.
    pub fn activate<A: ParamAccess + ?Sized>(&mut self, access: &A) {
        if self.state() == LoopState::Polling {
            return;
        }
        self.timer.arm();
        debug!(
            params = self.descriptors.len(),
            period_ms = self.timer.period_ms(),
            "reconciler armed"
        );
        self.publish(access);
    }

    /// Polling -> Idle. Cancels the timer and drops the held snapshot.
    /// Returns false when already idle.
    pub fn deactivate(&mut self) -> bool {
        let was_polling = self.timer.cancel();
        self.snapshot = None;
        if was_polling {
            debug!("reconciler cancelled");
        }
        was_polling
    }

    /// Tear down and rearm against a different descriptor set. Swapping in
    /// the set that is already bound changes nothing.
    pub fn rebind<A: ParamAccess + ?Sized>(&mut self, descriptors: DescriptorSet, access: &A) {
        if self.descriptors.same_set(&descriptors) {
            return;
        }
        let was_polling = self.deactivate();
        self.descriptors = descriptors;
        debug!(params = self.descriptors.len(), "reconciler rebound");
        if was_polling {
            self.activate(access);
        }
    }

    /// Advance the timer; on fire, read every descriptor and replace the
    /// published snapshot. Returns the new snapshot's generation.
    pub fn tick<A: ParamAccess + ?Sized>(&mut self, elapsed_ms: f64, access: &A) -> Option<u64> {
        if !self.timer.advance(elapsed_ms) {
            return None;
        }
        Some(self.publish(access))
    }

    fn publish<A: ParamAccess + ?Sized>(&mut self, access: &A) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;
        self.snapshot = Some(ParameterSnapshot::capture(
            &self.descriptors,
            access,
            generation,
        ));
        trace!(generation, "snapshot published");
        generation
    }
}
