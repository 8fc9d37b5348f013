//! Control surface
//!
//! Renders one row per descriptor from the latest snapshot and forwards edits
//! to the engine. The displayed value is driven only by snapshots: an edit is
//! confirmed when the next poll reads it back.

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::access::{ParamAccess, ParamStatus};
use crate::config::PanelConfig;
use crate::descriptor::{DescriptorSet, ParamId, ParameterDescriptor};
use crate::display::format_value;
use crate::reconcile::{LoopState, Reconciler};
use crate::snapshot::ParameterSnapshot;

/// Edit affordance of an editable row.
///
/// Only handed out by [`TuningPanel::rows`] for editable descriptors, so a
/// read-only parameter has no path to `set`.
#[derive(Debug, Clone, Serialize)]
pub struct SliderHandle {
    id: ParamId,
    min: f64,
    max: f64,
    step: f64,
    #[serde(skip)]
    origin: DescriptorSet,
}

impl SliderHandle {
    fn new(descriptor: &ParameterDescriptor, origin: &DescriptorSet) -> Self {
        Self {
            id: descriptor.id,
            min: descriptor.min,
            max: descriptor.max,
            step: descriptor.step,
            origin: origin.clone(),
        }
    }

    pub fn id(&self) -> ParamId {
        self.id
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RowControl {
    ReadOnly,
    Slider(SliderHandle),
}

impl RowControl {
    pub fn slider(&self) -> Option<&SliderHandle> {
        match self {
            RowControl::Slider(handle) => Some(handle),
            RowControl::ReadOnly => None,
        }
    }
}

/// One rendered parameter.
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub id: ParamId,
    pub label: String,
    /// Fixed-point value, or `N/A` before the first snapshot.
    pub display: String,
    pub value: Option<f64>,
    pub control: RowControl,
}

/// Why an edit never reached the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditRejection {
    NotFinite,
    /// Handle belongs to a descriptor set that has since been swapped out.
    StaleControl,
    Unmounted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// `set` was called once; the status is informational.
    Sent(ParamStatus),
    Dropped(EditRejection),
}

/// Mounted tuning panel.
///
/// Owns its reconciliation loop; unmounting, or dropping the panel, cancels
/// the timer before anything else is torn down.
pub struct TuningPanel<A: ParamAccess> {
    config: PanelConfig,
    access: A,
    reconciler: Reconciler,
    schema_version: Option<u32>,
}

impl<A: ParamAccess> TuningPanel<A> {
    pub fn mount(config: PanelConfig, descriptors: DescriptorSet, access: A) -> Self {
        let schema_version = if config.show_schema_version {
            access.schema_version()
        } else {
            None
        };
        let mut reconciler = Reconciler::new(descriptors, config.poll_interval_ms());
        reconciler.activate(&access);
        debug!(title = %config.title, ?schema_version, "tuning panel mounted");

        Self {
            config,
            access,
            reconciler,
            schema_version,
        }
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn schema_version(&self) -> Option<u32> {
        self.schema_version
    }

    pub fn state(&self) -> LoopState {
        self.reconciler.state()
    }

    pub fn is_mounted(&self) -> bool {
        self.state() == LoopState::Polling
    }

    pub fn descriptors(&self) -> &DescriptorSet {
        self.reconciler.descriptors()
    }

    pub fn snapshot(&self) -> Option<&ParameterSnapshot> {
        self.reconciler.snapshot()
    }

    /// Identity of the published snapshot; redraw when it changes.
    pub fn generation(&self) -> Option<u64> {
        self.snapshot().map(ParameterSnapshot::generation)
    }

    pub fn access(&self) -> &A {
        &self.access
    }

    /// Drive the poll timer. Returns the new generation when a snapshot was
    /// published.
    pub fn tick(&mut self, elapsed_ms: f64) -> Option<u64> {
        self.reconciler.tick(elapsed_ms, &self.access)
    }

    pub fn rows(&self) -> Vec<Row> {
        let descriptors = self.descriptors();
        let snapshot = self.snapshot();
        descriptors
            .iter()
            .map(|descriptor| {
                let value = snapshot.and_then(|s| s.value(descriptor.id));
                let decimals = descriptor
                    .decimals
                    .unwrap_or(self.config.default_decimals);
                let control = if descriptor.is_editable() {
                    RowControl::Slider(SliderHandle::new(descriptor, descriptors))
                } else {
                    RowControl::ReadOnly
                };
                Row {
                    id: descriptor.id,
                    label: descriptor.label.clone(),
                    display: format_value(value, decimals),
                    value,
                    control,
                }
            })
            .collect()
    }

    /// Forward one edit event. Non-finite input is dropped; finite input is
    /// clamped to the descriptor range and sent immediately, unbatched.
    pub fn submit(&self, handle: &SliderHandle, value: f64) -> EditOutcome {
        if !self.is_mounted() {
            return EditOutcome::Dropped(EditRejection::Unmounted);
        }
        if !handle.origin.same_set(self.descriptors()) {
            trace!(id = %handle.id, "edit from stale control dropped");
            return EditOutcome::Dropped(EditRejection::StaleControl);
        }
        let Some(value) = self
            .descriptors()
            .get(handle.id)
            .and_then(|descriptor| descriptor.clamp_edit(value))
        else {
            trace!(id = %handle.id, "non-finite edit dropped");
            return EditOutcome::Dropped(EditRejection::NotFinite);
        };

        let status = self.access.set(handle.id, value);
        match status {
            ParamStatus::Applied | ParamStatus::Clamped => {
                debug!(id = %handle.id, value, ?status, "parameter edit sent");
            }
            ParamStatus::Rejected | ParamStatus::UnknownParam => {
                warn!(id = %handle.id, value, ?status, "engine refused parameter edit");
            }
        }
        EditOutcome::Sent(status)
    }

    /// Like [`submit`](Self::submit) for raw text from an input field. Empty
    /// or unparseable text counts as NaN.
    pub fn submit_raw(&self, handle: &SliderHandle, raw: &str) -> EditOutcome {
        let parsed = raw.trim().parse::<f64>().unwrap_or(f64::NAN);
        self.submit(handle, parsed)
    }

    /// The reset affordance only exists when something is editable.
    pub fn has_reset(&self) -> bool {
        self.descriptors().has_editable()
    }

    /// Ask the engine to restore defaults. Always calls through, even if the
    /// engine already sits at defaults; the next poll shows the result.
    pub fn reset(&self) -> bool {
        if !self.is_mounted() || !self.has_reset() {
            return false;
        }
        self.access.reset();
        debug!(title = %self.config.title, "tuning defaults restored");
        true
    }

    /// Swap in another game's or mode's descriptors. A polling panel is torn
    /// down and rearmed so nothing keeps polling the old set; an unmounted
    /// panel stays unmounted.
    pub fn switch_descriptors(&mut self, descriptors: DescriptorSet, access: A) {
        let was_polling = self.reconciler.deactivate();
        self.access = access;
        if self.config.show_schema_version {
            self.schema_version = self.access.schema_version();
        }
        self.reconciler.rebind(descriptors, &self.access);
        if was_polling {
            self.reconciler.activate(&self.access);
        }
    }

    /// Cancel polling. Safe to call any number of times.
    pub fn unmount(&mut self) -> bool {
        let was_mounted = self.reconciler.deactivate();
        if was_mounted {
            debug!(title = %self.config.title, "tuning panel unmounted");
        }
        was_mounted
    }
}

impl<A: ParamAccess> Drop for TuningPanel<A> {
    fn drop(&mut self) {
        self.unmount();
    }
}
