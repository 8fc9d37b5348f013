//! Live tuning bridge between a running simulation and an observer panel.
//!
//! The simulation exposes named parameters through [`ParamAccess`]. A
//! [`TuningPanel`] polls them on a fixed period into a [`ParameterSnapshot`],
//! renders one row per [`ParameterDescriptor`], and forwards edits back.
//! A [`DebugBridge`] carries ad-hoc status records to a [`DebugOverlay`].
//!
//! Everything is single-threaded: the host's event loop drives the panel's
//! timer by reporting elapsed time, and nothing here blocks.

pub mod access;
pub mod bridge;
pub mod config;
pub mod descriptor;
pub mod display;
pub mod error;
pub mod overlay;
pub mod panel;
pub mod reconcile;
pub mod snapshot;
pub mod timer;

pub use access::*;
pub use bridge::{BridgeRegistration, DebugBridge, DebugStateRecord};
pub use config::{PanelConfig, Params};
pub use descriptor::{DescriptorSet, ParamId, ParameterDescriptor};
pub use display::{format_fixed, format_value};
pub use error::TuningError;
pub use overlay::DebugOverlay;
pub use panel::{EditOutcome, EditRejection, Row, RowControl, SliderHandle, TuningPanel};
pub use reconcile::{LoopState, Reconciler};
pub use snapshot::ParameterSnapshot;
pub use timer::PollTimer;
