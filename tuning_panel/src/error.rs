use thiserror::Error;

use crate::descriptor::ParamId;

/// Errors raised while declaring a descriptor set.
///
/// Runtime paths (polling, edits, debug publishing) never fail; bad edits are
/// dropped and missing values render as a placeholder.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    #[error("descriptor set is empty")]
    EmptySet,
    #[error("duplicate parameter id {0}")]
    DuplicateId(ParamId),
    #[error("parameter {0} has an empty label")]
    EmptyLabel(ParamId),
    #[error("parameter {id} has invalid bounds [{min}, {max}]")]
    InvalidBounds { id: ParamId, min: f64, max: f64 },
    #[error("parameter {id} has non-positive step {step}")]
    InvalidStep { id: ParamId, step: f64 },
}
