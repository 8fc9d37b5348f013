//! Capability interface the simulation exposes to the panel.

use std::rc::Rc;

use crate::descriptor::ParamId;

pub const TUNING_STATUS_APPLIED: u32 = 0;
pub const TUNING_STATUS_CLAMPED: u32 = 1;
pub const TUNING_STATUS_REJECTED: u32 = 2;
pub const TUNING_STATUS_UNKNOWN_PARAM: u32 = 3;

/// Engine answer to a `set` request.
///
/// Informational only: the panel never updates its display from a status,
/// the next snapshot is the authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamStatus {
    Applied,
    /// Accepted after the engine clamped the value to its own bounds.
    Clamped,
    Rejected,
    UnknownParam,
}

impl ParamStatus {
    pub const fn code(self) -> u32 {
        match self {
            ParamStatus::Applied => TUNING_STATUS_APPLIED,
            ParamStatus::Clamped => TUNING_STATUS_CLAMPED,
            ParamStatus::Rejected => TUNING_STATUS_REJECTED,
            ParamStatus::UnknownParam => TUNING_STATUS_UNKNOWN_PARAM,
        }
    }

    pub const fn from_code(code: u32) -> Self {
        match code {
            TUNING_STATUS_APPLIED => ParamStatus::Applied,
            TUNING_STATUS_CLAMPED => ParamStatus::Clamped,
            TUNING_STATUS_REJECTED => ParamStatus::Rejected,
            _ => ParamStatus::UnknownParam,
        }
    }

    pub fn is_accepted(self) -> bool {
        matches!(self, ParamStatus::Applied | ParamStatus::Clamped)
    }
}

/// get / set / reset, addressed by descriptor id.
///
/// Ids always come from the panel's own descriptor set. What an engine does
/// with an id it does not know is its own business; returning NaN from `get`
/// and `UnknownParam` from `set` is the convention.
pub trait ParamAccess {
    /// Current value. Must be side-effect free; it is polled continuously.
    fn get(&self, id: ParamId) -> f64;

    /// Ask the engine to adopt `value`. Callers only pass finite values
    /// already clamped to the descriptor's range.
    fn set(&self, id: ParamId, value: f64) -> ParamStatus;

    /// Restore every parameter to its built-in default.
    fn reset(&self);

    /// Optional diagnostic shown in the panel header.
    fn schema_version(&self) -> Option<u32> {
        None
    }
}

impl<A: ParamAccess + ?Sized> ParamAccess for &A {
    fn get(&self, id: ParamId) -> f64 {
        (**self).get(id)
    }

    fn set(&self, id: ParamId, value: f64) -> ParamStatus {
        (**self).set(id, value)
    }

    fn reset(&self) {
        (**self).reset()
    }

    fn schema_version(&self) -> Option<u32> {
        (**self).schema_version()
    }
}

impl<A: ParamAccess + ?Sized> ParamAccess for Rc<A> {
    fn get(&self, id: ParamId) -> f64 {
        (**self).get(id)
    }

    fn set(&self, id: ParamId, value: f64) -> ParamStatus {
        (**self).set(id, value)
    }

    fn reset(&self) {
        (**self).reset()
    }

    fn schema_version(&self) -> Option<u32> {
        (**self).schema_version()
    }
}

impl<A: ParamAccess + ?Sized> ParamAccess for Box<A> {
    fn get(&self, id: ParamId) -> f64 {
        (**self).get(id)
    }

    fn set(&self, id: ParamId, value: f64) -> ParamStatus {
        (**self).set(id, value)
    }

    fn reset(&self) {
        (**self).reset()
    }

    fn schema_version(&self) -> Option<u32> {
        (**self).schema_version()
    }
}

/// Access built from three plain callbacks, the shape a host shell hands over
/// when it only has the engine's exported functions.
pub struct CallbackAccess<G, S, R> {
    get: G,
    set: S,
    reset: R,
    schema_version: Option<u32>,
}

impl<G, S, R> CallbackAccess<G, S, R>
where
    G: Fn(u32) -> f64,
    S: Fn(u32, f64) -> u32,
    R: Fn(),
{
    pub fn new(get: G, set: S, reset: R) -> Self {
        Self {
            get,
            set,
            reset,
            schema_version: None,
        }
    }

    pub fn with_schema_version(mut self, version: u32) -> Self {
        self.schema_version = Some(version);
        self
    }
}

impl<G, S, R> ParamAccess for CallbackAccess<G, S, R>
where
    G: Fn(u32) -> f64,
    S: Fn(u32, f64) -> u32,
    R: Fn(),
{
    fn get(&self, id: ParamId) -> f64 {
        (self.get)(id.0)
    }

    fn set(&self, id: ParamId, value: f64) -> ParamStatus {
        ParamStatus::from_code((self.set)(id.0, value))
    }

    fn reset(&self) {
        (self.reset)()
    }

    fn schema_version(&self) -> Option<u32> {
        self.schema_version
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_status_codes_round_trip() {
        for status in [
            ParamStatus::Applied,
            ParamStatus::Clamped,
            ParamStatus::Rejected,
            ParamStatus::UnknownParam,
        ] {
            assert_eq!(ParamStatus::from_code(status.code()), status);
        }
        assert_eq!(ParamStatus::from_code(99), ParamStatus::UnknownParam);
    }

    #[test]
    fn test_callback_access_forwards_calls() {
        let stored = Cell::new(0.0_f64);
        let resets = Cell::new(0_u32);
        let access = CallbackAccess::new(
            |_id| stored.get(),
            |_id, value| {
                stored.set(value);
                TUNING_STATUS_APPLIED
            },
            || resets.set(resets.get() + 1),
        )
        .with_schema_version(1);

        assert_eq!(access.set(ParamId(2), 550.0), ParamStatus::Applied);
        assert_eq!(access.get(ParamId(2)), 550.0);
        access.reset();
        assert_eq!(resets.get(), 1);
        assert_eq!(access.schema_version(), Some(1));
    }
}
