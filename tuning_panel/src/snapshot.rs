use std::collections::BTreeMap;

use crate::access::ParamAccess;
use crate::descriptor::{DescriptorSet, ParamId};

/// Values of every descriptor, read back-to-back within one poll.
///
/// Never patched; the next poll replaces it wholesale. `generation` changes
/// with every capture, so consumers compare it to decide whether to redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSnapshot {
    generation: u64,
    values: BTreeMap<ParamId, f64>,
}

impl ParameterSnapshot {
    pub fn capture<A: ParamAccess + ?Sized>(
        descriptors: &DescriptorSet,
        access: &A,
        generation: u64,
    ) -> Self {
        let values = descriptors
            .ids()
            .map(|id| (id, access.get(id)))
            .collect();
        Self { generation, values }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// `None` when the id was not part of the captured set.
    pub fn value(&self, id: ParamId) -> Option<f64> {
        self.values.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParamId, f64)> + '_ {
        self.values.iter().map(|(id, value)| (*id, *value))
    }
}
