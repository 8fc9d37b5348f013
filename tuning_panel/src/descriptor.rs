//! Static declarations of the tunables a panel shows.

use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::config::Params;
use crate::error::TuningError;

/// Addressing token shared by the panel and the engine's parameter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamId(pub u32);

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ParamId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// One row of a tuning panel.
///
/// `min`, `max` and `step` are ignored for read-only descriptors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDescriptor {
    #[serde(alias = "paramId")]
    pub id: ParamId,
    pub label: String,
    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub max: f64,
    #[serde(default)]
    pub step: f64,
    /// Fractional digits shown; the panel's default applies when unset.
    #[serde(default)]
    pub decimals: Option<u8>,
    #[serde(default)]
    pub read_only: bool,
}

impl ParameterDescriptor {
    pub fn editable(id: u32, label: impl Into<String>, min: f64, max: f64, step: f64) -> Self {
        Self {
            id: ParamId(id),
            label: label.into(),
            min,
            max,
            step,
            decimals: None,
            read_only: false,
        }
    }

    pub fn read_only(id: u32, label: impl Into<String>) -> Self {
        Self {
            id: ParamId(id),
            label: label.into(),
            min: 0.0,
            max: 0.0,
            step: 0.0,
            decimals: None,
            read_only: true,
        }
    }

    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = Some(decimals);
        self
    }

    pub fn display_decimals(&self) -> u8 {
        self.decimals.unwrap_or(Params::DEFAULT_DECIMALS)
    }

    pub fn is_editable(&self) -> bool {
        !self.read_only
    }

    /// Clamp a finite edit into `[min, max]`. Returns `None` for NaN/inf.
    pub fn clamp_edit(&self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        Some(value.clamp(self.min, self.max))
    }

    fn validate(&self) -> Result<(), TuningError> {
        if self.label.trim().is_empty() {
            return Err(TuningError::EmptyLabel(self.id));
        }
        if self.read_only {
            return Ok(());
        }
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(TuningError::InvalidBounds {
                id: self.id,
                min: self.min,
                max: self.max,
            });
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(TuningError::InvalidStep {
                id: self.id,
                step: self.step,
            });
        }
        Ok(())
    }
}

/// Ordered, immutable sequence of descriptors.
///
/// Cloning shares the underlying storage, so clones compare equal under
/// [`DescriptorSet::same_set`]. A set built separately never does, even with
/// identical contents; the panel uses that identity to detect a swap.
#[derive(Debug, Clone)]
pub struct DescriptorSet {
    descriptors: Rc<[ParameterDescriptor]>,
}

impl DescriptorSet {
    pub fn new(descriptors: Vec<ParameterDescriptor>) -> Result<Self, TuningError> {
        if descriptors.is_empty() {
            return Err(TuningError::EmptySet);
        }

        let mut seen = BTreeSet::new();
        for descriptor in &descriptors {
            descriptor.validate()?;
            if !seen.insert(descriptor.id) {
                return Err(TuningError::DuplicateId(descriptor.id));
            }
        }

        Ok(Self {
            descriptors: descriptors.into(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParameterDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn get(&self, id: ParamId) -> Option<&ParameterDescriptor> {
        self.descriptors.iter().find(|d| d.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = ParamId> + '_ {
        self.descriptors.iter().map(|d| d.id)
    }

    /// True when at least one descriptor accepts edits.
    pub fn has_editable(&self) -> bool {
        self.descriptors.iter().any(ParameterDescriptor::is_editable)
    }

    pub fn same_set(&self, other: &DescriptorSet) -> bool {
        Rc::ptr_eq(&self.descriptors, &other.descriptors)
    }
}

impl<'a> IntoIterator for &'a DescriptorSet {
    type Item = &'a ParameterDescriptor;
    type IntoIter = std::slice::Iter<'a, ParameterDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle_speed() -> ParameterDescriptor {
        ParameterDescriptor::editable(2, "Paddle Speed", 100.0, 1000.0, 10.0).with_decimals(1)
    }

    #[test]
    fn test_default_decimals_is_two() {
        let d = ParameterDescriptor::read_only(0, "Ball X");
        assert_eq!(d.decimals, None);
        assert_eq!(d.display_decimals(), 2);
        assert!(!d.is_editable());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = DescriptorSet::new(vec![paddle_speed(), paddle_speed()]).unwrap_err();
        assert_eq!(err, TuningError::DuplicateId(ParamId(2)));
    }

    #[test]
    fn test_empty_set_rejected() {
        assert_eq!(DescriptorSet::new(vec![]).unwrap_err(), TuningError::EmptySet);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let d = ParameterDescriptor::editable(1, "Paddle Height", 200.0, 40.0, 1.0);
        assert!(matches!(
            DescriptorSet::new(vec![d]),
            Err(TuningError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_zero_step_rejected_only_when_editable() {
        let editable = ParameterDescriptor::editable(1, "Paddle Height", 40.0, 200.0, 0.0);
        assert!(matches!(
            DescriptorSet::new(vec![editable]),
            Err(TuningError::InvalidStep { .. })
        ));

        // bounds and step are ignored for read-only rows
        let probe = ParameterDescriptor::read_only(1, "Ball Y");
        assert!(DescriptorSet::new(vec![probe]).is_ok());
    }

    #[test]
    fn test_has_editable() {
        let probes = DescriptorSet::new(vec![
            ParameterDescriptor::read_only(0, "Ball X"),
            ParameterDescriptor::read_only(1, "Ball Y"),
        ])
        .unwrap();
        assert!(!probes.has_editable());

        let mixed = DescriptorSet::new(vec![
            ParameterDescriptor::read_only(0, "Ball X"),
            paddle_speed(),
        ])
        .unwrap();
        assert!(mixed.has_editable());
    }

    #[test]
    fn test_identity_survives_clone_but_not_rebuild() {
        let a = DescriptorSet::new(vec![paddle_speed()]).unwrap();
        let b = a.clone();
        let c = DescriptorSet::new(vec![paddle_speed()]).unwrap();
        assert!(a.same_set(&b));
        assert!(!a.same_set(&c));
    }

    #[test]
    fn test_clamp_edit() {
        let d = paddle_speed();
        assert_eq!(d.clamp_edit(550.0), Some(550.0));
        assert_eq!(d.clamp_edit(5000.0), Some(1000.0));
        assert_eq!(d.clamp_edit(-1.0), Some(100.0));
        assert_eq!(d.clamp_edit(f64::NAN), None);
        assert_eq!(d.clamp_edit(f64::INFINITY), None);
    }

    #[test]
    fn test_deserialize_from_host_json() {
        let json = r#"[
            {"label": "Ball X", "paramId": 0, "decimals": 1, "readOnly": true},
            {"label": "Paddle Width", "id": 1, "min": 5, "max": 40, "step": 1}
        ]"#;
        let descriptors: Vec<ParameterDescriptor> = serde_json::from_str(json).unwrap();
        assert_eq!(descriptors[0].id, ParamId(0));
        assert!(descriptors[0].read_only);
        assert_eq!(descriptors[0].decimals, Some(1));
        assert_eq!(descriptors[1].decimals, None);
        assert!(DescriptorSet::new(descriptors).is_ok());
    }
}
