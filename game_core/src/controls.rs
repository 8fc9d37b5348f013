//! Descriptor sets for the Pong tuning panel

use tuning_panel::{DescriptorSet, ParameterDescriptor, TuningError};

use crate::tuning::{BallProbe, TuningParam};

/// Which table the panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlMode {
    #[default]
    Gameplay,
    BallProbe,
}

impl ControlMode {
    pub fn descriptors(self) -> Result<DescriptorSet, TuningError> {
        match self {
            ControlMode::Gameplay => pong_controls(),
            ControlMode::BallProbe => ball_probe_controls(),
        }
    }
}

/// Editable gameplay parameters, bounds matching the engine's
pub fn pong_controls() -> Result<DescriptorSet, TuningError> {
    DescriptorSet::new(
        TuningParam::ALL
            .into_iter()
            .map(|param| {
                let (min, max) = param.bounds();
                ParameterDescriptor::editable(
                    param.id(),
                    param.label(),
                    f64::from(min),
                    f64::from(max),
                    f64::from(param.step()),
                )
                .with_decimals(1)
            })
            .collect(),
    )
}

/// Read-only ball probes
pub fn ball_probe_controls() -> Result<DescriptorSet, TuningError> {
    DescriptorSet::new(
        BallProbe::ALL
            .into_iter()
            .map(|probe| ParameterDescriptor::read_only(probe.id(), probe.label()).with_decimals(1))
            .collect(),
    )
}
