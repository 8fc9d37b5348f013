//! Engine-side tuning table
//!
//! Maps stable numeric ids onto live [`Config`] fields. Values outside a
//! parameter's bounds are clamped and reported as such; non-finite values
//! are rejected without touching the config.

use thiserror::Error;
use tuning_panel::ParamStatus;

use crate::config::Config;
use crate::params::Params;

/// Bumped whenever ids or their meaning change
pub const TUNING_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown tuning parameter id {0}")]
pub struct UnknownParam(pub u32);

/// Tunable gameplay parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum TuningParam {
    PaddleWidth = 0,
    PaddleHeight = 1,
    PaddleSpeed = 2,
    BallSpeed = 3,
    AiReactionSpeed = 4,
}

impl TuningParam {
    pub const ALL: [TuningParam; 5] = [
        TuningParam::PaddleWidth,
        TuningParam::PaddleHeight,
        TuningParam::PaddleSpeed,
        TuningParam::BallSpeed,
        TuningParam::AiReactionSpeed,
    ];

    pub fn id(self) -> u32 {
        self as u32
    }

    pub fn label(self) -> &'static str {
        match self {
            TuningParam::PaddleWidth => "Paddle Width",
            TuningParam::PaddleHeight => "Paddle Height",
            TuningParam::PaddleSpeed => "Paddle Speed",
            TuningParam::BallSpeed => "Ball Speed",
            TuningParam::AiReactionSpeed => "AI Reaction Speed",
        }
    }

    /// Inclusive engine bounds
    pub fn bounds(self) -> (f32, f32) {
        match self {
            TuningParam::PaddleWidth => Params::PADDLE_WIDTH_RANGE,
            TuningParam::PaddleHeight => Params::PADDLE_HEIGHT_RANGE,
            TuningParam::PaddleSpeed => Params::PADDLE_SPEED_RANGE,
            TuningParam::BallSpeed => Params::BALL_SPEED_RANGE,
            TuningParam::AiReactionSpeed => Params::AI_REACTION_SPEED_RANGE,
        }
    }

    pub fn step(self) -> f32 {
        match self {
            TuningParam::PaddleWidth | TuningParam::PaddleHeight => 1.0,
            _ => 10.0,
        }
    }

    pub fn get(self, config: &Config) -> f32 {
        match self {
            TuningParam::PaddleWidth => config.paddle_width,
            TuningParam::PaddleHeight => config.paddle_height,
            TuningParam::PaddleSpeed => config.paddle_speed,
            TuningParam::BallSpeed => config.ball_speed,
            TuningParam::AiReactionSpeed => config.ai_reaction_speed,
        }
    }

    /// Write `value` into `config`, clamped to bounds
    pub fn apply(self, config: &mut Config, value: f32) -> ParamStatus {
        if !value.is_finite() {
            return ParamStatus::Rejected;
        }
        let (min, max) = self.bounds();
        let clamped = value.clamp(min, max);
        let slot = match self {
            TuningParam::PaddleWidth => &mut config.paddle_width,
            TuningParam::PaddleHeight => &mut config.paddle_height,
            TuningParam::PaddleSpeed => &mut config.paddle_speed,
            TuningParam::BallSpeed => &mut config.ball_speed,
            TuningParam::AiReactionSpeed => &mut config.ai_reaction_speed,
        };
        *slot = clamped;
        if clamped == value {
            ParamStatus::Applied
        } else {
            ParamStatus::Clamped
        }
    }
}

impl TryFrom<u32> for TuningParam {
    type Error = UnknownParam;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        TuningParam::ALL
            .into_iter()
            .find(|param| param.id() == id)
            .ok_or(UnknownParam(id))
    }
}

/// Read-only ball probes for the alternate debug mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum BallProbe {
    BallX = 0,
    BallY = 1,
    BallVx = 2,
    BallVy = 3,
}

impl BallProbe {
    pub const ALL: [BallProbe; 4] = [
        BallProbe::BallX,
        BallProbe::BallY,
        BallProbe::BallVx,
        BallProbe::BallVy,
    ];

    pub fn id(self) -> u32 {
        self as u32
    }

    pub fn label(self) -> &'static str {
        match self {
            BallProbe::BallX => "Ball X",
            BallProbe::BallY => "Ball Y",
            BallProbe::BallVx => "Ball Velocity X",
            BallProbe::BallVy => "Ball Velocity Y",
        }
    }
}

impl TryFrom<u32> for BallProbe {
    type Error = UnknownParam;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        BallProbe::ALL
            .into_iter()
            .find(|probe| probe.id() == id)
            .ok_or(UnknownParam(id))
    }
}
