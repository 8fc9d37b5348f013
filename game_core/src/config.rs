use crate::params::Params;

/// Live game configuration. The first five fields are tunable at runtime;
/// the rest are fixed for a match.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_speed: f32,
    pub ai_reaction_speed: f32,
    pub ball_radius: f32,
    pub ball_speed_max: f32,
    pub ball_speed_increase: f32,
    pub ai_dead_zone: f32,
    pub win_score: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_speed: Params::BALL_SPEED,
            ai_reaction_speed: Params::AI_REACTION_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for paddle based on player ID
    pub fn paddle_x(&self, player_id: u8) -> f32 {
        if player_id == 0 {
            Params::PADDLE1_X
        } else {
            Params::PADDLE2_X
        }
    }

    /// Paddle speed for a player; the opponent moves at its reaction speed
    pub fn paddle_speed_for(&self, player_id: u8) -> f32 {
        if player_id == 0 {
            self.paddle_speed
        } else {
            self.ai_reaction_speed
        }
    }

    /// Clamp paddle center Y so the paddle stays inside a field of `height`
    pub fn clamp_paddle_y(&self, y: f32, height: f32) -> f32 {
        crate::map::clamp_within(y, self.paddle_height / 2.0, height)
    }
}
