use glam::Vec2;
use rand::Rng;

use crate::params::Params;
use crate::resources::GameRng;

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub player_id: u8, // 0 = left (human), 1 = right (AI)
    pub y: f32,        // center Y
}

impl Paddle {
    pub fn new(player_id: u8, y: f32) -> Self {
        Self { player_id, y }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Park the ball at the serve spot, stationary. `side` is -1 for the left
    /// half, 1 for the right half, 0 for dead center.
    pub fn center(&mut self, center: Vec2, width: f32, side: f32) {
        self.pos = Vec2::new(center.x + width * Params::SERVE_OFFSET * side, center.y);
        self.vel = Vec2::ZERO;
    }

    /// Send the ball toward `side` at `speed`, within a cone around the
    /// horizontal.
    pub fn launch(&mut self, side: f32, speed: f32, rng: &mut GameRng) {
        let spread = rng
            .0
            .gen_range(-Params::SERVE_HALF_CONE..Params::SERVE_HALF_CONE);
        let base = if side < 0.0 { std::f32::consts::PI } else { 0.0 };
        let angle = base + spread;
        self.vel = Vec2::new(angle.cos(), angle.sin()) * speed;
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
