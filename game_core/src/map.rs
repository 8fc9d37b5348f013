use glam::Vec2;

use crate::params::Params;

/// Playing field. Y grows downward; both goals are the left and right edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl Default for GameMap {
    fn default() -> Self {
        Self::new()
    }
}

impl GameMap {
    pub fn new() -> Self {
        Self::with_size(Params::FIELD_WIDTH, Params::FIELD_HEIGHT)
    }

    pub fn with_size(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp a center Y so an object of `half_extent` stays on the field
    pub fn clamp_y(&self, y: f32, half_extent: f32) -> f32 {
        clamp_within(y, half_extent, self.height)
    }
}

/// Keep an object of `half_extent` inside `[0, extent]`. An object that
/// cannot fit is centered.
pub(crate) fn clamp_within(y: f32, half_extent: f32, extent: f32) -> f32 {
    if 2.0 * half_extent >= extent {
        return extent / 2.0;
    }
    y.clamp(half_extent, extent - half_extent)
}
