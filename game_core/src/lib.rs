pub mod access;
pub mod components;
pub mod config;
pub mod controls;
pub mod engine;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;
pub mod tuning;

pub use access::*;
pub use components::*;
pub use config::*;
pub use controls::*;
pub use engine::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use tuning::*;

use hecs::World;

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, player_id: u8, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(player_id, y), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
