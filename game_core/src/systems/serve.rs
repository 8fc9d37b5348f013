use hecs::World;
use rand::Rng;

use crate::{Ball, Config, GameMap, GameRng, Player, ServeState};

/// Put the ball in play heading toward `toward`, or a random side.
/// The ball starts on the opposite half so the receiver has time to react.
pub fn serve_ball(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    toward: Option<Player>,
    rng: &mut GameRng,
) {
    let side = match toward {
        Some(player) => player.side(),
        None if rng.0.gen_bool(0.5) => 1.0,
        None => -1.0,
    };
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.center(map.center(), map.width, -side);
        ball.launch(side, config.ball_speed, rng);
    }
}

/// Count down the post-point delay and serve toward the player who conceded
pub fn tick_serve(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    serve: &mut ServeState,
    rng: &mut GameRng,
    dt: f32,
) {
    if serve.update(dt) {
        let toward = serve.conceded_by.take();
        serve_ball(world, map, config, toward, rng);
        tracing::trace!(?toward, "ball served");
    }
}
