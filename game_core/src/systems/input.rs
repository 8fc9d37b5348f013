use hecs::World;

use crate::components::*;
use crate::config::Config;
use crate::resources::*;

/// Apply player one's input bits to the left paddle's intent
pub fn ingest_inputs(world: &mut World, input: &InputState) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.player_id == 0 {
            intent.dir = input.dir();
        }
    }
}

/// Steer the right paddle toward the ball, idling inside the dead zone
pub fn drive_ai(world: &mut World, config: &Config) {
    let ball_y = {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(_e, ball)| ball.pos.y)
    };
    let Some(ball_y) = ball_y else {
        return;
    };

    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.player_id != 1 {
            continue;
        }
        let diff = ball_y - paddle.y;
        intent.dir = if diff.abs() < config.ai_dead_zone {
            0
        } else if diff > 0.0 {
            1
        } else {
            -1
        };
    }
}
