use crate::{Ball, Config, GameMap, Paddle, PaddleIntent, Time};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, time: &Time, map: &GameMap, config: &Config) {
    let half_height = config.paddle_height / 2.0;
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            let speed = config.paddle_speed_for(paddle.player_id);
            paddle.y += f32::from(intent.dir) * speed * time.dt;
            paddle.y = map.clamp_y(paddle.y, half_height);
        }
    }
}

/// Keep every paddle on the field after a paddle height change
pub fn clamp_paddles(world: &mut World, map: &GameMap, config: &Config) {
    let half_height = config.paddle_height / 2.0;
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = map.clamp_y(paddle.y, half_height);
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * time.dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Paddle};

    #[test]
    fn test_paddle_moves_at_configured_speed() {
        let mut world = World::new();
        let config = Config::new();
        let map = GameMap::new();
        let paddle = create_paddle(&mut world, 0, 300.0);
        world.get::<&mut PaddleIntent>(paddle).unwrap().dir = 1;

        move_paddles(&mut world, &Time::new(0.1, 0.0), &map, &config);

        let y = world.get::<&Paddle>(paddle).unwrap().y;
        assert!((y - 330.0).abs() < 1e-3, "Paddle should move 30px, got {y}");
    }

    #[test]
    fn test_paddle_stops_at_field_edge() {
        let mut world = World::new();
        let config = Config::new();
        let map = GameMap::new();
        let paddle = create_paddle(&mut world, 0, 40.0);
        world.get::<&mut PaddleIntent>(paddle).unwrap().dir = -1;

        move_paddles(&mut world, &Time::new(1.0, 0.0), &map, &config);

        let y = world.get::<&Paddle>(paddle).unwrap().y;
        assert_eq!(y, config.paddle_height / 2.0);
    }

    #[test]
    fn test_taller_paddle_is_reclamped() {
        let mut world = World::new();
        let map = GameMap::new();
        let paddle = create_paddle(&mut world, 1, 580.0);
        let config = Config {
            paddle_height: 200.0,
            ..Config::default()
        };

        clamp_paddles(&mut world, &map, &config);
        assert_eq!(world.get::<&Paddle>(paddle).unwrap().y, 500.0);
    }
}
