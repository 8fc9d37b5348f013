use crate::{Ball, Config, Events, GameMap, Paddle};
use glam::Vec2;
use hecs::World;

/// Circle vs paddle rectangle overlap
fn hits_paddle(ball_pos: Vec2, radius: f32, paddle_center: Vec2, half_size: Vec2) -> bool {
    let closest = ball_pos.clamp(paddle_center - half_size, paddle_center + half_size);
    (ball_pos - closest).length_squared() < radius * radius
}

/// Check ball collisions with paddles, then with the top and bottom walls
pub fn check_collisions(world: &mut World, map: &GameMap, config: &Config, events: &mut Events) {
    let paddles: Vec<(u8, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.player_id, p.y))
        .collect();

    let radius = config.ball_radius;
    let half_size = Vec2::new(config.paddle_width / 2.0, config.paddle_height / 2.0);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for &(player_id, paddle_y) in &paddles {
            let paddle_x = config.paddle_x(player_id);
            let center = Vec2::new(paddle_x, paddle_y);
            if !hits_paddle(ball.pos, radius, center, half_size) {
                continue;
            }

            // Only bounce when moving toward the paddle, so a ball inside
            // the paddle for several steps is not reflected back and forth
            let direction = if player_id == 0 { 1.0 } else { -1.0 };
            if ball.vel.x * direction > 0.0 {
                continue;
            }

            let speed = (ball.speed() * config.ball_speed_increase).min(config.ball_speed_max);
            let offset = ((ball.pos.y - paddle_y) / half_size.y).clamp(-1.0, 1.0);
            let angle = offset * crate::Params::MAX_BOUNCE_ANGLE;
            ball.vel = Vec2::new(direction * speed * angle.cos(), speed * angle.sin());

            let top = paddle_y - half_size.y;
            let bottom = paddle_y + half_size.y;
            if (top..=bottom).contains(&ball.pos.y) {
                ball.pos.x = paddle_x + direction * (half_size.x + radius);
            } else if ball.pos.y < top {
                ball.pos.y = top - radius;
            } else {
                ball.pos.y = bottom + radius;
            }
            events.ball_hit_paddle = true;
        }

        if ball.pos.y - radius <= 0.0 || ball.pos.y + radius >= map.height {
            ball.vel.y = -ball.vel.y;
            ball.pos.y = map.clamp_y(ball.pos.y, radius);
            events.ball_hit_wall = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};

    fn setup_world() -> (World, Config, GameMap, Events) {
        (World::new(), Config::new(), GameMap::new(), Events::new())
    }

    fn ball(world: &World) -> Ball {
        *world.query::<&Ball>().iter().next().unwrap().1
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, map, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 5.0), Vec2::new(200.0, -100.0));

        check_collisions(&mut world, &map, &config, &mut events);

        let ball = ball(&world);
        assert!(ball.vel.y > 0.0, "Ball should bounce down after hitting top wall");
        assert_eq!(ball.vel.x, 200.0, "X velocity should be unchanged");
        assert_eq!(ball.pos.y, config.ball_radius, "Ball should be pushed out of wall");
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, map, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 597.0), Vec2::new(200.0, 100.0));

        check_collisions(&mut world, &map, &config, &mut events);

        let ball = ball(&world);
        assert!(ball.vel.y < 0.0, "Ball should bounce up after hitting bottom wall");
        assert_eq!(ball.pos.y, map.height - config.ball_radius);
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, 0, 300.0);
        create_ball(&mut world, Vec2::new(30.0, 300.0), Vec2::new(-400.0, 0.0));

        check_collisions(&mut world, &map, &config, &mut events);

        let ball = ball(&world);
        assert!(ball.vel.x > 0.0, "Ball should bounce right after hitting left paddle");
        assert_eq!(ball.pos.x, 20.0 + 5.0 + 8.0, "Ball should be pushed out of paddle");
        assert!(events.ball_hit_paddle, "Should trigger ball_hit_paddle event");
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, 1, 300.0);
        create_ball(&mut world, Vec2::new(760.0, 300.0), Vec2::new(400.0, 0.0));

        check_collisions(&mut world, &map, &config, &mut events);

        let ball = ball(&world);
        assert!(ball.vel.x < 0.0, "Ball should bounce left after hitting right paddle");
        assert!(ball.pos.x < 770.0, "Ball should be pushed out of paddle");
    }

    #[test]
    fn test_ball_speed_increases_on_paddle_hit() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, 0, 300.0);
        create_ball(&mut world, Vec2::new(30.0, 300.0), Vec2::new(-400.0, 0.0));

        check_collisions(&mut world, &map, &config, &mut events);

        let speed = ball(&world).speed();
        assert!(
            (speed - 432.0).abs() < 0.01,
            "Ball speed should increase by {}x, got {}",
            config.ball_speed_increase,
            speed
        );
    }

    #[test]
    fn test_ball_speed_caps_at_max() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, 0, 300.0);
        create_ball(&mut world, Vec2::new(30.0, 300.0), Vec2::new(-880.0, 0.0));

        check_collisions(&mut world, &map, &config, &mut events);

        let speed = ball(&world).speed();
        assert!(
            (speed - config.ball_speed_max).abs() < 0.01,
            "Ball speed should cap at {}",
            config.ball_speed_max
        );
    }

    #[test]
    fn test_hit_offset_sets_bounce_angle() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, 0, 300.0);
        // hit the lower edge of the paddle face
        create_ball(&mut world, Vec2::new(30.0, 330.0), Vec2::new(-400.0, 0.0));

        check_collisions(&mut world, &map, &config, &mut events);

        let vel = ball(&world).vel;
        let angle = vel.y.atan2(vel.x);
        assert!(
            (angle - crate::Params::MAX_BOUNCE_ANGLE).abs() < 1e-3,
            "Edge hit should deflect at the max angle, got {angle}"
        );
    }

    #[test]
    fn test_ball_moving_away_is_not_reflected() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, 0, 300.0);
        create_ball(&mut world, Vec2::new(30.0, 300.0), Vec2::new(400.0, 0.0));

        check_collisions(&mut world, &map, &config, &mut events);

        assert_eq!(ball(&world).vel, Vec2::new(400.0, 0.0));
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_wider_paddle_widens_hitbox() {
        let (mut world, _config, map, mut events) = setup_world();
        let config = Config {
            paddle_width: 40.0,
            ..Config::default()
        };
        create_paddle(&mut world, 0, 300.0);
        create_ball(&mut world, Vec2::new(45.0, 300.0), Vec2::new(-400.0, 0.0));

        check_collisions(&mut world, &map, &config, &mut events);
        assert!(events.ball_hit_paddle, "A 40px paddle reaches a ball at x=45");
    }
}
