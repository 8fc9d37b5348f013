use hecs::World;
use rand::Rng;
use tracing::debug;

use crate::params::Params;
use crate::systems::serve::serve_ball;
use crate::{
    Ball, Config, Events, GameMap, GamePhase, GameRng, Paddle, PaddleIntent, Player, Score,
    ServeState,
};

/// Mutable match state touched by scoring and restarts
pub struct MatchState<'a> {
    pub score: &'a mut Score,
    pub serve: &'a mut ServeState,
    pub phase: &'a mut GamePhase,
}

/// Check if the ball reached a goal edge. The conceding side's opponent
/// scores; the ball is parked at center for the serve delay, or the match
/// ends at the winning score.
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    state: MatchState<'_>,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let radius = config.ball_radius;
    let mut conceded = None;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x - radius <= 0.0 {
            conceded = Some(Player::One);
        } else if ball.pos.x + radius >= map.width {
            conceded = Some(Player::Two);
        }
        if conceded.is_some() {
            ball.center(map.center(), map.width, 0.0);
        }
    }
    let Some(conceder) = conceded else {
        return;
    };

    let scorer = conceder.opponent();
    let points = state.score.award(scorer);
    events.scored = Some(scorer);

    if points >= config.win_score {
        *state.phase = GamePhase::GameOver { winner: scorer };
        state.serve.clear();
        events.game_over = true;
        debug!(?scorer, score = ?state.score, "match over");
    } else {
        let delay = rng.0.gen_range(Params::SERVE_DELAY_MIN..Params::SERVE_DELAY_MAX);
        state.serve.start_delay(delay, conceder);
        debug!(?scorer, score = ?state.score, delay, "point scored");
    }
}

/// Start a fresh match: scores zeroed, paddles centered, ball served to a
/// random side
pub fn restart_match(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    state: MatchState<'_>,
    rng: &mut GameRng,
) {
    *state.score = Score::new();
    *state.phase = GamePhase::Playing;
    state.serve.clear();

    let mid = map.center().y;
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &mut PaddleIntent)>() {
        paddle.y = mid;
        intent.dir = 0;
    }
    serve_ball(world, map, config, None, rng);
    debug!("match restarted");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    struct Fixture {
        world: World,
        config: Config,
        map: GameMap,
        score: Score,
        serve: ServeState,
        phase: GamePhase,
        events: Events,
        rng: GameRng,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                world: World::new(),
                config: Config::new(),
                map: GameMap::new(),
                score: Score::new(),
                serve: ServeState::new(),
                phase: GamePhase::Playing,
                events: Events::new(),
                rng: GameRng::new(12345), // Fixed seed for deterministic tests
            }
        }

        fn check(&mut self) {
            check_scoring(
                &mut self.world,
                &self.map,
                &self.config,
                MatchState {
                    score: &mut self.score,
                    serve: &mut self.serve,
                    phase: &mut self.phase,
                },
                &mut self.events,
                &mut self.rng,
            );
        }

        fn ball(&self) -> Ball {
            *self.world.query::<&Ball>().iter().next().unwrap().1
        }
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let mut f = Fixture::new();
        create_ball(&mut f.world, Vec2::new(5.0, 300.0), Vec2::new(-400.0, 0.0));

        f.check();

        assert_eq!(f.score, Score { left: 0, right: 1 }, "Right player should score");
        assert_eq!(f.events.scored, Some(Player::Two));
        assert_eq!(f.serve.conceded_by, Some(Player::One));
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let mut f = Fixture::new();
        create_ball(&mut f.world, Vec2::new(795.0, 300.0), Vec2::new(400.0, 0.0));

        f.check();

        assert_eq!(f.score, Score { left: 1, right: 0 }, "Left player should score");
        assert_eq!(f.events.scored, Some(Player::One));
    }

    #[test]
    fn test_ball_parked_for_serve_delay() {
        let mut f = Fixture::new();
        create_ball(&mut f.world, Vec2::new(5.0, 300.0), Vec2::new(-400.0, 0.0));

        f.check();

        let ball = f.ball();
        assert_eq!(ball.pos, f.map.center(), "Ball should reset to center");
        assert_eq!(ball.vel, Vec2::ZERO, "Ball waits for the serve");
        assert!(
            (Params::SERVE_DELAY_MIN..Params::SERVE_DELAY_MAX).contains(&f.serve.timer),
            "Serve delay {} out of range",
            f.serve.timer
        );
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let mut f = Fixture::new();
        create_ball(&mut f.world, Vec2::new(400.0, 300.0), Vec2::new(400.0, 100.0));

        f.check();

        assert_eq!(f.score, Score::new(), "No score when ball in bounds");
        assert_eq!(f.events.scored, None, "No scoring events");
    }

    #[test]
    fn test_winning_point_ends_match() {
        let mut f = Fixture::new();
        f.score.left = 10;
        create_ball(&mut f.world, Vec2::new(795.0, 300.0), Vec2::new(400.0, 0.0));

        f.check();

        assert_eq!(f.phase, GamePhase::GameOver { winner: Player::One });
        assert!(f.events.game_over);
        assert!(!f.serve.is_waiting(), "No serve after the match ends");
    }

    #[test]
    fn test_restart_resets_match() {
        let mut f = Fixture::new();
        f.score = Score { left: 11, right: 4 };
        f.phase = GamePhase::GameOver { winner: Player::One };
        create_ball(&mut f.world, Vec2::new(400.0, 300.0), Vec2::ZERO);
        crate::create_paddle(&mut f.world, 0, 100.0);

        restart_match(
            &mut f.world,
            &f.map,
            &f.config,
            MatchState {
                score: &mut f.score,
                serve: &mut f.serve,
                phase: &mut f.phase,
            },
            &mut f.rng,
        );

        assert_eq!(f.score, Score::new());
        assert_eq!(f.phase, GamePhase::Playing);
        assert!(f.ball().speed() > 0.0, "Ball should be served on restart");
        let paddle_y = f.world.query::<&Paddle>().iter().next().unwrap().1.y;
        assert_eq!(paddle_y, 300.0);
    }
}
