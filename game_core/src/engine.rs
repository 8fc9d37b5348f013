//! Pong engine
//!
//! Owns the `hecs` world and every resource the systems need, runs fixed
//! micro-steps, and answers tuning and debug queries between frames.

use glam::Vec2;
use hecs::{Entity, World};
use tracing::{debug, warn};
use tuning_panel::{DebugStateRecord, ParamStatus};

use crate::components::{Ball, Paddle};
use crate::config::Config;
use crate::map::GameMap;
use crate::params::Params;
use crate::resources::*;
use crate::systems::*;
use crate::tuning::{BallProbe, TuningParam, TUNING_SCHEMA_VERSION};
use crate::{create_ball, create_paddle};

/// Flat state layout, one f32 per field
#[repr(usize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateField {
    BallX = 0,
    BallY = 1,
    BallVx = 2,
    BallVy = 3,
    Paddle1X = 4,
    Paddle1Y = 5,
    Paddle2X = 6,
    Paddle2Y = 7,
    PlayerOneScore = 8,
    PlayerTwoScore = 9,
    FieldWidth = 10,
    FieldHeight = 11,
    Phase = 12,
    Winner = 13,
    BallVisible = 14,
    PaddleWidth = 15,
    PaddleHeight = 16,
}

pub const STATE_LEN: usize = 17;

pub struct Engine {
    world: World,
    time: Time,
    map: GameMap,
    config: Config,
    score: Score,
    serve: ServeState,
    phase: GamePhase,
    events: Events,
    rng: GameRng,
    ball: Entity,
    paddles: [Entity; 2],
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(GameRng::DEFAULT_SEED)
    }
}

impl Engine {
    pub fn new(seed: u64) -> Self {
        Self::with_map(GameMap::new(), seed)
    }

    pub fn with_map(map: GameMap, seed: u64) -> Self {
        let mut world = World::new();
        let mid = map.center().y;
        let paddles = [
            create_paddle(&mut world, 0, mid),
            create_paddle(&mut world, 1, mid),
        ];
        let ball = create_ball(&mut world, map.center(), Vec2::ZERO);

        let mut engine = Self {
            world,
            time: Time::new(0.0, 0.0),
            map,
            config: Config::new(),
            score: Score::new(),
            serve: ServeState::new(),
            phase: GamePhase::Playing,
            events: Events::new(),
            rng: GameRng::new(seed),
            ball,
            paddles,
        };
        serve_ball(
            &mut engine.world,
            &engine.map,
            &engine.config,
            None,
            &mut engine.rng,
        );
        debug!(width = map.width, height = map.height, seed, "engine initialised");
        engine
    }

    /// Advance by `dt_seconds` (clamped to `MAX_DT`) with player one's input
    /// bits. Tuning changes made since the last call apply from here on.
    pub fn step(&mut self, dt_seconds: f32, input_bits: u32) {
        let dt = if dt_seconds.is_finite() {
            dt_seconds.clamp(0.0, Params::MAX_DT)
        } else {
            0.0
        };
        let input = InputState::new(input_bits);
        self.events.clear();

        if matches!(self.phase, GamePhase::GameOver { .. }) && input.action() {
            let state = MatchState {
                score: &mut self.score,
                serve: &mut self.serve,
                phase: &mut self.phase,
            };
            restart_match(&mut self.world, &self.map, &self.config, state, &mut self.rng);
        }

        // Fixed micro-steps for stable physics
        let mut remaining = dt;
        while remaining > 0.0 {
            let step_dt = remaining.min(Params::FIXED_DT);
            remaining -= step_dt;
            self.time = Time::new(step_dt, self.time.now + step_dt);

            if matches!(self.phase, GamePhase::GameOver { .. }) {
                continue;
            }

            ingest_inputs(&mut self.world, &input);
            drive_ai(&mut self.world, &self.config);
            move_paddles(&mut self.world, &self.time, &self.map, &self.config);

            if self.ball_visible() {
                move_ball(&mut self.world, &self.time);
                check_collisions(&mut self.world, &self.map, &self.config, &mut self.events);
                let state = MatchState {
                    score: &mut self.score,
                    serve: &mut self.serve,
                    phase: &mut self.phase,
                };
                check_scoring(
                    &mut self.world,
                    &self.map,
                    &self.config,
                    state,
                    &mut self.events,
                    &mut self.rng,
                );
            } else {
                tick_serve(
                    &mut self.world,
                    &self.map,
                    &self.config,
                    &mut self.serve,
                    &mut self.rng,
                    step_dt,
                );
            }
        }
    }

    pub fn get_tuning_param(&self, id: u32) -> Option<f32> {
        TuningParam::try_from(id)
            .ok()
            .map(|param| param.get(&self.config))
    }

    pub fn set_tuning_param(&mut self, id: u32, value: f32) -> ParamStatus {
        let param = match TuningParam::try_from(id) {
            Ok(param) => param,
            Err(err) => {
                warn!(%err, "tuning write ignored");
                return ParamStatus::UnknownParam;
            }
        };
        let status = param.apply(&mut self.config, value);
        if param == TuningParam::PaddleHeight && status.is_accepted() {
            clamp_paddles(&mut self.world, &self.map, &self.config);
        }
        debug!(param = param.label(), value, ?status, "tuning param set");
        status
    }

    pub fn reset_tuning_defaults(&mut self) {
        self.config = Config::default();
        clamp_paddles(&mut self.world, &self.map, &self.config);
        debug!("tuning defaults restored");
    }

    pub fn tuning_schema_version(&self) -> u32 {
        TUNING_SCHEMA_VERSION
    }

    /// Current value of a read-only ball probe
    pub fn probe(&self, id: u32) -> Option<f32> {
        let probe = BallProbe::try_from(id).ok()?;
        let ball = self.ball();
        Some(match probe {
            BallProbe::BallX => ball.pos.x,
            BallProbe::BallY => ball.pos.y,
            BallProbe::BallVx => ball.vel.x,
            BallProbe::BallVy => ball.vel.y,
        })
    }

    pub fn ball(&self) -> Ball {
        self.world
            .get::<&Ball>(self.ball)
            .map(|ball| *ball)
            .unwrap_or_else(|_| Ball::new(self.map.center(), Vec2::ZERO))
    }

    pub fn paddle_y(&self, player: Player) -> f32 {
        self.world
            .get::<&Paddle>(self.paddles[usize::from(player.id())])
            .map(|paddle| paddle.y)
            .unwrap_or(self.map.center().y)
    }

    pub fn ball_visible(&self) -> bool {
        self.phase == GamePhase::Playing && !self.serve.is_waiting()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn map(&self) -> &GameMap {
        &self.map
    }

    /// Events raised during the last `step`
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn state_len(&self) -> usize {
        STATE_LEN
    }

    /// Flat state for renderers
    pub fn state(&self) -> [f32; STATE_LEN] {
        use StateField::*;

        let ball = self.ball();
        let mut state = [0.0; STATE_LEN];
        state[BallX as usize] = ball.pos.x;
        state[BallY as usize] = ball.pos.y;
        state[BallVx as usize] = ball.vel.x;
        state[BallVy as usize] = ball.vel.y;
        state[Paddle1X as usize] = self.config.paddle_x(0);
        state[Paddle1Y as usize] = self.paddle_y(Player::One);
        state[Paddle2X as usize] = self.config.paddle_x(1);
        state[Paddle2Y as usize] = self.paddle_y(Player::Two);
        state[PlayerOneScore as usize] = self.score.left as f32;
        state[PlayerTwoScore as usize] = self.score.right as f32;
        state[FieldWidth as usize] = self.map.width;
        state[FieldHeight as usize] = self.map.height;
        state[Phase as usize] = self.phase.code() as f32;
        state[Winner as usize] = match self.phase.winner() {
            Some(Player::One) => 1.0,
            Some(Player::Two) => 2.0,
            None => 0.0,
        };
        state[BallVisible as usize] = if self.ball_visible() { 1.0 } else { 0.0 };
        state[PaddleWidth as usize] = self.config.paddle_width;
        state[PaddleHeight as usize] = self.config.paddle_height;
        state
    }

    /// Status record for the debug overlay
    pub fn debug_record(&self) -> DebugStateRecord {
        let ball = self.ball();
        DebugStateRecord {
            ball_x: ball.pos.x,
            ball_y: ball.pos.y,
            paddle1_y: self.paddle_y(Player::One),
            paddle2_y: self.paddle_y(Player::Two),
            p1_score: self.score.left,
            p2_score: self.score.right,
            game_phase: self.phase.code(),
            state_len: STATE_LEN as u32,
        }
    }
}
