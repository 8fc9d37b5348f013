/// Fixed Pong constants, in field pixels and seconds
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE1_X: f32 = 20.0;
    pub const PADDLE2_X: f32 = 770.0;
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 60.0;
    pub const PADDLE_SPEED: f32 = 300.0;

    // Opponent
    pub const AI_REACTION_SPEED: f32 = 300.0;
    pub const AI_DEAD_ZONE: f32 = 10.0;

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED: f32 = 400.0; // serve speed
    pub const BALL_SPEED_MAX: f32 = 900.0;
    pub const BALL_SPEED_INCREASE: f32 = 1.08; // per paddle hit
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_3;
    pub const SERVE_HALF_CONE: f32 = std::f32::consts::FRAC_PI_4;
    pub const SERVE_OFFSET: f32 = 0.1; // fraction of field width toward the conceding side

    // Score
    pub const WIN_SCORE: u32 = 11;
    pub const SERVE_DELAY_MIN: f32 = 1.0;
    pub const SERVE_DELAY_MAX: f32 = 3.0;

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 120.0;
    pub const MAX_DT: f32 = 0.05;

    // Tuning bounds
    pub const PADDLE_WIDTH_RANGE: (f32, f32) = (5.0, 40.0);
    pub const PADDLE_HEIGHT_RANGE: (f32, f32) = (40.0, 200.0);
    pub const PADDLE_SPEED_RANGE: (f32, f32) = (100.0, 1000.0);
    pub const BALL_SPEED_RANGE: (f32, f32) = (100.0, 1000.0);
    pub const AI_REACTION_SPEED_RANGE: (f32, f32) = (50.0, 800.0);
}
