/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.016,
            now: 0.0,
        }
    }
}

/// Player one is the human on the left, player two the AI on the right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn id(self) -> u8 {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Horizontal direction of this player's goal: -1 left, 1 right
    pub fn side(self) -> f32 {
        match self {
            Player::One => -1.0,
            Player::Two => 1.0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Player one
    pub right: u32, // Player two
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn award(&mut self, player: Player) -> u32 {
        match player {
            Player::One => {
                self.left += 1;
                self.left
            }
            Player::Two => {
                self.right += 1;
                self.right
            }
        }
    }

    pub fn has_winner(&self, win_score: u32) -> Option<Player> {
        if self.left >= win_score {
            Some(Player::One)
        } else if self.right >= win_score {
            Some(Player::Two)
        } else {
            None
        }
    }
}

/// Match phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Playing,
    GameOver { winner: Player },
}

impl GamePhase {
    /// Numeric code exposed in the flat state and debug records
    pub fn code(self) -> u32 {
        match self {
            GamePhase::Playing => 0,
            GamePhase::GameOver { .. } => 1,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GamePhase::Playing => None,
            GamePhase::GameOver { winner } => Some(winner),
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub const DEFAULT_SEED: u64 = 12345;

    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

/// Events that occurred during the last `step`
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub scored: Option<Player>,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub game_over: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.scored = None;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
        self.game_over = false;
    }
}

/// Serve state for the delay after a point. The ball is hidden while the
/// timer runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServeState {
    pub timer: f32, // Time remaining before the ball is served (0 = in play)
    pub conceded_by: Option<Player>,
}

impl ServeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_delay(&mut self, delay: f32, conceded_by: Player) {
        self.timer = delay;
        self.conceded_by = Some(conceded_by);
    }

    /// Count down; returns true on the tick the delay runs out.
    pub fn update(&mut self, dt: f32) -> bool {
        if self.timer <= 0.0 {
            return false;
        }
        self.timer = (self.timer - dt).max(0.0);
        self.timer <= 0.0
    }

    pub fn is_waiting(&self) -> bool {
        self.timer > 0.0
    }

    pub fn clear(&mut self) {
        self.timer = 0.0;
        self.conceded_by = None;
    }
}

pub const INPUT_UP: u32 = 0b001;
pub const INPUT_DOWN: u32 = 0b010;
pub const INPUT_ACTION: u32 = 0b100;

/// Player one's input bits for the current step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub bits: u32,
}

impl InputState {
    pub fn new(bits: u32) -> Self {
        Self { bits }
    }

    pub fn up(&self) -> bool {
        self.bits & INPUT_UP != 0
    }

    pub fn down(&self) -> bool {
        self.bits & INPUT_DOWN != 0
    }

    pub fn action(&self) -> bool {
        self.bits & INPUT_ACTION != 0
    }

    /// Paddle direction; up and down together cancel out
    pub fn dir(&self) -> i8 {
        i8::from(self.down()) - i8::from(self.up())
    }
}
