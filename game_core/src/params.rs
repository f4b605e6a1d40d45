/// Game tuning parameters for court tennis
///
/// Distances are surface pixels, speeds are pixels per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 8.0;
    pub const PADDLE_INSET: f32 = 100.0; // Gap between court edge and paddle face

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const SERVE_SPEED: f32 = 5.0;
    pub const OPENING_SPIN: f32 = 2.0; // Vertical speed of the first serve of a match
    pub const SERVE_SPREAD: f32 = 2.0; // Later serves draw speedY from [-spread, spread)
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Multiply speedX on paddle hit
    pub const BALL_SPEED_MAX: f32 = 15.0; // Cap on |speedX|
    pub const DEFLECTION: f32 = 7.0; // speedY at the very edge of a paddle

    // Score
    pub const WIN_SCORE: u32 = 11;

    // Timing
    pub const FIXED_DT: f32 = 1.0 / 60.0; // One tick
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps after a stall

    // Menu
    pub const BUTTON_WIDTH: f32 = 200.0;
    pub const BUTTON_HEIGHT: f32 = 50.0;
}
