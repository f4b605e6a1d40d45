use crate::{Params, Side};

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub court_width: f32,
    pub court_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_inset: f32,
    pub ball_radius: f32,
    pub serve_speed: f32,
    pub opening_spin: f32,
    pub serve_spread: f32,
    pub ball_speed_increase: f32,
    pub ball_speed_max: f32,
    pub deflection: f32,
    /// First side to reach this score ends the match; `None` plays forever
    pub win_score: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_width: Params::COURT_WIDTH,
            court_height: Params::COURT_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_radius: Params::BALL_RADIUS,
            serve_speed: Params::SERVE_SPEED,
            opening_spin: Params::OPENING_SPIN,
            serve_spread: Params::SERVE_SPREAD,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            ball_speed_max: Params::BALL_SPEED_MAX,
            deflection: Params::DEFLECTION,
            win_score: Some(Params::WIN_SCORE),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the left edge of a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.court_width - self.paddle_inset - self.paddle_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 100.0, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right), 680.0, "Right paddle X position");
    }
}
