use glam::Vec2;

use crate::{Aabb, Circle, Config, Court, GameRng};

/// Which end of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2, // Top-left corner
    pub size: Vec2,
    pub speed: f32,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, config: &Config) -> Self {
        Self {
            side,
            pos,
            size: Vec2::new(config.paddle_width, config.paddle_height),
            speed: config.paddle_speed,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_origin_size(self.pos, self.size)
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Normalized contact offset, -1 at the top edge and 1 at the bottom
    pub fn hit_position(&self, y: f32) -> f32 {
        (y - self.center_y()) / (self.size.y / 2.0)
    }
}

/// Movement flags for a paddle, set from input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component - the tennis ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // Center
    pub vel: Vec2, // Per tick
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    pub fn collider(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }

    pub fn bounds(&self) -> Aabb {
        self.collider().bounds()
    }

    /// Serve from the center; `direction` is the sign of the new speedX
    pub fn reset(&mut self, court: &Court, direction: f32, config: &Config, rng: &mut GameRng) {
        use rand::Rng;

        self.pos = court.ball_spawn();
        let spin = if config.serve_spread > 0.0 {
            rng.0.gen_range(-config.serve_spread..config.serve_spread)
        } else {
            0.0
        };
        self.vel = Vec2::new(config.serve_speed * direction.signum(), spin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Left.opponent(), Side::Right);
        assert_eq!(Side::Right.opponent(), Side::Left);
    }

    #[test]
    fn test_paddle_hit_position() {
        let config = Config::new();
        let paddle = Paddle::new(Side::Left, Vec2::new(100.0, 250.0), &config);
        assert_eq!(paddle.center_y(), 300.0);
        assert_eq!(paddle.hit_position(300.0), 0.0);
        assert_eq!(paddle.hit_position(250.0), -1.0);
        assert_eq!(paddle.hit_position(350.0), 1.0);
        assert_eq!(paddle.hit_position(325.0), 0.5);
    }

    #[test]
    fn test_ball_reset_serves_from_center() {
        let config = Config::new();
        let court = Court::from_config(&config);
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::new(-30.0, 12.0), Vec2::new(-9.0, 4.0), 10.0);

        for direction in [1.0, -1.0] {
            ball.reset(&court, direction, &config, &mut rng);
            assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
            assert_eq!(ball.vel.x, 5.0 * direction);
            assert!(ball.vel.y >= -2.0 && ball.vel.y < 2.0, "speedY {} out of range", ball.vel.y);
            assert_eq!(ball.radius, 10.0, "Radius survives reset");
        }
    }

    #[test]
    fn test_ball_reset_without_spread() {
        let config = Config {
            serve_spread: 0.0,
            ..Config::new()
        };
        let court = Court::from_config(&config);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO, 10.0);
        ball.reset(&court, -1.0, &config, &mut GameRng::default());
        assert_eq!(ball.vel, Vec2::new(-5.0, 0.0));
    }
}
