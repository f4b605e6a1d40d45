use glam::Vec2;

use crate::{Config, Params, Side};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box from a top-left corner and a size
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Inclusive point test, edges count as inside
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Strict overlap test, boxes that only touch do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Check if circle intersects AABB
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        let closest = Vec2::new(
            center.x.clamp(self.min.x, self.max.x),
            center.y.clamp(self.min.y, self.max.y),
        );
        (center - closest).length_squared() <= radius * radius
    }
}

/// Circle collider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Overlap when centers are closer than the summed radii
    pub fn overlaps(&self, other: &Circle) -> bool {
        self.center.distance(other.center) < self.radius + other.radius
    }

    /// Bounding square of the circle
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.center, Vec2::splat(self.radius * 2.0))
    }
}

/// The playing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Court {
    pub width: f32,
    pub height: f32,
}

impl Court {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.court_width, config.court_height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Ball spawn position
    pub fn ball_spawn(&self) -> Vec2 {
        self.center()
    }

    /// Top-left corner of a paddle at match start, vertically centered
    pub fn paddle_spawn(&self, side: Side, config: &Config) -> Vec2 {
        Vec2::new(
            config.paddle_x(side),
            self.height / 2.0 - config.paddle_height / 2.0,
        )
    }

    /// Lowest allowed top edge for a paddle of the given height
    pub fn paddle_max_y(&self, paddle_height: f32) -> f32 {
        (self.height - paddle_height).max(0.0)
    }

    /// Clamp a paddle's top edge to the court
    pub fn clamp_paddle_y(&self, y: f32, paddle_height: f32) -> f32 {
        y.clamp(0.0, self.paddle_max_y(paddle_height))
    }

    /// Which half of the court a point falls in
    pub fn side_of(&self, point: Vec2) -> Side {
        if point.x < self.width / 2.0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Start button on the menu screen
    pub fn start_button(&self) -> Aabb {
        Aabb::from_center_size(
            self.center(),
            Vec2::new(Params::BUTTON_WIDTH, Params::BUTTON_HEIGHT),
        )
    }
}

impl Default for Court {
    fn default() -> Self {
        Self::new(Params::COURT_WIDTH, Params::COURT_HEIGHT)
    }
}
