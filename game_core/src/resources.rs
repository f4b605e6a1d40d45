use crate::{Params, Side};

/// Fixed-step clock fed with measured frame time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,    // Length of one tick
    pub ticks: u64, // Ticks simulated so far
    accumulator: f32,
}

impl Time {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            ticks: 0,
            accumulator: 0.0,
        }
    }

    /// Bank elapsed wall time and return how many ticks are now due
    pub fn accumulate(&mut self, elapsed: f32) -> u32 {
        if elapsed.is_nan() || elapsed <= 0.0 || self.dt <= 0.0 {
            return 0;
        }
        self.accumulator += elapsed.min(Params::MAX_DT);

        let mut due = 0;
        while self.accumulator >= self.dt {
            self.accumulator -= self.dt;
            due += 1;
        }
        due
    }

    /// Record that one tick was simulated
    pub fn tick(&mut self) {
        self.ticks += 1;
    }

    /// Drop banked time so a resumed match does not fast-forward
    pub fn discard_pending(&mut self) {
        self.accumulator = 0.0;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new(Params::FIXED_DT)
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn has_winner(&self, win_score: u32) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred since the last clear
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn record_score(&mut self, side: Side) {
        match side {
            Side::Left => self.left_scored = true,
            Side::Right => self.right_scored = true,
        }
    }

    pub fn has_scored(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left_scored,
            Side::Right => self.right_scored,
        }
    }

    pub fn any(&self) -> bool {
        self.left_scored || self.right_scored || self.ball_hit_paddle || self.ball_hit_wall
    }
}
