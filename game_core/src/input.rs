//! Input snapshot handed to the update step
//!
//! The client feeds raw key names and pointer positions in here; the
//! simulation only ever reads the resulting flags.

use glam::Vec2;

use crate::{Court, Side};

/// Lifecycle requests that do not map onto paddle movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    Confirm,
    Back,
}

/// Control state for one paddle
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaddleControl {
    pub up: bool,
    pub down: bool,
    /// Pointer y the paddle should center on this frame
    pub touch_y: Option<f32>,
}

/// Both players' controls
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    pub left: PaddleControl,
    pub right: PaddleControl,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn control(&self, side: Side) -> &PaddleControl {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn control_mut(&mut self, side: Side) -> &mut PaddleControl {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Handle key down event, returning a lifecycle command if the key is one
    pub fn key_down(&mut self, key: &str) -> Option<Command> {
        match key {
            "w" | "W" => self.left.up = true,
            "s" | "S" => self.left.down = true,
            "ArrowUp" => self.right.up = true,
            "ArrowDown" => self.right.down = true,
            "p" | "P" => return Some(Command::TogglePause),
            "Enter" => return Some(Command::Confirm),
            "Escape" => return Some(Command::Back),
            _ => {}
        }
        None
    }

    /// Handle key up event
    pub fn key_up(&mut self, key: &str) {
        match key {
            "w" | "W" => self.left.up = false,
            "s" | "S" => self.left.down = false,
            "ArrowUp" => self.right.up = false,
            "ArrowDown" => self.right.down = false,
            _ => {}
        }
    }

    /// Pointer contact; the half of the court picks the paddle
    pub fn touch(&mut self, point: Vec2, court: &Court) -> Side {
        let side = court.side_of(point);
        self.control_mut(side).touch_y = Some(point.y);
        side
    }

    /// Forget per-frame pointer targets, held keys stay down
    pub fn end_frame(&mut self) {
        self.left.touch_y = None;
        self.right.touch_y = None;
    }

    /// Release everything, e.g. when the page loses focus
    pub fn release_all(&mut self) {
        *self = Self::default();
    }
}
