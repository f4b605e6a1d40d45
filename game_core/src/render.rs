//! Render step
//!
//! Painters read a [`Match`] and issue calls on a [`Canvas`]; they never
//! touch game state. The browser client implements `Canvas` over a 2D
//! rendering context.

use glam::Vec2;

use crate::{Court, Match, Phase, Side};

pub const COURT_GREEN: &str = "#2F7831";
pub const LINE_WHITE: &str = "white";
pub const BALL_YELLOW: &str = "yellow";
pub const MENU_BLACK: &str = "black";
pub const BUTTON_GREEN: &str = "green";
pub const OVERLAY: &str = "rgba(0, 0, 0, 0.5)";

const NET_DASH: [f32; 2] = [5.0, 15.0];
const NET_WIDTH: f32 = 4.0;

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    Center,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Start => "start",
            TextAlign::Center => "center",
        }
    }
}

/// 2D drawing surface
pub trait Canvas {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn set_fill_style(&mut self, color: &str);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
    fn dashed_line(&mut self, from: Vec2, to: Vec2, width: f32, color: &str, dash: [f32; 2]);
}

/// Paint whatever the current phase shows
pub fn render<C: Canvas>(canvas: &mut C, game: &Match) {
    match game.phase() {
        Phase::Menu => draw_menu(canvas, &game.court),
        Phase::Running => draw_match(canvas, game),
        Phase::Paused => {
            draw_match(canvas, game);
            draw_banner(canvas, &game.court, "PAUSED", "Press P to resume");
        }
        Phase::Ended => {
            draw_match(canvas, game);
            let title = match game.winner() {
                Some(Side::Left) => "LEFT PLAYER WINS",
                Some(Side::Right) => "RIGHT PLAYER WINS",
                None => "GAME OVER",
            };
            draw_banner(canvas, &game.court, title, "Click or press Enter to play again");
        }
    }
}

/// Title screen with the start button
pub fn draw_menu<C: Canvas>(canvas: &mut C, court: &Court) {
    canvas.set_fill_style(MENU_BLACK);
    canvas.fill_rect(0.0, 0.0, court.width, court.height);

    canvas.set_fill_style(LINE_WHITE);
    canvas.set_font("48px Arial");
    canvas.set_text_align(TextAlign::Center);
    canvas.fill_text("TENNIS GAME", court.width / 2.0, 100.0);

    let button = court.start_button();
    let size = button.size();
    canvas.set_fill_style(BUTTON_GREEN);
    canvas.fill_rect(button.min.x, button.min.y, size.x, size.y);

    canvas.set_fill_style(LINE_WHITE);
    canvas.set_font("24px Arial");
    canvas.fill_text("START GAME", court.width / 2.0, court.height / 2.0 + 8.0);
    canvas.set_text_align(TextAlign::Start);
}

/// Court, paddles, ball and scores
pub fn draw_match<C: Canvas>(canvas: &mut C, game: &Match) {
    let court = &game.court;
    canvas.clear_rect(0.0, 0.0, court.width, court.height);

    canvas.set_fill_style(COURT_GREEN);
    canvas.fill_rect(0.0, 0.0, court.width, court.height);

    // Net
    canvas.dashed_line(
        Vec2::new(court.width / 2.0, 0.0),
        Vec2::new(court.width / 2.0, court.height),
        NET_WIDTH,
        LINE_WHITE,
        NET_DASH,
    );

    canvas.set_fill_style(LINE_WHITE);
    for side in Side::BOTH {
        if let Some(paddle) = game.paddle(side) {
            canvas.fill_rect(paddle.pos.x, paddle.pos.y, paddle.size.x, paddle.size.y);
        }
    }

    if let Some(ball) = game.ball() {
        canvas.set_fill_style(BALL_YELLOW);
        canvas.fill_circle(ball.pos, ball.radius);
    }

    canvas.set_fill_style(LINE_WHITE);
    canvas.set_font("32px Arial");
    canvas.set_text_align(TextAlign::Center);
    canvas.fill_text(&game.score.left.to_string(), court.width / 4.0, 50.0);
    canvas.fill_text(&game.score.right.to_string(), 3.0 * court.width / 4.0, 50.0);
    canvas.set_text_align(TextAlign::Start);
}

/// Translucent overlay with a headline and a hint line
fn draw_banner<C: Canvas>(canvas: &mut C, court: &Court, title: &str, hint: &str) {
    canvas.set_fill_style(OVERLAY);
    canvas.fill_rect(0.0, 0.0, court.width, court.height);

    canvas.set_fill_style(LINE_WHITE);
    canvas.set_font("48px Arial");
    canvas.set_text_align(TextAlign::Center);
    canvas.fill_text(title, court.width / 2.0, court.height / 2.0);
    canvas.set_font("24px Arial");
    canvas.fill_text(hint, court.width / 2.0, court.height / 2.0 + 40.0);
    canvas.set_text_align(TextAlign::Start);
}
