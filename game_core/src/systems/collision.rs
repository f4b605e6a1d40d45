use crate::{Ball, Config, Court, Events, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, court: &Court, config: &Config, events: &mut Events) {
    // Collect paddle data first so the ball can be borrowed mutably
    let mut paddles: Vec<Paddle> = world.query::<&Paddle>().iter().map(|(_e, p)| *p).collect();
    paddles.sort_by_key(|p| p.side == Side::Right);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if bounce_off_walls(ball, court) {
            events.ball_hit_wall = true;
        }

        for paddle in &paddles {
            if bounce_off_paddle(ball, paddle, config) {
                events.ball_hit_paddle = true;
                break;
            }
        }
    }
}

/// Reflect the ball off the top and bottom walls
///
/// Position is left as is; the ball may sit up to one step inside the wall.
pub fn bounce_off_walls(ball: &mut Ball, court: &Court) -> bool {
    if ball.pos.y - ball.radius < 0.0 || ball.pos.y + ball.radius > court.height {
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Return the ball off a paddle, angled by where it struck
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, config: &Config) -> bool {
    if !ball.bounds().overlaps(&paddle.bounds()) {
        return false;
    }

    let hit_position = paddle.hit_position(ball.pos.y);
    let max_speed = config.ball_speed_max.abs();
    ball.vel.x = (-ball.vel.x * config.ball_speed_increase).clamp(-max_speed, max_speed);
    ball.vel.y = hit_position * config.deflection;
    true
}
