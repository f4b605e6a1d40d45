use crate::{Ball, Court, Paddle, PaddleIntent};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, court: &Court) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        let max_y = court.paddle_max_y(paddle.size.y);

        // Up and down are checked independently, holding both can still move
        if intent.up && paddle.pos.y > 0.0 {
            paddle.pos.y -= paddle.speed;
        }
        if intent.down && paddle.pos.y < max_y {
            paddle.pos.y += paddle.speed;
        }

        paddle.pos.y = court.clamp_paddle_y(paddle.pos.y, paddle.size.y);
    }
}

/// Move ball one tick along its velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
