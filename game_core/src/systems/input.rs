use hecs::World;

use crate::{Court, InputState, Paddle, PaddleIntent};

/// Copy the input snapshot onto paddle intents and apply pointer targets
pub fn ingest_inputs(world: &mut World, input: &InputState, court: &Court) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &mut PaddleIntent)>() {
        let control = input.control(paddle.side);
        intent.up = control.up;
        intent.down = control.down;

        // Pointer positions the paddle directly, bypassing paddle speed
        if let Some(touch_y) = control.touch_y {
            paddle.pos.y = court.clamp_paddle_y(touch_y - paddle.size.y / 2.0, paddle.size.y);
        }
    }
}
