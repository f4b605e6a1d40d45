pub mod components;
pub mod config;
pub mod court;
pub mod fsm;
pub mod game;
pub mod input;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use court::*;
pub use fsm::*;
pub use game::*;
pub use input::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the court tennis simulation by one tick
pub fn step(
    world: &mut World,
    court: &Court,
    config: &Config,
    input: &InputState,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // 1. Ingest inputs (flags onto paddle intents, pointer targets onto paddles)
    ingest_inputs(world, input, court);

    // 2. Move paddles based on intents
    move_paddles(world, court);

    // 3. Move ball
    move_ball(world);

    // 4. Check collisions (walls, then paddles)
    check_collisions(world, court, config, events);

    // 5. Check scoring (ball left the court)
    check_scoring(world, court, config, score, events, rng);
}

/// Helper to create a paddle entity at its spawn point
pub fn create_paddle(world: &mut World, side: Side, court: &Court, config: &Config) -> hecs::Entity {
    let pos = court.paddle_spawn(side, config);
    world.spawn((Paddle::new(side, pos, config), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2, radius: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, radius),))
}
