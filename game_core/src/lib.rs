pub mod components;
pub mod config;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;
pub mod view;

pub use components::*;
pub use config::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use view::*;

use glam::IVec2;
use hecs::World;
use systems::*;

/// Advance the deterministic Pongo simulation by one fixed tick
pub fn step(
    world: &mut World,
    time: &mut Time,
    map: &GameMap,
    config: &Config,
    input: &Input,
    score: &mut Score,
    events: &mut Events,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Apply player input to the paddle
    ingest_input(world, input);
    move_paddles(world, map, config);

    // 2. Advance the ball (serving it first if still at rest)
    launch_ball(world, config);
    move_ball(world);

    // 3. Walls
    check_wall_collisions(world, map, config, events);

    // 4. Paddle
    check_paddle_collisions(world, config, score, events);

    // 5. Misses reset the rally
    check_scoring(world, map, config, score, events);

    time.advance();
}

/// Helper to create the paddle entity
pub fn create_paddle(world: &mut World, pos: IVec2, size: IVec2) -> hecs::Entity {
    world.spawn((Paddle::new(pos, size), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: IVec2, shape: BallShape, vel: IVec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, shape, vel),))
}

/// Build a world holding the paddle and ball at their start positions
pub fn setup_world(config: &Config) -> World {
    let mut world = World::new();
    create_paddle(&mut world, config.paddle_start, config.paddle_size);
    create_ball(
        &mut world,
        config.ball_start(),
        config.ball_shape,
        config.spawn_velocity(),
    );
    world
}
