use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Turn this tick's keyboard state into paddle intents
pub fn ingest_input(world: &mut World, input: &Input) {
    let dir = input.dir();
    for (_entity, intent) in world.query_mut::<&mut PaddleIntent>() {
        intent.dir = dir;
    }
}
