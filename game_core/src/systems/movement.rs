use crate::{Ball, Config, GameMap, Launch, Paddle, PaddleIntent};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, map: &GameMap, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            paddle.pos.y += intent.dir as i32 * config.paddle_speed;

            if config.clamp_paddle {
                paddle.pos.y = map.clamp_y(paddle.pos.y, paddle.size.y);
            }
        }
    }
}

/// Serve a ball that is still at rest (lazy launch only)
pub fn launch_ball(world: &mut World, config: &Config) {
    if config.launch != Launch::Lazy {
        return;
    }
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.is_at_rest() {
            ball.vel = config.serve_velocity();
        }
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
