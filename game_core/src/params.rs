/// Game tuning parameters for Pongo
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (logical pixels, y grows downward)
    pub const ARENA_WIDTH: i32 = 640;
    pub const ARENA_HEIGHT: i32 = 480;

    // Paddle
    pub const PADDLE_X: i32 = 600;
    pub const PADDLE_Y: i32 = 200;
    pub const PADDLE_WIDTH: i32 = 15;
    pub const PADDLE_HEIGHT: i32 = 100;
    pub const PADDLE_SPEED: i32 = 6; // pixels per tick

    // Ball
    pub const BALL_SIZE: i32 = 15; // rectangular ball, classic ruleset
    pub const BALL_RADIUS: i32 = 8; // circular ball, refined ruleset
    pub const BALL_SPEED: i32 = 3; // pixels per tick, per axis

    // HUD
    pub const HUD_FONT_SIZE: i32 = 12;
    pub const HUD_SCORE_OFFSET: (i32, i32) = (10, 10);
    pub const HUD_HIGH_SCORE_OFFSET: (i32, i32) = (10, 30);

    // Timing
    pub const TICK_RATE: u32 = 60;
    pub const MAX_FRAME_DT: f32 = 0.1; // Clamp to prevent large catch-up bursts
}
