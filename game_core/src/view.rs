//! Read-only snapshot of the game for the renderer

use glam::IVec2;
use hecs::World;

use crate::{Aabb, Ball, BallShape, Paddle, Params, Score};

/// Ball as the renderer draws it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallView {
    Rect(Aabb),
    Circle { center: IVec2, radius: i32 },
}

impl From<&Ball> for BallView {
    fn from(ball: &Ball) -> Self {
        match ball.shape {
            BallShape::Rect { .. } => BallView::Rect(ball.aabb()),
            BallShape::Circle { radius } => BallView::Circle {
                center: ball.pos,
                radius,
            },
        }
    }
}

/// One line of HUD text anchored at its top-left corner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudLine {
    pub text: String,
    pub offset: IVec2,
}

impl HudLine {
    pub fn score(score: &Score) -> Self {
        let (x, y) = Params::HUD_SCORE_OFFSET;
        Self {
            text: format!("Score: {}", score.current),
            offset: IVec2::new(x, y),
        }
    }

    pub fn high_score(score: &Score) -> Self {
        let (x, y) = Params::HUD_HIGH_SCORE_OFFSET;
        Self {
            text: format!("High score: {}", score.high),
            offset: IVec2::new(x, y),
        }
    }
}

/// Everything drawn in one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub paddle: Aabb,
    pub ball: BallView,
    pub hud: [HudLine; 2],
}

/// Copy the drawable state out of the world. `None` until both a paddle and a
/// ball exist.
pub fn snapshot(world: &World, score: &Score) -> Option<Snapshot> {
    let paddle = world
        .query::<&Paddle>()
        .iter()
        .next()
        .map(|(_e, paddle)| paddle.aabb())?;
    let ball = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| BallView::from(ball))?;

    Some(Snapshot {
        paddle,
        ball,
        hud: [HudLine::score(score), HudLine::high_score(score)],
    })
}
