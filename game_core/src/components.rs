use glam::IVec2;

use crate::Aabb;

/// Paddle component - the player's paddle on the right side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub pos: IVec2,  // Top-left corner
    pub size: IVec2, // Width, height
}

impl Paddle {
    pub fn new(pos: IVec2, size: IVec2) -> Self {
        Self { pos, size }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Shape of the ball; decides what `Ball::pos` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallShape {
    /// `pos` is the top-left corner
    Rect { size: IVec2 },
    /// `pos` is the center
    Circle { radius: i32 },
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub pos: IVec2,
    pub shape: BallShape,
    pub vel: IVec2, // Pixels per tick
}

impl Ball {
    pub fn new(pos: IVec2, shape: BallShape, vel: IVec2) -> Self {
        Self { pos, shape, vel }
    }

    /// Extent of the ball on screen
    pub fn aabb(&self) -> Aabb {
        match self.shape {
            BallShape::Rect { size } => Aabb::from_pos_size(self.pos, size),
            BallShape::Circle { radius } => Aabb::from_center_radius(self.pos, radius),
        }
    }

    /// Y coordinate tested against the paddle's vertical span
    pub fn probe_y(&self) -> i32 {
        self.pos.y
    }

    /// Y coordinate tested against the bottom wall: the top edge of a square
    /// ball, the lowest point of a round one
    pub fn floor_y(&self) -> i32 {
        match self.shape {
            BallShape::Rect { .. } => self.pos.y,
            BallShape::Circle { radius } => self.pos.y + radius,
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.vel == IVec2::ZERO
    }

    /// Return to `start`, keeping the current velocity
    pub fn reset(&mut self, start: IVec2) {
        self.pos = start;
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_ball_aabb_uses_top_left() {
        let ball = Ball::new(
            IVec2::new(10, 20),
            BallShape::Rect {
                size: IVec2::splat(15),
            },
            IVec2::ZERO,
        );
        let aabb = ball.aabb();
        assert_eq!(aabb.left(), 10);
        assert_eq!(aabb.right(), 25);
        assert_eq!(aabb.top(), 20);
        assert_eq!(aabb.bottom(), 35);
    }

    #[test]
    fn test_circle_ball_aabb_uses_center() {
        let ball = Ball::new(
            IVec2::new(320, 240),
            BallShape::Circle { radius: 8 },
            IVec2::ZERO,
        );
        let aabb = ball.aabb();
        assert_eq!(aabb.left(), 312);
        assert_eq!(aabb.right(), 328);
        assert_eq!(ball.probe_y(), 240);
    }

    #[test]
    fn test_floor_y_per_shape() {
        let square = Ball::new(
            IVec2::new(10, 465),
            BallShape::Rect {
                size: IVec2::splat(15),
            },
            IVec2::ZERO,
        );
        assert_eq!(square.floor_y(), 465, "Square ball bounces on its top edge");

        let round = Ball::new(IVec2::new(10, 465), BallShape::Circle { radius: 8 }, IVec2::ZERO);
        assert_eq!(round.floor_y(), 473);
    }

    #[test]
    fn test_ball_reset_keeps_velocity() {
        let mut ball = Ball::new(
            IVec2::new(700, 100),
            BallShape::Circle { radius: 8 },
            IVec2::new(3, -3),
        );
        ball.reset(IVec2::new(320, 240));
        assert_eq!(ball.pos, IVec2::new(320, 240));
        assert_eq!(ball.vel, IVec2::new(3, -3), "Velocity is never re-randomized");
    }

    #[test]
    fn test_ball_at_rest() {
        let ball = Ball::new(IVec2::ZERO, BallShape::Circle { radius: 8 }, IVec2::ZERO);
        assert!(ball.is_at_rest());
    }

    #[test]
    fn test_paddle_aabb() {
        let paddle = Paddle::new(IVec2::new(600, 200), IVec2::new(15, 100));
        assert_eq!(paddle.aabb().right(), 615);
        assert_eq!(paddle.aabb().bottom(), 300);
    }
}
