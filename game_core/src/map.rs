use glam::IVec2;

use crate::Params;

/// Axis-aligned bounding box in integer pixels (`min` inclusive, `max` exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aabb {
    pub min: IVec2,
    pub max: IVec2,
}

impl Aabb {
    pub fn new(min: IVec2, max: IVec2) -> Self {
        Self { min, max }
    }

    pub fn from_pos_size(pos: IVec2, size: IVec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn from_center_radius(center: IVec2, radius: i32) -> Self {
        let half = IVec2::splat(radius);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn size(&self) -> IVec2 {
        self.max - self.min
    }

    pub fn left(&self) -> i32 {
        self.min.x
    }

    pub fn right(&self) -> i32 {
        self.max.x
    }

    pub fn top(&self) -> i32 {
        self.min.y
    }

    pub fn bottom(&self) -> i32 {
        self.max.y
    }
}

/// Playing field bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameMap {
    pub width: i32,
    pub height: i32,
}

impl GameMap {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.width / 2, self.height / 2)
    }

    /// Clamp the top edge of an object of `extent` height so it stays on screen
    pub fn clamp_y(&self, y: i32, extent: i32) -> i32 {
        y.clamp(0, (self.height - extent).max(0))
    }
}

impl Default for GameMap {
    fn default() -> Self {
        Self::new(Params::ARENA_WIDTH, Params::ARENA_HEIGHT)
    }
}
