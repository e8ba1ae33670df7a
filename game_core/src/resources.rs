/// Time resource for tracking simulation ticks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Time {
    pub tick: u64, // Ticks simulated so far
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) {
        self.tick += 1;
    }
}

/// Score tracking for the current process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub current: u32, // Returns since the last miss
    pub high: u32,    // Best `current` seen so far
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a successful return and raise the high score if beaten
    pub fn record_hit(&mut self) {
        self.current += 1;
        if self.current > self.high {
            self.high = self.current;
        }
    }

    /// Drop the current score after a miss; the high score is kept
    pub fn reset(&mut self) {
        self.current = 0;
    }
}

/// Keyboard state for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Input {
    pub up: bool,
    pub down: bool,
}

impl Input {
    pub fn new(up: bool, down: bool) -> Self {
        Self { up, down }
    }

    /// Net direction: -1 = up, 0 = none or both, 1 = down
    pub fn dir(&self) -> i8 {
        self.down as i8 - self.up as i8
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub ball_missed: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
        self.ball_missed = false;
    }
}
