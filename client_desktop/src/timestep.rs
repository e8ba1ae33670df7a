use game_core::Params;

/// Turns variable frame times into a whole number of fixed ticks
pub struct FixedTimestep {
    tick_duration: f32,
    accumulator: f32,
}

impl FixedTimestep {
    pub fn from_rate(ticks_per_second: u32) -> Self {
        Self {
            tick_duration: 1.0 / ticks_per_second.max(1) as f32,
            accumulator: 0.0,
        }
    }

    /// Add elapsed wall time; long stalls are clamped to `Params::MAX_FRAME_DT`
    pub fn accumulate(&mut self, delta: f32) {
        self.accumulator += delta.clamp(0.0, Params::MAX_FRAME_DT);
    }

    pub fn should_step(&mut self) -> bool {
        if self.accumulator >= self.tick_duration {
            self.accumulator -= self.tick_duration;
            true
        } else {
            false
        }
    }
}
