/// Hue advance per rendered frame.
pub const HUE_STEP: f64 = 0.002;

/// Monotonic animation time, advanced once per animating tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationClock {
    seconds: f64,
    frames: u64,
    hue_offset: f64,
}

impl AnimationClock {
    /// Clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds accumulated so far.
    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Number of frames advanced.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Rainbow hue offset in `[0, 1)`.
    pub fn hue_offset(&self) -> f64 {
        self.hue_offset
    }

    /// Move forward one frame of `dt` seconds. Negative or non-finite steps count as zero.
    pub fn advance(&mut self, dt: f64) {
        if dt.is_finite() && dt > 0.0 {
            self.seconds += dt;
        }
        self.frames = self.frames.saturating_add(1);
        self.hue_offset = (self.hue_offset + HUE_STEP).rem_euclid(1.0);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/clock.rs"]
mod tests;
