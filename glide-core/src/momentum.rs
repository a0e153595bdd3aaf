//! Momentum simulator: fixed-rate kinetic decay after a drag release

/// One inertial coast, alive from release until the speed decays away.
#[derive(Debug, Clone, PartialEq)]
pub struct MomentumRun {
    /// Signed px per tick
    velocity: f32,
    ticks: u32,
    /// Set once a tick fails to shrink the speed
    stalled: bool,
}

impl MomentumRun {
    /// Start a run if the release velocity is strictly above `threshold`.
    pub fn launch(velocity: f32, threshold: f32) -> Option<Self> {
        if velocity.is_finite() && velocity.abs() > threshold {
            Some(Self {
                velocity,
                ticks: 0,
                stalled: false,
            })
        } else {
            None
        }
    }

    /// Advance one tick: returns the displacement to add to the offset, then
    /// applies friction to the remaining velocity.
    pub fn step(&mut self, friction: f32) -> f32 {
        let delta = self.velocity;
        self.velocity *= friction;
        self.ticks = self.ticks.saturating_add(1);
        if !(self.velocity.abs() < delta.abs()) {
            self.stalled = true;
        }
        delta
    }

    /// Whether the run should end: the speed decayed below `threshold`, or
    /// the last tick no longer reduced it (friction of 1 or more, or a speed
    /// so small that multiplying rounds back to itself).
    pub fn is_spent(&self, threshold: f32) -> bool {
        self.stalled || !(self.velocity.abs() >= threshold)
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Ticks applied so far.
    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}
