//! Pointer tracker: converts drag samples into scroll offsets and velocity

use std::time::Instant;

/// State of one pointer drag, alive from pointer-down to pointer-up/leave.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    anchor_offset: f32,
    anchor_pointer_x: f32,
    last_pointer_x: f32,
    last_sample_at: Instant,
    /// Signed px per velocity frame; positive scrolls toward later items.
    velocity: f32,
}

impl DragSession {
    pub fn begin(anchor_offset: f32, pointer_x: f32, at: Instant) -> Self {
        Self {
            anchor_offset,
            anchor_pointer_x: pointer_x,
            last_pointer_x: pointer_x,
            last_sample_at: at,
            velocity: 0.0,
        }
    }

    /// Feed one move sample. Returns the unclamped offset the drag asks for.
    ///
    /// The offset follows the anchor, amplified by `gain`. Velocity is only
    /// re-estimated when time moved forward since the previous sample;
    /// duplicate or out-of-order timestamps keep the last estimate.
    pub fn sample(
        &mut self,
        pointer_x: f32,
        at: Instant,
        gain: f32,
        velocity_frame_ms: f32,
    ) -> f32 {
        let walk = (pointer_x - self.anchor_pointer_x) * gain;

        let dt_ms =
            at.saturating_duration_since(self.last_sample_at).as_secs_f32()
                * 1000.0;
        if dt_ms > 0.0 {
            let dx = pointer_x - self.last_pointer_x;
            self.velocity = -dx / dt_ms * velocity_frame_ms;
        }
        self.last_pointer_x = pointer_x;
        self.last_sample_at = at;

        self.anchor_offset - walk
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn anchor_offset(&self) -> f32 {
        self.anchor_offset
    }

    pub fn anchor_pointer_x(&self) -> f32 {
        self.anchor_pointer_x
    }

    pub fn last_pointer_x(&self) -> f32 {
        self.last_pointer_x
    }

    pub fn last_sample_at(&self) -> Instant {
        self.last_sample_at
    }
}
