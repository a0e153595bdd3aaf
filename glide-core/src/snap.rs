//! Time-based eased tween toward an item boundary

use std::time::{Duration, Instant};

use crate::easing::Easing;

/// Result of sampling a snap animation at a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapFrame {
    pub offset: f32,
    pub finished: bool,
}

/// One snap toward `target_offset`, alive until progress reaches 1.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapAnimation {
    start_offset: f32,
    target_offset: f32,
    target_index: usize,
    /// Latched from the first frame the animation clock delivers.
    started_at: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl SnapAnimation {
    pub fn new(
        start_offset: f32,
        target_offset: f32,
        target_index: usize,
        duration: Duration,
        easing: Easing,
    ) -> Self {
        Self {
            start_offset,
            target_offset,
            target_index,
            started_at: None,
            duration,
            easing,
        }
    }

    /// Linear progress in `[0, 1]` at `now`.
    pub fn progress(&self, now: Instant) -> f32 {
        let Some(started) = self.started_at else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Sample the offset for the frame at `now`. The final frame lands on
    /// `target_offset` exactly rather than on the eased approximation.
    pub fn sample(&mut self, now: Instant) -> SnapFrame {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
        let t = self.progress(now);
        if t >= 1.0 {
            return SnapFrame {
                offset: self.target_offset,
                finished: true,
            };
        }
        let eased = self.easing.apply(t);
        SnapFrame {
            offset: self.start_offset
                + (self.target_offset - self.start_offset) * eased,
            finished: false,
        }
    }

    pub fn start_offset(&self) -> f32 {
        self.start_offset
    }

    pub fn target_offset(&self) -> f32 {
        self.target_offset
    }

    pub fn target_index(&self) -> usize {
        self.target_index
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn first_frame_latches_start_and_stays_at_origin() {
        let t0 = Instant::now();
        let mut anim =
            SnapAnimation::new(0.0, 948.0, 3, ms(600), Easing::EaseInOutCubic);
        assert_eq!(anim.started_at(), None);
        let frame = anim.sample(t0);
        assert_eq!(anim.started_at(), Some(t0));
        assert_eq!(frame.offset, 0.0);
        assert!(!frame.finished);
    }

    #[test]
    fn midpoint_of_cubic_is_halfway() {
        let t0 = Instant::now();
        let mut anim =
            SnapAnimation::new(100.0, 500.0, 1, ms(600), Easing::EaseInOutCubic);
        anim.sample(t0);
        let frame = anim.sample(t0 + ms(300));
        assert!((frame.offset - 300.0).abs() < 1e-3);
        assert!(!frame.finished);
    }

    #[test]
    fn completes_exactly_on_target() {
        let t0 = Instant::now();
        let target = 3.0 * 316.0;
        let mut anim =
            SnapAnimation::new(17.3, target, 3, ms(600), Easing::EaseInOutCubic);
        anim.sample(t0);
        let frame = anim.sample(t0 + ms(600));
        assert!(frame.finished);
        assert_eq!(frame.offset, target);

        // Late frames keep reporting completion at the target
        let frame = anim.sample(t0 + ms(5_000));
        assert!(frame.finished);
        assert_eq!(frame.offset, target);
    }

    #[test]
    fn zero_duration_finishes_on_first_frame() {
        let t0 = Instant::now();
        let mut anim = SnapAnimation::new(40.0, 632.0, 2, ms(0), Easing::Linear);
        let frame = anim.sample(t0);
        assert!(frame.finished);
        assert_eq!(frame.offset, 632.0);
    }

    #[test]
    fn moves_backward_toward_lower_targets() {
        let t0 = Instant::now();
        let mut anim = SnapAnimation::new(948.0, 316.0, 1, ms(50), Easing::Linear);
        anim.sample(t0);
        let frame = anim.sample(t0 + ms(25));
        assert!((frame.offset - 632.0).abs() < 1e-3);
    }
}
