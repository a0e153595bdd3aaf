//! Configuration for a carousel instance
//!
//! Every tuning constant of the engine is a field here so hosts can adjust
//! feel without touching the state machine. Defaults come from
//! [`crate::constants`].

use std::time::Duration;

use crate::constants::{drag, layout, momentum, snap};
use crate::easing::Easing;

/// Recognised snap duration presets.
///
/// Two durations are in use for the same component: a near-instant
/// "whoosh" and a slower glide. Both are available; neither is implied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SnapPreset {
    /// 50 ms
    Whoosh,
    /// 600 ms
    #[default]
    Glide,
}

impl SnapPreset {
    pub fn duration_ms(self) -> u64 {
        match self {
            Self::Whoosh => snap::WHOOSH_DURATION_MS,
            Self::Glide => snap::GLIDE_DURATION_MS,
        }
    }
}

/// Static configuration for a carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    /// Fixed width of every item (px).
    pub item_width: f32,
    /// Gap between items (px).
    pub gap: f32,
    /// Multiplier from pointer travel to scroll travel while dragging.
    pub drag_gain: f32,
    /// Velocity multiplier applied per momentum tick, in `(0, 1)`.
    pub friction: f32,
    /// Momentum starts only above, and stops below, this speed (px/tick).
    pub velocity_stop_threshold: f32,
    /// Velocity normalisation window (ms); pointer speed is reported in px
    /// per this many milliseconds.
    pub velocity_frame_ms: f32,
    /// Momentum timer period (ms).
    pub momentum_interval_ms: u64,
    /// Snap animation duration (ms). Zero snaps on the first frame.
    pub snap_duration_ms: u64,
    /// Curve applied to snap progress.
    pub snap_easing: Easing,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            item_width: layout::ITEM_WIDTH,
            gap: layout::GAP,
            drag_gain: drag::GAIN,
            friction: momentum::FRICTION,
            velocity_stop_threshold: momentum::VELOCITY_STOP_THRESHOLD,
            velocity_frame_ms: drag::VELOCITY_FRAME_MS,
            momentum_interval_ms: momentum::TICK_MS,
            snap_duration_ms: snap::DEFAULT_DURATION_MS,
            snap_easing: Easing::default(),
        }
    }
}

impl CarouselConfig {
    /// Defaults with the snap duration taken from a preset.
    pub fn with_preset(preset: SnapPreset) -> Self {
        Self {
            snap_duration_ms: preset.duration_ms(),
            ..Self::default()
        }
    }

    /// Distance between the starts of two neighbouring items.
    #[inline]
    pub fn stride(&self) -> f32 {
        self.item_width + self.gap
    }

    pub fn momentum_interval(&self) -> Duration {
        Duration::from_millis(self.momentum_interval_ms)
    }

    pub fn snap_duration(&self) -> Duration {
        Duration::from_millis(self.snap_duration_ms)
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.item_width.is_finite() && self.item_width > 0.0) {
            return Err(ConfigError::ItemWidth(self.item_width));
        }
        if !(self.gap.is_finite() && self.gap >= 0.0) {
            return Err(ConfigError::Gap(self.gap));
        }
        if !(self.drag_gain.is_finite() && self.drag_gain > 0.0) {
            return Err(ConfigError::DragGain(self.drag_gain));
        }
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(ConfigError::Friction(self.friction));
        }
        if !(self.velocity_stop_threshold.is_finite()
            && self.velocity_stop_threshold > 0.0)
        {
            return Err(ConfigError::StopThreshold(
                self.velocity_stop_threshold,
            ));
        }
        if !(self.velocity_frame_ms.is_finite() && self.velocity_frame_ms > 0.0)
        {
            return Err(ConfigError::VelocityFrame(self.velocity_frame_ms));
        }
        if self.momentum_interval_ms == 0 {
            return Err(ConfigError::MomentumInterval);
        }
        Ok(())
    }
}

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("item width must be a positive finite number, got {0}")]
    ItemWidth(f32),

    #[error("gap must be a non-negative finite number, got {0}")]
    Gap(f32),

    #[error("drag gain must be a positive finite number, got {0}")]
    DragGain(f32),

    #[error("friction must lie strictly between 0 and 1, got {0}")]
    Friction(f32),

    #[error("velocity stop threshold must be a positive finite number, got {0}")]
    StopThreshold(f32),

    #[error("velocity frame must be a positive number of ms, got {0}")]
    VelocityFrame(f32),

    #[error("momentum interval must be at least 1 ms")]
    MomentumInterval,
}

impl ConfigError {
    /// Settings key holding the rejected value.
    pub fn key(&self) -> &'static str {
        match self {
            Self::ItemWidth(_) => "item_width",
            Self::Gap(_) => "gap",
            Self::DragGain(_) => "drag_gain",
            Self::Friction(_) => "friction",
            Self::StopThreshold(_) => "velocity_stop_threshold",
            Self::VelocityFrame(_) => "velocity_frame_ms",
            Self::MomentumInterval => "momentum_interval_ms",
        }
    }
}
