//! Carousel constants
//!
//! Shared defaults for carousel layout, drag, momentum and snap behavior.
//! Tuning should happen here so every carousel built from
//! [`CarouselConfig::default`](crate::CarouselConfig) updates consistently.

/// Layout defaults for the item track.
pub mod layout {
    /// Width of one item (px).
    pub const ITEM_WIDTH: f32 = 300.0;
    /// Gap between neighbouring items (px).
    pub const GAP: f32 = 16.0;
    /// Rounding slack (px) when deciding whether the track sits at its end.
    pub const END_OF_TRACK_SLACK: f32 = 1.0;
}

/// Pointer drag defaults.
pub mod drag {
    /// Amplification of raw pointer travel into scroll distance.
    pub const GAIN: f32 = 2.0;
    /// Velocity samples are normalised to px per this many milliseconds,
    /// i.e. one nominal momentum tick.
    pub const VELOCITY_FRAME_MS: f32 = 16.0;
}

/// Momentum (post-release kinetic decay) defaults.
pub mod momentum {
    /// Momentum timer period (ms).
    pub const TICK_MS: u64 = 16;
    /// Velocity multiplier applied after every tick.
    pub const FRICTION: f32 = 0.95;
    /// Below this speed (px/tick) a run ends; a release must exceed it to
    /// start one at all.
    pub const VELOCITY_STOP_THRESHOLD: f32 = 0.5;
}

/// Snap animation defaults.
pub mod snap {
    /// Quick "whoosh" snap duration (ms).
    pub const WHOOSH_DURATION_MS: u64 = 50;
    /// Smooth glide snap duration (ms).
    pub const GLIDE_DURATION_MS: u64 = 600;
    /// Default snap duration (ms).
    pub const DEFAULT_DURATION_MS: u64 = GLIDE_DURATION_MS;
}

/// Animation clock defaults used by hosts that drive frames from a timer.
pub mod frame {
    /// Frame clock period (ms), roughly 60 FPS.
    pub const INTERVAL_MS: u64 = 16;
}
