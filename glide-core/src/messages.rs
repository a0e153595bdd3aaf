use std::time::Instant;

use crate::schedule::TaskHandle;

/// Inputs a carousel reacts to, from the host and from its own scheduled
/// callback chains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselMessage {
    // Pointer (mouse and touch share one stream)
    PointerDown { x: f32, at: Instant },
    PointerMove { x: f32, at: Instant },
    PointerUp,
    /// The pointer left the carousel mid-drag; ends the drag like `PointerUp`.
    PointerLeave,

    // Scheduled callbacks
    MomentumTick(TaskHandle),
    /// Animation clock frame with its timestamp
    Frame(TaskHandle, Instant),

    // Navigation commands (arrows, indicator dots)
    SnapTo(usize),
    ScrollPrev,
    ScrollNext,

    // Host notifications
    ContainerResized(f32),
    ItemsChanged(usize),
}
