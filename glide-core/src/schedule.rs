//! Scheduling directives exchanged with the host
//!
//! The engine never owns a timer. Each transition instead tells the host
//! which callback chain to stop and which to start. Every chain is
//! identified by a [`TaskHandle`] minted by the carousel; ticks and frames
//! carry the handle back so work from a cancelled chain can be recognised
//! and dropped instead of writing the offset.

use std::fmt;
use std::time::Duration;

/// Identity of one scheduled callback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

impl TaskHandle {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task#{}", self.0)
    }
}

/// Callback chain kinds the host must be able to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Fixed-rate timer delivering
    /// [`CarouselMessage::MomentumTick`](crate::CarouselMessage::MomentumTick).
    MomentumTimer { interval: Duration },
    /// Per-frame animation clock delivering
    /// [`CarouselMessage::Frame`](crate::CarouselMessage::Frame).
    FrameClock,
}

/// A callback chain the host should start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTask {
    pub handle: TaskHandle,
    pub kind: TaskKind,
}

/// What the host must do after a transition.
///
/// A transition leaves at most one mode and enters at most one, so it
/// cancels at most one chain and starts at most one. Hosts apply `cancel`
/// before `schedule`.
#[must_use = "directives carry timer cancellations that must be applied"]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directives {
    pub cancel: Option<TaskHandle>,
    pub schedule: Option<ScheduledTask>,
}

impl Directives {
    pub const fn none() -> Self {
        Self {
            cancel: None,
            schedule: None,
        }
    }

    pub const fn cancel(handle: TaskHandle) -> Self {
        Self {
            cancel: Some(handle),
            schedule: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cancel.is_none() && self.schedule.is_none()
    }
}

/// Mints unique task handles for one carousel.
#[derive(Debug, Default, Clone)]
pub(crate) struct HandleMint {
    next: u64,
}

impl HandleMint {
    pub(crate) fn mint(&mut self) -> TaskHandle {
        self.next = self.next.wrapping_add(1);
        TaskHandle::from_raw(self.next)
    }
}
