//! The carousel aggregate and its interaction state machine
//!
//! Three writers compete for the scroll offset: the pointer while dragging,
//! the momentum timer after a fling, and the animation clock while snapping.
//! Only one of them is ever live. The transient state of each writer is the
//! payload of a single [`Motion`] variant, so entering a mode necessarily
//! drops the previous one, and every transition reports the callback chain
//! it ended through [`Directives`].

use std::time::Instant;

use log::{debug, trace};

use crate::config::{CarouselConfig, ConfigError};
use crate::indicator;
use crate::layout::TrackLayout;
use crate::momentum::MomentumRun;
use crate::pointer::DragSession;
use crate::schedule::{
    Directives, HandleMint, ScheduledTask, TaskHandle, TaskKind,
};
use crate::snap::SnapAnimation;
use crate::snapshot::CarouselSnapshot;

/// Which writer currently owns the scroll offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging,
    Momentum,
    Snapping,
}

/// Pointer cursor the host should show over the track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CursorHint {
    #[default]
    Grab,
    Grabbing,
}

#[derive(Debug, Clone, PartialEq)]
enum Motion {
    Idle,
    Dragging(DragSession),
    Momentum {
        run: MomentumRun,
        timer: TaskHandle,
    },
    Snapping {
        animation: SnapAnimation,
        clock: TaskHandle,
    },
}

impl Motion {
    fn state(&self) -> InteractionState {
        match self {
            Self::Idle => InteractionState::Idle,
            Self::Dragging(_) => InteractionState::Dragging,
            Self::Momentum { .. } => InteractionState::Momentum,
            Self::Snapping { .. } => InteractionState::Snapping,
        }
    }

    /// Callback chain driving this mode, if any.
    fn task(&self) -> Option<TaskHandle> {
        match self {
            Self::Idle | Self::Dragging(_) => None,
            Self::Momentum { timer, .. } => Some(*timer),
            Self::Snapping { clock, .. } => Some(*clock),
        }
    }
}

/// Horizontal paginated scroll control.
#[derive(Debug, Clone)]
pub struct Carousel {
    config: CarouselConfig,
    container_width: f32,
    item_count: usize,
    /// Authoritative horizontal position
    scroll_offset: f32,
    motion: Motion,
    handles: HandleMint,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(CarouselConfig::default())
    }
}

impl Carousel {
    /// Create an idle, empty carousel at offset 0.
    ///
    /// `config` is used as given; prefer [`Carousel::try_new`] for values
    /// that did not come from defaults or presets.
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            container_width: 0.0,
            item_count: 0,
            scroll_offset: 0.0,
            motion: Motion::Idle,
            handles: HandleMint::default(),
        }
    }

    pub fn try_new(config: CarouselConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn with_container_width(mut self, width: f32) -> Self {
        self.container_width = width;
        self
    }

    pub fn with_item_count(mut self, count: usize) -> Self {
        self.item_count = count;
        self
    }

    // ========== CONFIGURATION AND LAYOUT ==========

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Replace configuration after validating it. Takes effect on the next
    /// sample, tick or frame; a run already in progress keeps its start
    /// values. A rejected config leaves the current one in place.
    pub fn try_set_config(
        &mut self,
        config: CarouselConfig,
    ) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        debug!(
            "carousel config updated: stride {} visible {}",
            self.config.stride(),
            self.visible_count()
        );
        Ok(())
    }

    /// The container was resized. Only the visible count follows; the scroll
    /// offset and any running interaction are left alone.
    pub fn resize(&mut self, container_width: f32) {
        self.container_width = container_width;
        trace!(
            "carousel resized to {container_width}, visible {}",
            self.visible_count()
        );
    }

    /// The item sequence changed length.
    pub fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
        trace!("carousel item count now {count}");
    }

    pub fn layout(&self) -> TrackLayout {
        TrackLayout::new(
            self.config.item_width,
            self.config.gap,
            self.container_width,
            self.item_count,
        )
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn max_scroll_offset(&self) -> f32 {
        self.layout().max_scroll_offset()
    }

    pub fn visible_count(&self) -> usize {
        self.layout().visible_count()
    }

    // ========== INTERACTION STATE ==========

    pub fn interaction_state(&self) -> InteractionState {
        self.motion.state()
    }

    pub fn cursor(&self) -> CursorHint {
        match self.motion {
            Motion::Dragging(_) => CursorHint::Grabbing,
            _ => CursorHint::Grab,
        }
    }

    /// Handle of the momentum timer or frame clock currently driving the
    /// offset.
    pub fn active_task(&self) -> Option<TaskHandle> {
        self.motion.task()
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        match &self.motion {
            Motion::Dragging(session) => Some(session),
            _ => None,
        }
    }

    pub fn momentum_run(&self) -> Option<&MomentumRun> {
        match &self.motion {
            Motion::Momentum { run, .. } => Some(run),
            _ => None,
        }
    }

    pub fn snap_animation(&self) -> Option<&SnapAnimation> {
        match &self.motion {
            Motion::Snapping { animation, .. } => Some(animation),
            _ => None,
        }
    }

    /// Leave the current mode, returning the chain that must be cancelled.
    fn leave_mode(&mut self) -> Option<TaskHandle> {
        std::mem::replace(&mut self.motion, Motion::Idle).task()
    }

    /// Stop whatever is moving the track and rest at the current offset.
    pub fn halt(&mut self) -> Directives {
        let from = self.interaction_state();
        let cancel = self.leave_mode();
        if from != InteractionState::Idle {
            debug!(
                "carousel {from:?} -> Idle (halted at {:.1})",
                self.scroll_offset
            );
        }
        Directives {
            cancel,
            schedule: None,
        }
    }

    // ========== POINTER ==========

    /// Pointer went down at `x`. Preempts momentum and snapping.
    pub fn drag_start(&mut self, x: f32, at: Instant) -> Directives {
        let from = self.interaction_state();
        let cancel = self.leave_mode();
        self.motion =
            Motion::Dragging(DragSession::begin(self.scroll_offset, x, at));
        debug!(
            "carousel {from:?} -> Dragging at offset {:.1}",
            self.scroll_offset
        );
        Directives {
            cancel,
            schedule: None,
        }
    }

    /// Pointer moved while down. Returns false when no drag is live.
    pub fn drag_move(&mut self, x: f32, at: Instant) -> bool {
        let layout = self.layout();
        let Motion::Dragging(session) = &mut self.motion else {
            trace!("ignoring pointer move without a drag");
            return false;
        };
        let requested = session.sample(
            x,
            at,
            self.config.drag_gain,
            self.config.velocity_frame_ms,
        );
        self.scroll_offset =
            layout.clamp_offset_from(requested, session.anchor_offset());
        true
    }

    /// Pointer released or left. Hands the residual velocity to momentum
    /// when it is fast enough, otherwise comes to rest.
    pub fn drag_end(&mut self) -> Directives {
        let Motion::Dragging(session) = &self.motion else {
            trace!("ignoring pointer release without a drag");
            return Directives::none();
        };
        let velocity = session.velocity();

        match MomentumRun::launch(velocity, self.config.velocity_stop_threshold)
        {
            Some(run) => {
                let timer = self.handles.mint();
                self.motion = Motion::Momentum { run, timer };
                debug!(
                    "carousel Dragging -> Momentum ({velocity:.2} px/tick, {timer})"
                );
                Directives {
                    cancel: None,
                    schedule: Some(ScheduledTask {
                        handle: timer,
                        kind: TaskKind::MomentumTimer {
                            interval: self.config.momentum_interval(),
                        },
                    }),
                }
            }
            None => {
                self.motion = Motion::Idle;
                debug!("carousel Dragging -> Idle ({velocity:.2} px/tick)");
                Directives::none()
            }
        }
    }

    // ========== SCHEDULED CALLBACKS ==========

    /// One momentum timer tick. Ticks from any chain other than the live
    /// momentum run are dropped and answered with a cancel for that chain.
    pub fn momentum_tick(&mut self, handle: TaskHandle) -> Directives {
        let friction = self.config.friction;
        let threshold = self.config.velocity_stop_threshold;
        let stepped = match &mut self.motion {
            Motion::Momentum { run, timer } if *timer == handle => {
                let delta = run.step(friction);
                Some((delta, run.is_spent(threshold)))
            }
            _ => None,
        };
        let Some((delta, spent)) = stepped else {
            trace!("dropping stale momentum tick from {handle}");
            return Directives::cancel(handle);
        };

        self.scroll_offset = self
            .layout()
            .clamp_offset_from(self.scroll_offset + delta, self.scroll_offset);

        if spent {
            self.motion = Motion::Idle;
            debug!(
                "carousel Momentum -> Idle at offset {:.1}",
                self.scroll_offset
            );
            return Directives::cancel(handle);
        }
        Directives::none()
    }

    /// One animation clock frame. Frames from any chain other than the live
    /// snap are dropped and answered with a cancel for that chain.
    pub fn frame(&mut self, handle: TaskHandle, now: Instant) -> Directives {
        let sampled = match &mut self.motion {
            Motion::Snapping { animation, clock } if *clock == handle => {
                Some(animation.sample(now))
            }
            _ => None,
        };
        let Some(frame) = sampled else {
            trace!("dropping stale frame from {handle}");
            return Directives::cancel(handle);
        };

        self.scroll_offset = frame.offset;

        if frame.finished {
            self.motion = Motion::Idle;
            debug!(
                "carousel Snapping -> Idle at offset {:.1}",
                self.scroll_offset
            );
            return Directives::cancel(handle);
        }
        Directives::none()
    }

    // ========== NAVIGATION ==========

    /// Animate to the item at `index`, preempting momentum or an earlier
    /// snap. Out-of-range indices clamp to the last item. No-op on an empty
    /// track or while the pointer owns the offset.
    pub fn snap_to(&mut self, index: usize) -> Directives {
        if self.item_count == 0 {
            trace!("ignoring snap on an empty carousel");
            return Directives::none();
        }
        if matches!(self.motion, Motion::Dragging(_)) {
            trace!("ignoring snap to {index} while dragging");
            return Directives::none();
        }
        let index = index.min(self.item_count - 1);

        let from = self.interaction_state();
        let cancel = self.leave_mode();
        let target = self.layout().offset_for_index(index);
        let clock = self.handles.mint();
        self.motion = Motion::Snapping {
            animation: SnapAnimation::new(
                self.scroll_offset,
                target,
                index,
                self.config.snap_duration(),
                self.config.snap_easing,
            ),
            clock,
        };
        debug!(
            "carousel {from:?} -> Snapping to {index} ({:.1} -> {target:.1}, {clock})",
            self.scroll_offset
        );
        Directives {
            cancel,
            schedule: Some(ScheduledTask {
                handle: clock,
                kind: TaskKind::FrameClock,
            }),
        }
    }

    /// Snap one item back. No-op at the first item.
    pub fn scroll_prev(&mut self) -> Directives {
        if !self.can_scroll_prev() {
            return Directives::none();
        }
        self.snap_to(self.current_index() - 1)
    }

    /// Snap one item forward. No-op at the last item.
    pub fn scroll_next(&mut self) -> Directives {
        if !self.can_scroll_next() {
            return Directives::none();
        }
        self.snap_to(self.current_index() + 1)
    }

    // ========== DERIVED STATE ==========

    pub fn current_index(&self) -> usize {
        indicator::current_index(self.scroll_offset, &self.layout())
    }

    pub fn is_dot_lit(&self, index: usize) -> bool {
        indicator::is_dot_lit(index, self.scroll_offset, &self.layout())
    }

    pub fn indicators(&self) -> Vec<bool> {
        indicator::lit_dots(self.scroll_offset, &self.layout())
    }

    pub fn is_at_end(&self) -> bool {
        indicator::is_at_end(self.scroll_offset, &self.layout())
    }

    /// Whether `index` is the focused item (rendered at full scale).
    pub fn is_focused(&self, index: usize) -> bool {
        self.item_count > 0 && index == self.current_index()
    }

    pub fn can_scroll_prev(&self) -> bool {
        self.item_count > 0 && self.current_index() > 0
    }

    pub fn can_scroll_next(&self) -> bool {
        self.item_count > 0 && self.current_index() < self.item_count - 1
    }

    /// Everything a host needs to render the current state.
    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            scroll_offset: self.scroll_offset,
            current_index: self.current_index(),
            visible_count: self.visible_count(),
            item_count: self.item_count,
            interaction_state: self.interaction_state(),
            indicators: self.indicators(),
            at_end: self.is_at_end(),
            can_scroll_prev: self.can_scroll_prev(),
            can_scroll_next: self.can_scroll_next(),
            cursor: self.cursor(),
        }
    }
}
