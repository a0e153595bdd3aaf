//! Headless carousel interaction engine.
//!
//! A [`Carousel`] owns one horizontal scroll offset and arbitrates between
//! the three things that move it: a pointer drag, post-release momentum and
//! an eased snap to an item. The engine is synchronous and clock-free. Hosts
//! feed it [`CarouselMessage`]s (or call the transition methods directly),
//! run the timers described by the returned [`Directives`], and render from
//! [`Carousel::snapshot`].
//!
//! Notes
//! - Time enters only through the `Instant`s carried by pointer and frame
//!   messages, so every transition is deterministic under test.
//! - `glide-runtime` provides a tokio host that applies directives.
#![allow(missing_docs)]

pub mod carousel;
pub mod config;
pub mod constants;
pub mod easing;
pub mod indicator;
pub mod layout;
pub mod messages;
pub mod momentum;
pub mod pointer;
pub mod schedule;
pub mod snap;
pub mod snapshot;
pub mod update;

pub use carousel::{Carousel, CursorHint, InteractionState};
pub use config::{CarouselConfig, ConfigError, SnapPreset};
pub use easing::Easing;
pub use layout::{TrackLayout, compute_visible_count};
pub use messages::CarouselMessage;
pub use momentum::MomentumRun;
pub use pointer::DragSession;
pub use schedule::{Directives, ScheduledTask, TaskHandle, TaskKind};
pub use snap::{SnapAnimation, SnapFrame};
pub use snapshot::CarouselSnapshot;
pub use update::update;
