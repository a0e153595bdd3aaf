//! tokio host adapter for `glide-core` carousels.
//!
//! [`CarouselDriver`] applies the engine's scheduling directives with
//! cancellable interval tasks and publishes snapshots over a watch channel.
//! [`CarouselSettings`] loads tuning overrides from the environment or a
//! TOML/JSON file.
#![allow(missing_docs)]

pub mod driver;
pub mod settings;

pub use driver::CarouselDriver;
pub use glide_core;
pub use settings::{CarouselSettings, SettingsSource};
