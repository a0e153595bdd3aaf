//! Carousel settings with optional overrides
//!
//! Every field is `None` by default and falls back to the compiled constant
//! in `glide_core::constants`. [`CarouselSettings::to_config`] turns the
//! overrides into a validated [`CarouselConfig`].

use anyhow::{Context, anyhow};
use glide_core::constants::{drag, frame, layout, momentum};
use glide_core::{CarouselConfig, ConfigError, Easing, SnapPreset};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

/// Environment variable naming a TOML or JSON settings file.
pub const CONFIG_PATH_ENV: &str = "GLIDE_CONFIG_PATH";
/// Environment variable holding inline JSON settings.
pub const CONFIG_JSON_ENV: &str = "GLIDE_CONFIG_JSON";

/// Source that produced the carousel settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SettingsSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// On-disk encodings accepted for settings files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsFormat {
    Toml,
    Json,
}

impl SettingsFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// User-adjustable carousel tuning.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselSettings {
    // ========== LAYOUT ==========
    /// Width of one item (px)
    pub item_width: Option<f32>,
    /// Gap between items (px)
    pub gap: Option<f32>,

    // ========== DRAG ==========
    /// Pointer travel amplification
    pub drag_gain: Option<f32>,
    /// Velocity normalisation window (ms)
    pub velocity_frame_ms: Option<f32>,

    // ========== MOMENTUM ==========
    /// Per-tick velocity multiplier, in (0, 1)
    pub friction: Option<f32>,
    /// Momentum stops below this speed (px per tick)
    pub velocity_stop_threshold: Option<f32>,
    /// Momentum timer period (ms)
    pub momentum_interval_ms: Option<u64>,

    // ========== SNAP ==========
    /// Named snap duration; `snap_duration_ms` wins when both are set
    pub snap_preset: Option<SnapPreset>,
    /// Snap duration (ms)
    pub snap_duration_ms: Option<u64>,
    /// Snap easing curve
    pub snap_easing: Option<Easing>,

    // ========== HOST ==========
    /// Animation clock period (ms)
    pub frame_interval_ms: Option<u64>,
}

impl CarouselSettings {
    pub fn item_width(&self) -> f32 {
        self.item_width.unwrap_or(layout::ITEM_WIDTH)
    }

    pub fn gap(&self) -> f32 {
        self.gap.unwrap_or(layout::GAP)
    }

    pub fn drag_gain(&self) -> f32 {
        self.drag_gain.unwrap_or(drag::GAIN)
    }

    pub fn velocity_frame_ms(&self) -> f32 {
        self.velocity_frame_ms.unwrap_or(drag::VELOCITY_FRAME_MS)
    }

    pub fn friction(&self) -> f32 {
        self.friction.unwrap_or(momentum::FRICTION)
    }

    pub fn velocity_stop_threshold(&self) -> f32 {
        self.velocity_stop_threshold
            .unwrap_or(momentum::VELOCITY_STOP_THRESHOLD)
    }

    pub fn momentum_interval_ms(&self) -> u64 {
        self.momentum_interval_ms.unwrap_or(momentum::TICK_MS)
    }

    pub fn snap_duration_ms(&self) -> u64 {
        self.snap_duration_ms.unwrap_or_else(|| {
            self.snap_preset.unwrap_or_default().duration_ms()
        })
    }

    pub fn snap_easing(&self) -> Easing {
        self.snap_easing.unwrap_or_default()
    }

    pub fn frame_interval_ms(&self) -> u64 {
        self.frame_interval_ms.unwrap_or(frame::INTERVAL_MS)
    }

    /// Animation clock period. Zero is bumped to 1ms so the clock can run.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms().max(1))
    }

    /// Resolve overrides against defaults and validate the result.
    pub fn to_config(&self) -> Result<CarouselConfig, ConfigError> {
        let config = CarouselConfig {
            item_width: self.item_width(),
            gap: self.gap(),
            drag_gain: self.drag_gain(),
            friction: self.friction(),
            velocity_stop_threshold: self.velocity_stop_threshold(),
            velocity_frame_ms: self.velocity_frame_ms(),
            momentum_interval_ms: self.momentum_interval_ms(),
            snap_duration_ms: self.snap_duration_ms(),
            snap_easing: self.snap_easing(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load settings overrides using environment variables.
    /// Evaluation order:
    /// 1) `$GLIDE_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$GLIDE_CONFIG_JSON` (inline JSON),
    /// 3) `glide.toml`, `glide.json` or `config/glide.toml` in the working
    ///    directory,
    /// 4) defaults.
    pub fn load_from_env() -> anyhow::Result<(Self, SettingsSource)> {
        if let Ok(path_str) = env::var(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let settings = Self::load_from_file(&path)?;
            return Ok((settings, SettingsSource::EnvPath(path)));
        }

        if let Ok(raw) = env::var(CONFIG_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("in ${CONFIG_JSON_ENV}"))?;
            return Ok((parsed, SettingsSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file() {
            let settings = Self::load_from_file(&path)?;
            return Ok((settings, SettingsSource::File(path)));
        }

        Ok((Self::default(), SettingsSource::Default))
    }

    /// Read a settings file. The format follows the extension; any other
    /// extension is sniffed.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("cannot read glide settings file {}", path.display())
        })?;
        let origin = path.display().to_string();

        match SettingsFormat::from_path(path) {
            Some(SettingsFormat::Json) => Self::parse_json(&contents)
                .with_context(|| format!("in glide settings file {origin}")),
            Some(SettingsFormat::Toml) => Self::parse_toml(&contents, &origin),
            None => Self::parse_from_str(&contents, &origin),
        }
    }

    /// Parse settings of unknown format: TOML first, then JSON.
    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        let as_toml = match toml::from_str(contents) {
            Ok(settings) => return Ok(settings),
            Err(err) => err,
        };
        serde_json::from_str(contents).map_err(|as_json| {
            anyhow!(
                "{origin} is neither TOML nor JSON carousel settings \
                 (as TOML: {}; as JSON: {as_json})",
                as_toml.message()
            )
        })
    }

    fn parse_toml(contents: &str, origin: &str) -> anyhow::Result<Self> {
        toml::from_str(contents)
            .map_err(|err| anyhow!("bad carousel setting in {origin}: {err}"))
    }

    /// Parse inline JSON. Unknown keys are rejected and named in the error.
    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("bad carousel setting in JSON: {err}"))
    }

    fn find_default_file() -> Option<PathBuf> {
        const CANDIDATES: &[&str] =
            &["glide.toml", "glide.json", "config/glide.toml"];

        CANDIDATES
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .map(Path::to_path_buf)
    }
}
