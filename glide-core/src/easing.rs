//! Easing curves for time-progress animations

/// Easing function applied to snap progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Easing {
    Linear,
    EaseOutQuad,
    #[default]
    EaseInOutCubic,
}

impl Easing {
    pub const ALL: [Self; 3] =
        [Self::Linear, Self::EaseOutQuad, Self::EaseInOutCubic];

    /// Map linear progress `t` to eased progress. `t` is clamped to `[0, 1]`
    /// and the curve always satisfies `apply(0) == 0`, `apply(1) == 1`.
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

impl std::fmt::Display for Easing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::EaseOutQuad => write!(f, "Ease Out"),
            Self::EaseInOutCubic => write!(f, "Ease In/Out (cubic)"),
        }
    }
}
