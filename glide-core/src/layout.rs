//! Track geometry: how many items fit and how far the track can scroll

/// Number of items concurrently visible in a container.
///
/// `max(1, round(container_width / (item_width + gap)))`. Degenerate inputs
/// (zero, negative or non-finite widths) clamp to 1.
pub fn compute_visible_count(
    container_width: f32,
    item_width: f32,
    gap: f32,
) -> usize {
    let stride = item_width + gap;
    if !(stride.is_finite() && stride > 0.0) {
        return 1;
    }
    let raw = (container_width / stride).round();
    if !raw.is_finite() || raw < 1.0 {
        return 1;
    }
    raw as usize
}

/// Geometry of the item track inside its container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackLayout {
    pub item_width: f32,
    pub gap: f32,
    pub container_width: f32,
    pub item_count: usize,
}

impl TrackLayout {
    pub fn new(
        item_width: f32,
        gap: f32,
        container_width: f32,
        item_count: usize,
    ) -> Self {
        Self {
            item_width,
            gap,
            container_width,
            item_count,
        }
    }

    #[inline]
    pub fn stride(&self) -> f32 {
        self.item_width + self.gap
    }

    /// Total scrollable content width, one stride per item.
    #[inline]
    pub fn total_width(&self) -> f32 {
        self.item_count as f32 * self.stride()
    }

    /// Largest offset a scroll viewport can reach; 0 when the content fits.
    #[inline]
    pub fn max_scroll_offset(&self) -> f32 {
        let max = self.total_width() - self.container_width;
        if max > 0.0 { max } else { 0.0 }
    }

    pub fn visible_count(&self) -> usize {
        compute_visible_count(self.container_width, self.item_width, self.gap)
    }

    /// Offset that left-aligns item `index`.
    #[inline]
    pub fn offset_for_index(&self, index: usize) -> f32 {
        index as f32 * self.stride()
    }

    /// Clamp an offset into `[0, max_scroll_offset]`.
    #[inline]
    pub fn clamp_offset(&self, offset: f32) -> f32 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_scroll_offset())
    }

    /// Clamp an offset reached by moving away from `origin`. When `origin`
    /// already sits past the end (a snap onto one of the final items), the
    /// ceiling is `origin` itself so the clamp alone never moves the track.
    #[inline]
    pub fn clamp_offset_from(&self, offset: f32, origin: f32) -> f32 {
        let ceiling = self.max_scroll_offset().max(origin);
        let offset = if offset.is_nan() { origin } else { offset };
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, ceiling)
    }
}
