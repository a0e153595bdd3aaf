//! Index and page-indicator derivation
//!
//! Everything here is a pure function of the scroll offset and the track
//! layout. Nothing is cached, so the results cannot drift from the offset.

use crate::constants::layout::END_OF_TRACK_SLACK;
use crate::layout::TrackLayout;

/// Item whose start is nearest the left edge of the viewport, clamped to
/// `[0, item_count - 1]`. 0 for an empty track.
pub fn current_index(scroll_offset: f32, layout: &TrackLayout) -> usize {
    if layout.item_count == 0 {
        return 0;
    }
    let stride = layout.stride();
    if !(stride > 0.0) || !scroll_offset.is_finite() {
        return 0;
    }
    let raw = (scroll_offset / stride).round();
    let last = layout.item_count - 1;
    if raw <= 0.0 {
        0
    } else {
        (raw as usize).min(last)
    }
}

/// Whether the viewport's right edge has reached the end of the content,
/// allowing [`END_OF_TRACK_SLACK`] for rounding.
pub fn is_at_end(scroll_offset: f32, layout: &TrackLayout) -> bool {
    if layout.item_count == 0 {
        return false;
    }
    scroll_offset + layout.container_width
        >= layout.total_width() - END_OF_TRACK_SLACK
}

/// Whether indicator dot `index` should render lit.
///
/// Dots for the `visible_count` items starting at the current index are lit.
/// When the track sits at its end, the last `visible_count` dots are lit as
/// well: rounding the offset to an index under-lights them whenever the final
/// page is narrower than a full page.
pub fn is_dot_lit(
    index: usize,
    scroll_offset: f32,
    layout: &TrackLayout,
) -> bool {
    let count = layout.item_count;
    if index >= count {
        return false;
    }
    let visible = layout.visible_count();
    let current = current_index(scroll_offset, layout);
    let in_window =
        index >= current && index < current.saturating_add(visible);
    in_window
        || (is_at_end(scroll_offset, layout)
            && index >= count.saturating_sub(visible))
}

/// Lit state for every dot, in item order.
pub fn lit_dots(scroll_offset: f32, layout: &TrackLayout) -> Vec<bool> {
    (0..layout.item_count)
        .map(|i| is_dot_lit(i, scroll_offset, layout))
        .collect()
}
