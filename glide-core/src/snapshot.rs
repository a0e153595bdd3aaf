use crate::carousel::{CursorHint, InteractionState};

/// Render-ready view of a carousel at one instant.
///
/// Produced by [`Carousel::snapshot`](crate::Carousel::snapshot); every field
/// is derived from the scroll offset and layout at the time of the call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselSnapshot {
    pub scroll_offset: f32,
    pub current_index: usize,
    pub visible_count: usize,
    pub item_count: usize,
    pub interaction_state: InteractionState,
    /// Lit state of each indicator dot, in item order
    pub indicators: Vec<bool>,
    pub at_end: bool,
    pub can_scroll_prev: bool,
    pub can_scroll_next: bool,
    pub cursor: CursorHint,
}

impl CarouselSnapshot {
    pub fn is_idle(&self) -> bool {
        self.interaction_state == InteractionState::Idle
    }

    /// Indices of the lit indicator dots.
    pub fn lit_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.indicators
            .iter()
            .enumerate()
            .filter_map(|(i, lit)| lit.then_some(i))
    }
}
