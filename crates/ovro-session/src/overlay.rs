//! Suggestion overlay presentation state.
//!
//! A pure derivation over `CompositionState`: the overlay is visible iff
//! suggestion slot 0 is non-empty, items render in natural order, and
//! the element at `selected` is the one the host distinguishes. No
//! deduplication, sorting, or ranking beyond what the oracle returned.

use ovro_core::CaretAnchor;

use crate::types::CompositionState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayView {
    pub visible: bool,
    pub items: Vec<String>,
    pub selected: usize,
    pub anchor: CaretAnchor,
}

pub fn overlay_view(state: &CompositionState) -> OverlayView {
    OverlayView {
        visible: state.suggestions.first().is_some_and(|s| !s.is_empty()),
        items: state.suggestions.clone(),
        selected: state.selected,
        anchor: state.anchor,
    }
}
