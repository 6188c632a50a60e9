//! Stateful composition session for Avro phonetic input.
//!
//! `InputComposer` owns the composition state and processes each host
//! notification (key-down, content-changed, blur) synchronously, one at
//! a time, returning responses the host translates into surface edits,
//! overlay updates, and embedder callbacks.

mod commit;
mod key_handlers;
mod overlay;
mod types;

#[cfg(test)]
mod tests;

use tracing::debug;

use ovro_core::token::char_len;
use ovro_core::{resolve_caret, CaretAnchor, SessionConfig, SurfaceGeometry, Transliterate};

pub use ovro_core::{CommitKey, Key};
pub use overlay::{overlay_view, OverlayView};
pub use types::{CompositionState, KeyEvent, KeyResponse, OverlayAction};

/// The composition state machine: Idle when the stack is empty,
/// Composing otherwise. Detached until `attach` is called; commit keys
/// while detached are no-ops.
pub struct InputComposer<T: Transliterate> {
    oracle: T,
    config: SessionConfig,
    surface: Option<SurfaceGeometry>,
    state: CompositionState,
    /// Output of the most recent commit. A commit key with an empty
    /// stack and a value identical to this skips the whole-value
    /// fallback, so committed text is never transliterated twice.
    last_commit: Option<String>,
}

impl<T: Transliterate> InputComposer<T> {
    pub fn new(oracle: T, config: SessionConfig) -> Self {
        let state = CompositionState::new(&config.initial_value);
        Self {
            oracle,
            config,
            surface: None,
            state,
            last_commit: None,
        }
    }

    /// Attach to a surface: fresh state from the configured initial
    /// value, anchor at end-of-content.
    pub fn attach(&mut self, surface: SurfaceGeometry) -> KeyResponse {
        self.surface = Some(surface);
        self.state = CompositionState::new(&self.config.initial_value);
        self.last_commit = None;

        let mut resp = KeyResponse::consumed();
        resp.anchor = self.recompute_anchor(char_len(&self.state.value));
        resp
    }

    /// Detach from the surface, dropping all composition state.
    pub fn detach(&mut self) {
        debug!("detach");
        self.surface = None;
        self.state = CompositionState::new("");
        self.last_commit = None;
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    pub fn is_composing(&self) -> bool {
        self.state.is_composing()
    }

    pub fn state(&self) -> &CompositionState {
        &self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Presentation state for the suggestion overlay.
    pub fn overlay(&self) -> OverlayView {
        overlay_view(&self.state)
    }

    /// Content-changed notification from the surface: per-keystroke
    /// echo, paste, autocorrect, or programmatic edit. Stores the new
    /// value and re-derives suggestion slot 0 from the current stack;
    /// `handle_key` already refreshed the stack atomically, so call
    /// order between the two does not matter.
    pub fn handle_change(&mut self, value: &str, caret: Option<usize>) -> KeyResponse {
        let mut next = self.state.clone();
        next.value = value.to_string();
        next.suggestions[0] = self.oracle.parse(&next.stack);
        self.state = next;

        let mut resp = KeyResponse::consumed();
        if self.state.value.is_empty() {
            // Cleared field: the anchor must follow the caret home.
            resp.anchor = self.recompute_anchor(caret.unwrap_or(0));
        }
        resp.overlay = self.overlay_action();
        resp
    }

    /// Focus loss: abandon the in-progress composition without
    /// committing. Idempotent.
    pub fn handle_blur(&mut self) -> KeyResponse {
        self.state = CompositionState {
            value: self.state.value.clone(),
            stack: String::new(),
            suggestions: vec![String::new()],
            selected: 0,
            anchor: self.state.anchor,
        };

        let mut resp = KeyResponse::consumed();
        resp.overlay = OverlayAction::Hide;
        resp
    }

    /// Suggestion list for `stack`, slot 0 guaranteed present.
    pub(crate) fn candidates_for(&self, stack: &str) -> Vec<String> {
        let mut list = self.oracle.candidates(stack);
        if list.is_empty() {
            list.push(String::new());
        }
        list
    }

    /// Overlay action matching the current state: visible iff slot 0 is
    /// non-empty.
    pub(crate) fn overlay_action(&self) -> OverlayAction {
        if self.state.suggestions[0].is_empty() {
            OverlayAction::Hide
        } else {
            OverlayAction::Show {
                items: self.state.suggestions.clone(),
                selected: self.state.selected,
            }
        }
    }

    /// Recompute the overlay anchor for `caret`, if attached. Stores it
    /// in the state and returns it for the response.
    pub(crate) fn recompute_anchor(&mut self, caret: usize) -> Option<CaretAnchor> {
        let surface = self.surface.as_ref()?;
        let anchor = resolve_caret(surface, &self.state.value, caret, self.config.overlay.gap);
        self.state.anchor = anchor;
        Some(anchor)
    }

    /// Clamp an event caret to the content, falling back to
    /// end-of-content when the host could not read the selection.
    pub(crate) fn caret_or_end(&self, caret: Option<usize>) -> usize {
        let end = char_len(&self.state.value);
        caret.unwrap_or(end).min(end)
    }
}
