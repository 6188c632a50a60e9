use tracing::debug;

use ovro_core::token::{byte_offset, char_len};
use ovro_core::{CommitKey, Transliterate};

use crate::types::{CompositionState, KeyResponse, OverlayAction};
use crate::InputComposer;

impl<T: Transliterate> InputComposer<T> {
    /// Enter or Space: terminal transition for the current token. A
    /// commit while detached is a no-op for the whole notification.
    pub(crate) fn handle_commit(&mut self, key: CommitKey, caret: Option<usize>) -> KeyResponse {
        if self.surface.is_none() {
            return KeyResponse::not_consumed();
        }

        let caret = self.caret_or_end(caret);
        if self.state.is_composing() {
            self.commit_selected(key, caret)
        } else {
            self.commit_whole_value(key)
        }
    }

    /// Splice the selected suggestion over the trailing stack run ending
    /// at the caret; the caret lands right after the suggestion.
    fn commit_selected(&mut self, key: CommitKey, caret: usize) -> KeyResponse {
        let state = &self.state;
        let prefix_end = byte_offset(&state.value, caret);
        let prefix = &state.value[..prefix_end];

        let keep = char_len(prefix).saturating_sub(char_len(&state.stack));
        let without_stack = &prefix[..byte_offset(prefix, keep)];
        let suggestion = state
            .suggestions
            .get(state.selected)
            .cloned()
            .unwrap_or_default();
        let rest = &state.value[prefix_end..];

        let final_value = format!("{without_stack}{suggestion}{rest}");
        let new_caret = char_len(without_stack) + char_len(&suggestion);

        debug!(stack = %state.stack, %suggestion, "commit");
        self.finish_commit(final_value, Some(new_caret), key)
    }

    /// No active composition: run the oracle over the entire value and
    /// replace it wholesale. This is what makes content injected without
    /// per-keystroke composition (paste, programmatic edits)
    /// transliteratable. Skipped when the value is exactly the previous
    /// commit's output, so stable text is never transliterated twice.
    fn commit_whole_value(&mut self, key: CommitKey) -> KeyResponse {
        if self.last_commit.as_deref() == Some(self.state.value.as_str()) {
            let mut resp = KeyResponse::consumed();
            apply_commit_key(&mut resp, key);
            return resp;
        }

        let final_value = self.oracle.parse(&self.state.value);
        debug!(len = final_value.len(), "commit whole value");
        // Caret deliberately left where the surface has it.
        self.finish_commit(final_value, None, key)
    }

    /// Shared tail of both commit paths: reset composition, remember the
    /// committed output, recompute the anchor, build the response.
    fn finish_commit(
        &mut self,
        final_value: String,
        new_caret: Option<usize>,
        key: CommitKey,
    ) -> KeyResponse {
        self.state = CompositionState {
            value: final_value.clone(),
            stack: String::new(),
            suggestions: vec![String::new()],
            selected: 0,
            anchor: self.state.anchor,
        };
        self.last_commit = Some(final_value.clone());

        let mut resp = KeyResponse::consumed();
        resp.commit = Some(final_value);
        resp.caret = new_caret;
        resp.anchor =
            self.recompute_anchor(new_caret.unwrap_or_else(|| char_len(&self.state.value)));
        resp.overlay = OverlayAction::Hide;
        apply_commit_key(&mut resp, key);
        resp
    }
}

/// Enter suppresses the surface's newline insertion and is forwarded to
/// the embedder for its own submit handling; Space is left to insert
/// natively after the splice.
fn apply_commit_key(resp: &mut KeyResponse, key: CommitKey) {
    if key == CommitKey::Enter {
        resp.suppress_default = true;
        resp.forward_event = true;
    }
}
