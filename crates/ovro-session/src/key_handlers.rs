use tracing::debug_span;

use ovro_core::token::char_len;
use ovro_core::{classify, current_run, CycleDir, KeyClass, Transliterate};

use crate::types::{cyclic_index, KeyEvent, KeyResponse};
use crate::InputComposer;

impl<T: Transliterate> InputComposer<T> {
    /// Process one keystroke. The full transition — classification,
    /// state update, suggestion refresh, optional anchor recompute —
    /// runs before this returns.
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyResponse {
        let _span = debug_span!("handle_key", key = ?event.key).entered();

        match classify(event.key, &self.config.extra_word_chars) {
            KeyClass::Word(c) => self.handle_word_char(c, event.caret),
            KeyClass::Commit(key) => self.handle_commit(key, event.caret),
            KeyClass::Cycle(dir) => self.handle_cycle(dir),
            KeyClass::Erase => self.handle_erase(event.caret),
            KeyClass::Pass => KeyResponse::not_consumed(),
        }
    }

    /// Word character: extend the stack with the typed character on top
    /// of the run ending at the caret, and refresh the suggestions in
    /// the same transition. The surface inserts the character natively.
    fn handle_word_char(&mut self, c: char, caret: Option<usize>) -> KeyResponse {
        let caret = self.caret_or_end(caret);
        let was_idle = !self.state.is_composing();

        let mut next = self.state.clone();
        next.stack = current_run(&next.value, caret).to_string();
        next.stack.push(c);
        next.suggestions = self.candidates_for(&next.stack);
        if next.selected >= next.suggestions.len() {
            next.selected = 0;
        }
        self.state = next;

        let mut resp = KeyResponse::consumed();
        if was_idle {
            // Composition start moves the caret into a new token.
            resp.anchor = self.recompute_anchor(caret);
        }
        resp.overlay = self.overlay_action();
        resp
    }

    /// Up/Down cycle the selection circularly. Only meaningful with
    /// more than one suggestion; otherwise the surface keeps the key.
    /// Never recomputes the anchor.
    fn handle_cycle(&mut self, dir: CycleDir) -> KeyResponse {
        let count = self.state.suggestions.len();
        if count <= 1 {
            return KeyResponse::not_consumed();
        }

        let delta = match dir {
            CycleDir::Up => -1,
            CycleDir::Down => 1,
        };
        let mut next = self.state.clone();
        next.selected = cyclic_index(next.selected, delta, count);
        self.state = next;

        let mut resp = KeyResponse::consumed();
        resp.suppress_default = true;
        resp.overlay = self.overlay_action();
        resp
    }

    /// Backspace: shorten the stack by one character. The surface still
    /// performs its own deletion. Erasing with an empty stack is a
    /// silent no-op.
    fn handle_erase(&mut self, caret: Option<usize>) -> KeyResponse {
        if !self.state.is_composing() {
            return KeyResponse::not_consumed();
        }

        let mut next = self.state.clone();
        next.stack.pop();
        next.suggestions = self.candidates_for(&next.stack);
        if next.selected >= next.suggestions.len() {
            next.selected = 0;
        }
        let emptied = next.stack.is_empty();
        self.state = next;

        let mut resp = KeyResponse::consumed();
        if emptied {
            // Composition cancelled; the overlay disappears and the
            // anchor must be current when it next shows.
            let caret = self.caret_or_end(caret).saturating_sub(1);
            resp.anchor = self.recompute_anchor(caret.min(char_len(&self.state.value)));
        }
        resp.overlay = self.overlay_action();
        resp
    }
}
