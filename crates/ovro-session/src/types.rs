use ovro_core::{CaretAnchor, Key};

/// Key event as delivered by the host surface: the key plus the caret
/// offset (in chars) at the time of the event. `None` means the host
/// could not read the selection; end-of-content is used instead.
#[derive(Debug, Clone, Copy)]
pub struct KeyEvent {
    pub key: Key,
    pub caret: Option<usize>,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self { key, caret: None }
    }

    pub fn at(key: Key, caret: usize) -> Self {
        Self {
            key,
            caret: Some(caret),
        }
    }
}

/// Full composition state. Handlers build the next state and assign it
/// wholesale; nothing outside the composer holds a mutable alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionState {
    /// Surface text, source of truth. Mutated only through commit or an
    /// external change notification.
    pub value: String,
    /// Phonetic token being composed; empty when idle. Always a suffix
    /// of the non-whitespace run ending at the caret.
    pub stack: String,
    /// Suggestion list; slot 0 is the live oracle output for `stack`
    /// (empty string when idle). Never empty.
    pub suggestions: Vec<String>,
    pub selected: usize,
    /// Overlay anchor from the last recompute.
    pub anchor: CaretAnchor,
}

impl CompositionState {
    pub(crate) fn new(initial_value: &str) -> Self {
        Self {
            value: initial_value.to_string(),
            stack: String::new(),
            suggestions: vec![String::new()],
            selected: 0,
            anchor: CaretAnchor::default(),
        }
    }

    pub fn is_composing(&self) -> bool {
        !self.stack.is_empty()
    }
}

/// Overlay update accompanying a response — exactly one of three
/// states, so "show and hide at once" is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayAction {
    /// Leave the overlay as-is.
    Keep,
    /// Show or refresh the overlay.
    Show {
        items: Vec<String>,
        selected: usize,
    },
    /// Hide the overlay.
    Hide,
}

/// Response from a notification handler. The host applies it to the
/// surface and the embedding application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    /// The engine reacted to the notification (state changed).
    pub consumed: bool,
    /// Final text, emitted exactly once per successful commit. The host
    /// replaces the surface content and notifies the embedder.
    pub commit: Option<String>,
    /// Caret offset (chars) to restore after applying `commit`.
    pub caret: Option<usize>,
    /// The surface's default edit for this key must be cancelled
    /// (Enter's newline insertion on commit).
    pub suppress_default: bool,
    /// Forward the raw key event to the embedding application (Enter
    /// only, for submit semantics).
    pub forward_event: bool,
    pub overlay: OverlayAction,
    /// Recomputed overlay anchor, when the caret moved.
    pub anchor: Option<CaretAnchor>,
}

impl KeyResponse {
    pub(crate) fn not_consumed() -> Self {
        Self {
            consumed: false,
            commit: None,
            caret: None,
            suppress_default: false,
            forward_event: false,
            overlay: OverlayAction::Keep,
            anchor: None,
        }
    }

    pub(crate) fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::not_consumed()
        }
    }
}

pub(crate) fn cyclic_index(current: usize, delta: i32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let c = current as i32;
    let n = count as i32;
    ((c + delta + n) % n) as usize
}
