//! Caret-relative token extraction and keystroke classification.
//!
//! All caret offsets are character offsets (Unicode scalar values);
//! `byte_offset` converts them to byte indices for slicing.

/// ASCII symbol characters the Avro scheme uses for script diacritics
/// and punctuation while composing: the `;=,-./`[\]'` keys, the shifted
/// digits, and their shifted forms. Typing one of these extends the
/// stack instead of ending it.
pub const DEFAULT_DIACRITIC_CHARS: &str = ";:=+,<.>-_/?`~[{]}\\|'\"!@#$%^&*()";

/// Key as delivered by the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A key that produced a literal character.
    Char(char),
    Enter,
    Space,
    Backspace,
    ArrowUp,
    ArrowDown,
    /// Anything else (modifiers, function keys, navigation).
    Other,
}

/// Discrete keystroke classes the composer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    /// Extends the composition stack.
    Word(char),
    /// Terminates the current token.
    Commit(CommitKey),
    /// Moves the suggestion selection.
    Cycle(CycleDir),
    /// Shortens the composition stack.
    Erase,
    /// Left entirely to the surface.
    Pass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitKey {
    Enter,
    Space,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDir {
    Up,
    Down,
}

/// True if `c` extends a phonetic token: ASCII alphanumeric, or one of
/// the configured diacritic characters.
pub fn is_word_char(c: char, extra: &str) -> bool {
    c.is_ascii_alphanumeric() || extra.contains(c)
}

/// Classify one keystroke. `extra` is the configured diacritic set
/// (`SessionConfig::extra_word_chars`).
pub fn classify(key: Key, extra: &str) -> KeyClass {
    match key {
        Key::Char(c) if is_word_char(c, extra) => KeyClass::Word(c),
        Key::Char(_) | Key::Other => KeyClass::Pass,
        Key::Enter => KeyClass::Commit(CommitKey::Enter),
        Key::Space => KeyClass::Commit(CommitKey::Space),
        Key::ArrowUp => KeyClass::Cycle(CycleDir::Up),
        Key::ArrowDown => KeyClass::Cycle(CycleDir::Down),
        Key::Backspace => KeyClass::Erase,
    }
}

/// Byte index of char offset `chars` in `s`, clamped to the end.
pub fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i)
}

/// Number of chars in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Maximal trailing run of `value` ending at the char offset `caret`
/// that contains no whitespace. Offsets past the end clamp to the end.
pub fn current_run(value: &str, caret: usize) -> &str {
    let end = byte_offset(value, caret);
    value[..end]
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_at_end() {
        assert_eq!(current_run("ami tumi", 8), "tumi");
    }

    #[test]
    fn run_mid_word() {
        assert_eq!(current_run("ami tumi", 6), "tu");
    }

    #[test]
    fn run_after_space_is_empty() {
        assert_eq!(current_run("ami ", 4), "");
    }

    #[test]
    fn run_splits_on_newline() {
        assert_eq!(current_run("ami\ntumi", 8), "tumi");
    }

    #[test]
    fn run_of_empty_value() {
        assert_eq!(current_run("", 0), "");
    }

    #[test]
    fn run_caret_past_end_clamps() {
        assert_eq!(current_run("ami", 99), "ami");
    }

    #[test]
    fn run_is_idempotent() {
        let value = "kichu\nlekha ekhane";
        for caret in 0..=char_len(value) {
            let run = current_run(value, caret);
            // Re-extracting from the same value/caret returns the same run,
            // and the run itself contains no whitespace.
            assert_eq!(current_run(value, caret), run);
            assert!(!run.chars().any(char::is_whitespace));
        }
    }

    #[test]
    fn run_with_multibyte_prefix() {
        // Committed Bangla before the caret, ASCII run after it.
        assert_eq!(current_run("আমি tu", 6), "tu");
    }

    #[test]
    fn classify_word_chars() {
        assert_eq!(
            classify(Key::Char('a'), DEFAULT_DIACRITIC_CHARS),
            KeyClass::Word('a')
        );
        assert_eq!(
            classify(Key::Char('7'), DEFAULT_DIACRITIC_CHARS),
            KeyClass::Word('7')
        );
        // Colon is part of the diacritic set (bisarga).
        assert_eq!(
            classify(Key::Char(':'), DEFAULT_DIACRITIC_CHARS),
            KeyClass::Word(':')
        );
    }

    #[test]
    fn classify_control_keys() {
        assert_eq!(
            classify(Key::Enter, DEFAULT_DIACRITIC_CHARS),
            KeyClass::Commit(CommitKey::Enter)
        );
        assert_eq!(
            classify(Key::Space, DEFAULT_DIACRITIC_CHARS),
            KeyClass::Commit(CommitKey::Space)
        );
        assert_eq!(
            classify(Key::ArrowUp, DEFAULT_DIACRITIC_CHARS),
            KeyClass::Cycle(CycleDir::Up)
        );
        assert_eq!(
            classify(Key::Backspace, DEFAULT_DIACRITIC_CHARS),
            KeyClass::Erase
        );
        assert_eq!(classify(Key::Other, DEFAULT_DIACRITIC_CHARS), KeyClass::Pass);
    }

    #[test]
    fn classify_respects_configured_set() {
        // With an empty diacritic set, punctuation no longer composes.
        assert_eq!(classify(Key::Char(':'), ""), KeyClass::Pass);
        assert_eq!(classify(Key::Char('a'), ""), KeyClass::Word('a'));
    }

    #[test]
    fn byte_offset_multibyte() {
        let s = "আমি x";
        assert_eq!(byte_offset(s, 0), 0);
        assert_eq!(byte_offset(s, 3), "আমি".len());
        assert_eq!(byte_offset(s, 99), s.len());
    }
}
