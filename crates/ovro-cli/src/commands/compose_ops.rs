use std::path::Path;

use ovro_core::token::{byte_offset, char_len};
use ovro_core::{SessionConfig, SurfaceGeometry, SurfaceKind, Transliterate};
use ovro_session::{InputComposer, Key, KeyEvent};

/// Drive a composer through the key string against a simulated surface,
/// printing the state after every keypress, and finish with Enter.
pub fn run(keys: &str, multi_line: bool, width: u32, table: Option<&Path>) {
    let oracle = super::load_table(table);

    let kind = if multi_line {
        SurfaceKind::MultiLine
    } else {
        SurfaceKind::SingleLine
    };
    let config = SessionConfig {
        surface_kind: kind,
        ..SessionConfig::default()
    };
    let geometry = SurfaceGeometry {
        kind,
        origin_x: 0,
        origin_y: 0,
        content_width: width,
        content_height: if multi_line { 64 } else { 16 },
        cell_width: 8,
        line_height: 16,
    };

    let mut composer = InputComposer::new(oracle, config);
    composer.attach(geometry);
    let mut value = String::new();
    let mut caret = 0usize;

    for c in keys.chars() {
        let key = if c == ' ' { Key::Space } else { Key::Char(c) };
        let resp = composer.handle_key(KeyEvent::at(key, caret));

        if let Some(text) = &resp.commit {
            value = text.clone();
        }
        if let Some(offset) = resp.caret {
            caret = offset;
        }
        if !resp.suppress_default {
            value.insert(byte_offset(&value, caret), c);
            caret += 1;
        }
        caret = caret.min(char_len(&value));
        composer.handle_change(&value, Some(caret));

        print_step(&format!("'{c}'"), &composer, &value);
    }

    let resp = composer.handle_key(KeyEvent::at(Key::Enter, caret));
    if let Some(text) = &resp.commit {
        value = text.clone();
    }
    composer.handle_change(&value, Some(caret.min(char_len(&value))));
    print_step("enter", &composer, &value);
    println!("committed: {value}");
}

fn print_step<T: Transliterate>(label: &str, composer: &InputComposer<T>, value: &str) {
    let state = composer.state();
    let overlay = composer.overlay();
    let items = if overlay.visible {
        overlay.items.join(" | ")
    } else {
        "(hidden)".to_string()
    };
    println!(
        "{label:>7}  value={value:?}  stack={:?}  overlay=[{items}] sel={} anchor=({}, {})",
        state.stack, state.selected, state.anchor.x, state.anchor.y,
    );
}
