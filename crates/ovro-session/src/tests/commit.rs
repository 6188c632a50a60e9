use ovro_core::{Identity, TableTransliterator, Transliterate};

use super::{config_with_value, test_config, test_geometry, HeadlessSurface};
use crate::{InputComposer, Key, KeyEvent};

fn hello_oracle(token: &str) -> String {
    if token == "hello world" {
        "X".to_string()
    } else {
        token.to_string()
    }
}

#[test]
fn enter_with_empty_stack_runs_oracle_over_whole_value() {
    let oracle = hello_oracle;
    let mut composer = InputComposer::new(oracle, config_with_value("hello world"));
    let mut surface = HeadlessSurface::attach(&mut composer, test_geometry());

    let resp = surface.press(&mut composer, Key::Enter);

    assert_eq!(resp.commit.as_deref(), Some("X"));
    assert_eq!(resp.caret, None);
    assert_eq!(composer.state().value, "X");
    assert_eq!(composer.state().stack, "");
}

#[test]
fn enter_suppresses_default_and_forwards() {
    let mut composer = InputComposer::new(TableTransliterator::new(), test_config());
    let mut surface = HeadlessSurface::attach(&mut composer, test_geometry());

    surface.type_str(&mut composer, "ami");
    let resp = surface.press(&mut composer, Key::Enter);

    assert!(resp.suppress_default);
    assert!(resp.forward_event);
    // No newline made it into the surface.
    assert_eq!(surface.value, "আমি");
}

#[test]
fn space_commit_neither_suppresses_nor_forwards() {
    let mut composer = InputComposer::new(TableTransliterator::new(), test_config());
    let mut surface = HeadlessSurface::attach(&mut composer, test_geometry());

    surface.type_str(&mut composer, "ami");
    let resp = surface.press(&mut composer, Key::Space);

    assert!(!resp.suppress_default);
    assert!(!resp.forward_event);
}

#[test]
fn commit_notifies_exactly_once_for_stable_value() {
    let mut composer = InputComposer::new(TableTransliterator::new(), test_config());
    let mut surface = HeadlessSurface::attach(&mut composer, test_geometry());

    surface.type_str(&mut composer, "ami");
    let first = surface.press(&mut composer, Key::Enter);
    assert_eq!(first.commit.as_deref(), Some("আমি"));

    // A second Enter with nothing composing and the value untouched
    // must not re-transliterate the committed text.
    let second = surface.press(&mut composer, Key::Enter);
    assert_eq!(second.commit, None);
    assert!(second.suppress_default);
    assert!(second.forward_event);
    assert_eq!(composer.state().value, "আমি");
}

#[test]
fn external_edit_rearms_the_fallback() {
    let mut composer = InputComposer::new(TableTransliterator::new(), test_config());
    let mut surface = HeadlessSurface::attach(&mut composer, test_geometry());

    surface.type_str(&mut composer, "ami");
    surface.press(&mut composer, Key::Enter);

    // Paste replaces the content without any keystrokes.
    surface.external_edit(&mut composer, "tumi");
    assert!(!composer.is_composing());

    let resp = surface.press(&mut composer, Key::Enter);
    assert_eq!(resp.commit.as_deref(), Some("তুমি"));
}

#[test]
fn identity_oracle_round_trips_value() {
    let mut composer = InputComposer::new(Identity, config_with_value("already here"));
    let mut surface = HeadlessSurface::attach(&mut composer, test_geometry());

    let resp = surface.press(&mut composer, Key::Enter);
    assert_eq!(resp.commit.as_deref(), Some("already here"));
    assert_eq!(composer.state().value, "already here");
}

#[test]
fn commit_while_detached_is_a_noop() {
    let mut composer = InputComposer::new(TableTransliterator::new(), config_with_value("ami"));

    let resp = composer.handle_key(KeyEvent::new(Key::Enter));
    assert!(!resp.consumed);
    assert_eq!(resp.commit, None);
    assert_eq!(composer.state().value, "ami");
}

#[test]
fn commit_resets_suggestions_to_single_empty_slot() {
    let mut composer = InputComposer::new(TableTransliterator::new(), test_config());
    let mut surface = HeadlessSurface::attach(&mut composer, test_geometry());

    surface.type_str(&mut composer, "ami");
    assert!(composer.state().suggestions.len() > 1);

    surface.press(&mut composer, Key::Space);
    // One empty slot: slot 0 is the oracle output for the empty stack.
    assert_eq!(composer.state().suggestions, vec![String::new()]);
    assert_eq!(composer.state().selected, 0);
}

#[test]
fn commit_recomputes_anchor() {
    let mut composer = InputComposer::new(TableTransliterator::new(), test_config());
    let mut surface = HeadlessSurface::attach(&mut composer, test_geometry());

    surface.type_str(&mut composer, "ami");
    let resp = surface.press(&mut composer, Key::Space);
    assert!(resp.anchor.is_some());
}

#[test]
fn oracle_contract_empty_in_empty_out() {
    // Both bundled oracles honor the empty-token contract the composer
    // relies on for overlay visibility.
    assert_eq!(TableTransliterator::new().parse(""), "");
    assert_eq!(Identity.parse(""), "");
}
