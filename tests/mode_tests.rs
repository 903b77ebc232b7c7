use std::time::Duration;

use braille_chord::{ChordEngine, ChordMode};
mod support;
use support::mock_events::{ScriptedKeys, type_through};

const FAST: Duration = Duration::from_millis(10);
const PAUSE: Duration = Duration::from_millis(300);

#[test]
fn starts_inactive_and_passes_keys_through() {
    let mut mode = ChordMode::new(ChordEngine::new());
    assert!(!mode.is_active());

    let mut keys = ScriptedKeys::burst("fdj", FAST);
    assert_eq!(type_through(&mut mode, &mut keys), "fdj");
    assert!(keys.waits().is_empty());
}

#[test]
fn toggle_flips_state() {
    let mut mode = ChordMode::default();
    assert!(mode.toggle());
    assert!(mode.is_active());
    assert!(!mode.toggle());
    assert!(!mode.is_active());
}

#[test]
fn disabling_inactive_mode_is_a_no_op() {
    let mut mode = ChordMode::default();
    mode.disable();
    mode.disable();
    assert!(!mode.is_active());
    mode.enable();
    mode.enable();
    assert!(mode.is_active());
}

#[test]
fn chords_keep_mode_on() {
    let mut mode = ChordMode::default();
    mode.enable();

    let mut keys = ScriptedKeys::new()
        .then_burst("sdfj", FAST)
        .then(PAUSE, ' ')
        .then(PAUSE, 'f');
    assert_eq!(type_through(&mut mode, &mut keys), "⠏\u{2800}⠁");
    assert!(mode.is_active());
}

#[test]
fn unmapped_key_exits_and_later_keys_pass_through() {
    let mut mode = ChordMode::default();
    mode.enable();

    let mut keys = ScriptedKeys::new()
        .then_burst("fd", FAST)
        .then(FAST, 'x')
        .then(PAUSE, 'f')
        .then(FAST, 'd');
    assert_eq!(type_through(&mut mode, &mut keys), "⠃xfd");
    assert!(!mode.is_active());
}

#[test]
fn unmapped_first_key_exits() {
    let mut mode = ChordMode::default();
    mode.enable();

    let mut keys = ScriptedKeys::burst("?", FAST);
    assert_eq!(type_through(&mut mode, &mut keys), "?");
    assert!(!mode.is_active());
}

#[test]
fn reenabling_resumes_chords() {
    let mut mode = ChordMode::default();
    mode.enable();
    let mut keys = ScriptedKeys::burst("q", FAST);
    assert_eq!(type_through(&mut mode, &mut keys), "q");

    mode.enable();
    let mut keys = ScriptedKeys::burst("kl", FAST);
    assert_eq!(type_through(&mut mode, &mut keys), "⠰");
    assert!(mode.is_active());
}
