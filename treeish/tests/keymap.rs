use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers,
};
use treeish::{Action, Event, Key, KeyCombo, KeyMap, Modifiers};

#[test]
fn test_default_bindings() {
    let keys = KeyMap::default();
    let none = Modifiers::NONE;

    assert_eq!(keys.action(Key::Up, none), Some(Action::LineUp));
    assert_eq!(keys.action(Key::Char('k'), none), Some(Action::LineUp));
    assert_eq!(keys.action(Key::Char('j'), none), Some(Action::LineDown));
    assert_eq!(keys.action(Key::PageDown, none), Some(Action::PageDown));
    assert_eq!(keys.action(Key::Char(' '), none), Some(Action::PageDown));
    assert_eq!(keys.action(Key::Char('u'), Modifiers::ctrl()), Some(Action::HalfPageUp));
    assert_eq!(keys.action(Key::Char('d'), none), Some(Action::HalfPageDown));
    assert_eq!(keys.action(Key::Home, none), Some(Action::GotoTop));
    assert_eq!(keys.action(Key::Enter, none), Some(Action::ToggleExpand));
    assert_eq!(keys.action(Key::Char('x'), none), None);
}

#[test]
fn test_shift_is_folded_into_characters() {
    let keys = KeyMap::default();
    assert_eq!(keys.action(Key::Char('G'), Modifiers::shift()), Some(Action::GotoBottom));
    assert_eq!(keys.action(Key::Char('G'), Modifiers::NONE), Some(Action::GotoBottom));
    // Not for named keys.
    assert_eq!(keys.action(Key::Up, Modifiers::shift()), None);
}

#[test]
fn test_ctrl_is_distinct() {
    let keys = KeyMap::default();
    assert_eq!(keys.action(Key::Char('j'), Modifiers::ctrl()), None);
}

#[test]
fn test_custom_bindings() {
    let mut keys = KeyMap::empty().with(KeyCombo::char('n'), Action::LineDown);
    assert_eq!(keys.action(Key::Char('n'), Modifiers::NONE), Some(Action::LineDown));
    assert_eq!(keys.action(Key::Down, Modifiers::NONE), None);

    assert_eq!(keys.unbind(KeyCombo::char('n')), Some(Action::LineDown));
    assert_eq!(keys.action(Key::Char('n'), Modifiers::NONE), None);
}

#[test]
fn test_merge_overrides() {
    let mut keys = KeyMap::default();
    keys.merge(KeyMap::empty().with(KeyCombo::key(Key::Enter), Action::GotoTop));

    assert_eq!(keys.action(Key::Enter, Modifiers::NONE), Some(Action::GotoTop));
    assert_eq!(keys.action(Key::Tab, Modifiers::NONE), Some(Action::ToggleExpand));
}

#[test]
fn test_keys_for() {
    let keys = KeyMap::default();
    let mut toggles = keys.keys_for(Action::ToggleExpand);
    toggles.sort_by_key(|combo| format!("{combo:?}"));
    assert_eq!(
        toggles,
        vec![KeyCombo::key(Key::Enter), KeyCombo::key(Key::Tab)]
    );
}

#[test]
fn test_unbound_keys_can_be_bound() {
    let keys = KeyMap::empty()
        .with(KeyCombo::key(Key::Left), Action::ToggleExpand)
        .with(KeyCombo::key(Key::F(5)), Action::GotoTop)
        .with(KeyCombo::key(Key::BackTab), Action::LineUp)
        .with(KeyCombo::key(Key::Delete).alt(), Action::GotoBottom);

    assert_eq!(keys.action(Key::Left, Modifiers::NONE), Some(Action::ToggleExpand));
    assert_eq!(keys.action(Key::F(5), Modifiers::NONE), Some(Action::GotoTop));
    assert_eq!(keys.action(Key::F(6), Modifiers::NONE), None);
    assert_eq!(keys.action(Key::BackTab, Modifiers::NONE), Some(Action::LineUp));
    assert_eq!(keys.action(Key::Delete, Modifiers::alt()), Some(Action::GotoBottom));
    assert_eq!(keys.action(Key::Delete, Modifiers::NONE), None);
}

fn key_event(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> CrosstermEvent {
    CrosstermEvent::Key(KeyEvent {
        code,
        modifiers,
        kind,
        state: KeyEventState::NONE,
    })
}

#[test]
fn test_from_crossterm() {
    let press = key_event(KeyCode::Right, KeyModifiers::NONE, KeyEventKind::Press);
    assert_eq!(Event::from_crossterm(&press), Some(Event::key(Key::Right)));

    let backspace = key_event(KeyCode::Backspace, KeyModifiers::CONTROL, KeyEventKind::Press);
    assert_eq!(
        Event::from_crossterm(&backspace),
        Some(Event::Key {
            key: Key::Backspace,
            modifiers: Modifiers::ctrl(),
        })
    );

    let f_key = key_event(KeyCode::F(2), KeyModifiers::NONE, KeyEventKind::Repeat);
    assert_eq!(Event::from_crossterm(&f_key), Some(Event::key(Key::F(2))));

    let release = key_event(KeyCode::Insert, KeyModifiers::NONE, KeyEventKind::Release);
    assert_eq!(Event::from_crossterm(&release), None);

    let unmapped = key_event(KeyCode::CapsLock, KeyModifiers::NONE, KeyEventKind::Press);
    assert_eq!(Event::from_crossterm(&unmapped), None);

    assert_eq!(
        Event::from_crossterm(&CrosstermEvent::Resize(80, 24)),
        Some(Event::Resize {
            width: 80,
            height: 24,
        })
    );
    assert_eq!(Event::from_crossterm(&CrosstermEvent::FocusLost), Some(Event::Blur));
}
