//! Key bindings for tree navigation.

use std::collections::HashMap;

use crate::event::{Key, Modifiers};

/// A navigation command the tree view understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    LineUp,
    LineDown,
    PageUp,
    PageDown,
    HalfPageUp,
    HalfPageDown,
    GotoTop,
    GotoBottom,
    ToggleExpand,
}

/// A key combination (key + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyCombo {
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// A key without modifiers.
    pub const fn key(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub const fn char(c: char) -> Self {
        Self::key(Key::Char(c))
    }

    pub const fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    pub const fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    /// Shift is already folded into the character for printable keys, so it
    /// is dropped there; `G` and `shift+G` are the same binding.
    fn normalized(mut self) -> Self {
        if matches!(self.key, Key::Char(_)) {
            self.modifiers.shift = false;
        }
        self
    }
}

/// Bindings from key combinations to [`Action`]s.
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: HashMap<KeyCombo, Action>,
}

impl KeyMap {
    /// A map without any binding.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind `combo` to `action`, replacing any previous binding of `combo`.
    pub fn bind(&mut self, combo: KeyCombo, action: Action) {
        self.bindings.insert(combo.normalized(), action);
    }

    /// Builder form of [`KeyMap::bind`].
    pub fn with(mut self, combo: KeyCombo, action: Action) -> Self {
        self.bind(combo, action);
        self
    }

    /// Remove the binding of `combo`, returning the action it pointed at.
    pub fn unbind(&mut self, combo: KeyCombo) -> Option<Action> {
        self.bindings.remove(&combo.normalized())
    }

    /// The action bound to a key press, if any.
    pub fn action(&self, key: Key, modifiers: Modifiers) -> Option<Action> {
        self.bindings
            .get(&KeyCombo::new(key, modifiers).normalized())
            .copied()
    }

    /// Every combo bound to `action`.
    pub fn keys_for(&self, action: Action) -> Vec<KeyCombo> {
        self.bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(combo, _)| *combo)
            .collect()
    }

    /// Merge another map into this one; its bindings win on conflict.
    pub fn merge(&mut self, other: KeyMap) {
        self.bindings.extend(other.bindings);
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        use Action::*;

        [
            (KeyCombo::key(Key::Up), LineUp),
            (KeyCombo::char('k'), LineUp),
            (KeyCombo::key(Key::Down), LineDown),
            (KeyCombo::char('j'), LineDown),
            (KeyCombo::key(Key::PageUp), PageUp),
            (KeyCombo::char('b'), PageUp),
            (KeyCombo::key(Key::PageDown), PageDown),
            (KeyCombo::char('f'), PageDown),
            (KeyCombo::char(' '), PageDown),
            (KeyCombo::char('u'), HalfPageUp),
            (KeyCombo::char('u').ctrl(), HalfPageUp),
            (KeyCombo::char('d'), HalfPageDown),
            (KeyCombo::char('d').ctrl(), HalfPageDown),
            (KeyCombo::key(Key::Home), GotoTop),
            (KeyCombo::char('g'), GotoTop),
            (KeyCombo::key(Key::End), GotoBottom),
            (KeyCombo::char('G'), GotoBottom),
            (KeyCombo::key(Key::Enter), ToggleExpand),
            (KeyCombo::key(Key::Tab), ToggleExpand),
        ]
        .into_iter()
        .fold(Self::empty(), |map, (combo, action)| map.with(combo, action))
    }
}
