use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};

/// Input the tree view reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Key press
    Key { key: Key, modifiers: Modifiers },
    /// Viewport resized
    Resize { width: u16, height: u16 },
    /// The view gained input focus
    Focus,
    /// The view lost input focus
    Blur,
}

impl Event {
    /// Key press without modifiers.
    pub fn key(key: Key) -> Self {
        Self::Key {
            key,
            modifiers: Modifiers::new(),
        }
    }

    /// Translate a raw terminal event. Key releases, mouse input and keys
    /// without a [`Key`] counterpart yield `None`.
    pub fn from_crossterm(event: &CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Key(KeyEvent {
                code,
                modifiers,
                kind,
                ..
            }) if *kind != KeyEventKind::Release => Some(Self::Key {
                key: Key::from_code(*code)?,
                modifiers: (*modifiers).into(),
            }),
            CrosstermEvent::Resize(width, height) => Some(Self::Resize {
                width: *width,
                height: *height,
            }),
            CrosstermEvent::FocusGained => Some(Self::Focus),
            CrosstermEvent::FocusLost => Some(Self::Blur),
            _ => None,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
}

impl Key {
    fn from_code(code: KeyCode) -> Option<Self> {
        let key = match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => return None,
        };
        Some(key)
    }
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    pub const fn new() -> Self {
        Self::NONE
    }

    pub const fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    pub const fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    pub const fn alt() -> Self {
        Self {
            alt: true,
            ..Self::NONE
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}
