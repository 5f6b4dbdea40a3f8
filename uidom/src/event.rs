//! Keyboard input as seen by widgets.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Keys the widgets react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
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
}

impl Key {
    /// The character this key types for typeahead. Space and control
    /// characters do not count.
    pub fn printable(&self) -> Option<char> {
        match *self {
            Self::Char(c) if c != ' ' && !c.is_control() => Some(c),
            _ => None,
        }
    }

    /// Key and modifiers of a crossterm press. Releases, repeats and
    /// unmapped codes give `None`.
    pub fn from_crossterm(event: &KeyEvent) -> Option<(Key, Modifiers)> {
        if event.kind != KeyEventKind::Press {
            return None;
        }
        let key = Key::try_from(event.code).ok()?;
        Some((key, Modifiers::from(event.modifiers)))
    }
}

impl TryFrom<KeyCode> for Key {
    type Error = KeyCode;

    fn try_from(code: KeyCode) -> Result<Self, Self::Error> {
        Ok(match code {
            KeyCode::Char(c) => Self::Char(c),
            KeyCode::Enter => Self::Enter,
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Tab => Self::Tab,
            KeyCode::BackTab => Self::BackTab,
            KeyCode::Esc => Self::Escape,
            KeyCode::Up => Self::Up,
            KeyCode::Down => Self::Down,
            KeyCode::Left => Self::Left,
            KeyCode::Right => Self::Right,
            KeyCode::Home => Self::Home,
            KeyCode::End => Self::End,
            KeyCode::PageUp => Self::PageUp,
            KeyCode::PageDown => Self::PageDown,
            other => return Err(other),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
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

    pub const fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    pub const fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    pub const fn alt() -> Self {
        Self {
            alt: true,
            ..Self::NONE
        }
    }

    /// No modifier is held.
    pub const fn none(&self) -> bool {
        !(self.shift || self.ctrl || self.alt)
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(flags: KeyModifiers) -> Self {
        Self {
            shift: flags.contains(KeyModifiers::SHIFT),
            ctrl: flags.contains(KeyModifiers::CONTROL),
            alt: flags.contains(KeyModifiers::ALT),
        }
    }
}
