//! Key events as seen by the editor core.
//!
//! These types are owned by the core so the kernel never depends on a terminal
//! crate; `tui::crossterm` converts into them.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Tab,
    BackTab,
    Esc,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct KeyModifiers(u8);

impl KeyModifiers {
    pub const NONE: Self = Self(0);
    pub const SHIFT: Self = Self(0b001);
    pub const CONTROL: Self = Self(0b010);
    pub const ALT: Self = Self(0b100);

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
}

impl BitOr for KeyModifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for KeyModifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Key {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn alt(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::ALT)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    /// Key for a typed character. ASCII capitals are stored as the lowercase
    /// letter plus `SHIFT`, matching what the terminal layer produces.
    pub fn from_char(ch: char) -> Self {
        if ch.is_ascii_uppercase() {
            Self::shift(KeyCode::Char(ch.to_ascii_lowercase()))
        } else {
            Self::simple(KeyCode::Char(ch))
        }
    }

    /// The character this key inserts when it is not bound to a command.
    pub fn printable(&self) -> Option<char> {
        let KeyCode::Char(ch) = self.code else {
            return None;
        };
        if !self.modifiers.without(KeyModifiers::SHIFT).is_empty() || ch.is_control() {
            return None;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            Some(ch.to_ascii_uppercase())
        } else {
            Some(ch)
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            f.write_str("C-")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            f.write_str("M-")?;
        }
        let shift = self.modifiers.contains(KeyModifiers::SHIFT);
        match self.code {
            KeyCode::Char(' ') => f.write_str(if shift { "S-SPC" } else { "SPC" }),
            KeyCode::Char(ch) if shift => write!(f, "{}", ch.to_ascii_uppercase()),
            KeyCode::Char(ch) => write!(f, "{ch}"),
            code => {
                if shift {
                    f.write_str("S-")?;
                }
                let name = match code {
                    KeyCode::Enter => "RET",
                    KeyCode::Tab => "TAB",
                    KeyCode::BackTab => "<backtab>",
                    KeyCode::Esc => "ESC",
                    KeyCode::Backspace => "<backspace>",
                    KeyCode::Delete => "<delete>",
                    KeyCode::Up => "<up>",
                    KeyCode::Down => "<down>",
                    KeyCode::Left => "<left>",
                    KeyCode::Right => "<right>",
                    KeyCode::Home => "<home>",
                    KeyCode::End => "<end>",
                    KeyCode::PageUp => "<prior>",
                    KeyCode::PageDown => "<next>",
                    KeyCode::F(n) => return write!(f, "<f{n}>"),
                    KeyCode::Char(_) | KeyCode::Unknown => "<unknown>",
                };
                f.write_str(name)
            }
        }
    }
}

/// Renders a key sequence the way the status line and messages show it.
pub fn describe_keys(keys: &[Key]) -> String {
    keys.iter()
        .map(|key| key.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "../../tests/unit/core/event.rs"]
mod tests;
