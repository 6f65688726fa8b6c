//! Key bindings: key sequence → command name.
//!
//! A sequence can be bound while also being the prefix of a longer binding;
//! the exact binding wins.

use crate::core::{Key, KeyCode};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMatch<'a> {
    Exact(&'a str),
    /// More keys are needed to reach a binding.
    Prefix,
    None,
}

#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    bindings: FxHashMap<Vec<Key>, String>,
    /// Proper prefixes of bound sequences, with the number of bindings under each.
    prefixes: FxHashMap<Vec<Key>, usize>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let mut keys = Self::new();
        for (seq, command) in default_keybindings() {
            keys.bind(seq, command);
        }
        keys
    }

    pub fn bind(&mut self, seq: Vec<Key>, command: impl Into<String>) {
        if seq.is_empty() {
            return;
        }
        if !self.bindings.contains_key(&seq) {
            for len in 1..seq.len() {
                *self.prefixes.entry(seq[..len].to_vec()).or_insert(0) += 1;
            }
        }
        self.bindings.insert(seq, command.into());
    }

    pub fn unbind(&mut self, seq: &[Key]) -> Option<String> {
        let command = self.bindings.remove(seq)?;
        for len in 1..seq.len() {
            let prefix = &seq[..len];
            if let Some(count) = self.prefixes.get_mut(prefix) {
                *count -= 1;
                if *count == 0 {
                    self.prefixes.remove(prefix);
                }
            }
        }
        Some(command)
    }

    pub fn lookup(&self, seq: &[Key]) -> KeyMatch<'_> {
        if let Some(command) = self.bindings.get(seq) {
            KeyMatch::Exact(command)
        } else if self.prefixes.contains_key(seq) {
            KeyMatch::Prefix
        } else {
            KeyMatch::None
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[Key], &str)> {
        self.bindings
            .iter()
            .map(|(seq, command)| (seq.as_slice(), command.as_str()))
    }
}

fn ctrl(ch: char) -> Key {
    Key::ctrl(KeyCode::Char(ch))
}

fn alt(ch: char) -> Key {
    Key::alt(KeyCode::Char(ch))
}

fn default_keybindings() -> Vec<(Vec<Key>, &'static str)> {
    vec![
        (vec![ctrl('x'), ctrl('c')], "quit"),
        (vec![ctrl('x'), ctrl('s')], "save"),
        (vec![ctrl('x'), Key::simple(KeyCode::Char('h'))], "select-whole-buffer"),
        (vec![Key::simple(KeyCode::Up)], "move-up"),
        (vec![Key::simple(KeyCode::Down)], "move-down"),
        (vec![Key::simple(KeyCode::Left)], "move-left"),
        (vec![Key::simple(KeyCode::Right)], "move-right"),
        (vec![ctrl('p')], "move-up"),
        (vec![ctrl('n')], "move-down"),
        (vec![ctrl('b')], "move-left"),
        (vec![ctrl('f')], "move-right"),
        (vec![Key::simple(KeyCode::Home)], "move-beginning-of-line"),
        (vec![Key::simple(KeyCode::End)], "move-end-of-line"),
        (vec![ctrl('a')], "move-beginning-of-line"),
        (vec![ctrl('e')], "move-end-of-line"),
        (vec![alt('<')], "beginning-of-buffer"),
        (vec![alt('>')], "end-of-buffer"),
        (vec![Key::ctrl(KeyCode::Home)], "beginning-of-buffer"),
        (vec![Key::ctrl(KeyCode::End)], "end-of-buffer"),
        (vec![Key::simple(KeyCode::PageUp)], "page-up"),
        (vec![Key::simple(KeyCode::PageDown)], "page-down"),
        (vec![alt('v')], "page-up"),
        (vec![ctrl('v')], "page-down"),
        (vec![Key::simple(KeyCode::Enter)], "new-line"),
        (vec![Key::simple(KeyCode::Tab)], "insert-tab"),
        (vec![Key::simple(KeyCode::Backspace)], "delete-char"),
        (vec![Key::simple(KeyCode::Delete)], "delete-char-right"),
        (vec![ctrl('d')], "delete-char-right"),
        (vec![ctrl('k')], "kill-line"),
        (vec![ctrl('w')], "cut"),
        (vec![alt('w')], "copy"),
        (vec![ctrl('y')], "paste"),
        (vec![ctrl(' ')], "start-selection"),
        (vec![ctrl('g')], "clear-selection"),
    ]
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
