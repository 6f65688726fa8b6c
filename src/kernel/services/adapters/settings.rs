use crate::core::{Key, KeyCode, KeyModifiers};
use crate::kernel::services::ports::settings::Settings;
use std::path::{Path, PathBuf};

use super::keybinding::KeyMap;
use super::paths::get_config_dir;

const SETTINGS_FILE: &str = "settings.json";

pub fn get_settings_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(SETTINGS_FILE))
}

/// Reads settings from the default location. Missing or malformed files
/// yield `None`.
pub fn load_settings() -> Option<Settings> {
    load_settings_from(&get_settings_path()?)
}

pub fn load_settings_from(path: &Path) -> Option<Settings> {
    let data = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&data) {
        Ok(settings) => Some(settings),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings file");
            None
        }
    }
}

/// Applies the keybinding rules on top of `keys`. Returns how many rules were
/// applied; rules whose key does not parse are skipped.
pub fn apply_keybindings(keys: &mut KeyMap, settings: &Settings) -> usize {
    let mut applied = 0;
    for rule in &settings.keybindings {
        let Some(seq) = parse_key_sequence(&rule.key) else {
            tracing::warn!(key = %rule.key, "unparsable keybinding");
            continue;
        };
        keys.bind(seq, rule.command.trim());
        applied += 1;
    }
    applied
}

/// Parses a whitespace separated sequence such as `"ctrl+x ctrl+s"`.
pub fn parse_key_sequence(value: &str) -> Option<Vec<Key>> {
    let seq = value
        .split_whitespace()
        .map(parse_key)
        .collect::<Option<Vec<_>>>()?;
    (!seq.is_empty()).then_some(seq)
}

/// Parses one key such as `"ctrl+x"`, `"alt+<"` or `"pageup"`. Modifier
/// names are case-insensitive; a capital letter implies shift.
pub fn parse_key(value: &str) -> Option<Key> {
    let mut parts: Vec<&str> = value.split('+').map(str::trim).collect();
    let name = parts.pop().filter(|name| !name.is_empty())?;
    let mut modifiers = KeyModifiers::NONE;
    for part in parts {
        modifiers |= parse_modifier(part)?;
    }
    match parse_key_code(name)? {
        KeyCode::Char(ch) if ch.is_ascii_uppercase() => Some(Key::new(
            KeyCode::Char(ch.to_ascii_lowercase()),
            modifiers | KeyModifiers::SHIFT,
        )),
        code => Some(Key::new(code, modifiers)),
    }
}

fn parse_modifier(name: &str) -> Option<KeyModifiers> {
    match name.to_ascii_lowercase().as_str() {
        "ctrl" | "control" | "c" => Some(KeyModifiers::CONTROL),
        "alt" | "meta" | "option" | "m" => Some(KeyModifiers::ALT),
        "shift" | "s" => Some(KeyModifiers::SHIFT),
        _ => None,
    }
}

const NAMED_KEYS: &[(&str, KeyCode)] = &[
    ("enter", KeyCode::Enter),
    ("return", KeyCode::Enter),
    ("ret", KeyCode::Enter),
    ("tab", KeyCode::Tab),
    ("backtab", KeyCode::BackTab),
    ("esc", KeyCode::Esc),
    ("escape", KeyCode::Esc),
    ("backspace", KeyCode::Backspace),
    ("delete", KeyCode::Delete),
    ("del", KeyCode::Delete),
    ("up", KeyCode::Up),
    ("down", KeyCode::Down),
    ("left", KeyCode::Left),
    ("right", KeyCode::Right),
    ("home", KeyCode::Home),
    ("end", KeyCode::End),
    ("pageup", KeyCode::PageUp),
    ("prior", KeyCode::PageUp),
    ("pagedown", KeyCode::PageDown),
    ("next", KeyCode::PageDown),
    ("space", KeyCode::Char(' ')),
    ("spc", KeyCode::Char(' ')),
];

fn parse_key_code(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    let first = chars.next()?;
    if chars.next().is_none() {
        return Some(KeyCode::Char(first));
    }

    let lower = name.to_ascii_lowercase();
    if let Some(&(_, code)) = NAMED_KEYS.iter().find(|(key, _)| *key == lower) {
        return Some(code);
    }
    lower
        .strip_prefix('f')
        .and_then(|n| n.parse::<u8>().ok())
        .filter(|n| (1..=24).contains(n))
        .map(KeyCode::F)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
