use super::*;

#[test]
fn test_key_creation() {
    let key = Key::ctrl(KeyCode::Char('s'));
    assert_eq!(key.code, KeyCode::Char('s'));
    assert_eq!(key.modifiers, KeyModifiers::CONTROL);
}

#[test]
fn test_modifier_set_operations() {
    let mods = KeyModifiers::CONTROL | KeyModifiers::SHIFT;
    assert!(mods.contains(KeyModifiers::CONTROL));
    assert!(!mods.contains(KeyModifiers::ALT));
    assert_eq!(mods.without(KeyModifiers::SHIFT), KeyModifiers::CONTROL);
    assert!(KeyModifiers::NONE.is_empty());
}

#[test]
fn test_from_char_normalizes_capitals() {
    assert_eq!(Key::from_char('a'), Key::simple(KeyCode::Char('a')));
    assert_eq!(Key::from_char('A'), Key::shift(KeyCode::Char('a')));
    assert_eq!(Key::from_char('!'), Key::simple(KeyCode::Char('!')));
}

#[test]
fn test_printable() {
    assert_eq!(Key::from_char('x').printable(), Some('x'));
    assert_eq!(Key::from_char('X').printable(), Some('X'));
    assert_eq!(Key::simple(KeyCode::Char(' ')).printable(), Some(' '));
    assert_eq!(Key::ctrl(KeyCode::Char('x')).printable(), None);
    assert_eq!(Key::alt(KeyCode::Char('w')).printable(), None);
    assert_eq!(Key::simple(KeyCode::Enter).printable(), None);
    assert_eq!(Key::simple(KeyCode::Char('\u{7}')).printable(), None);
}

#[test]
fn test_display_names() {
    assert_eq!(Key::ctrl(KeyCode::Char('x')).to_string(), "C-x");
    assert_eq!(Key::alt(KeyCode::Char('<')).to_string(), "M-<");
    assert_eq!(Key::ctrl(KeyCode::Char(' ')).to_string(), "C-SPC");
    assert_eq!(Key::from_char('Q').to_string(), "Q");
    assert_eq!(Key::simple(KeyCode::Enter).to_string(), "RET");
    assert_eq!(Key::simple(KeyCode::PageUp).to_string(), "<prior>");
    assert_eq!(Key::shift(KeyCode::Tab).to_string(), "S-TAB");
    assert_eq!(Key::simple(KeyCode::F(5)).to_string(), "<f5>");
}

#[test]
fn test_describe_keys() {
    let keys = [Key::ctrl(KeyCode::Char('x')), Key::from_char('h')];
    assert_eq!(describe_keys(&keys), "C-x h");
    assert_eq!(describe_keys(&[]), "");
}
