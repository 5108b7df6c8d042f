use super::*;

#[test]
fn test_key_code() {
    assert_eq!(key_code("a"), Some(4));
    assert_eq!(key_code("A"), Some(4));
    assert_eq!(key_code("z"), Some(0x1d));
    assert_eq!(key_code("1"), Some(0x1e));
    assert_eq!(key_code("0"), Some(0x27));
    assert_eq!(key_code("-"), Some(45));
    assert_eq!(key_code("\\"), Some(hid::BACKSLASH));
    assert_eq!(key_code("Left_Ctrl"), Some(0xe0));
    assert_eq!(key_code("page-down"), Some(hid::PAGE_DOWN));
    assert_eq!(key_code("F10"), Some(0x43));
    assert_eq!(key_code("f13"), None);
    assert_eq!(key_code("forwardslash"), Some(hid::SLASH));
    assert_eq!(key_code(""), None);
}

#[test]
fn no_key_names() {
    assert_eq!(key_code("_"), Some(key_range::NONE));
    assert_eq!(key_code("NoOp"), Some(key_range::NONE));
}

#[test]
fn test_key_name() {
    assert_eq!(key_name(hid::A), Some("a"));
    assert_eq!(key_name(hid::N0), Some("0"));
    assert_eq!(key_name(hid::F12), Some("F12"));
    assert_eq!(key_name(hid::ENTER), Some("Return"));
    assert_eq!(key_name(0xa0), None);

    for code in [hid::Q, hid::N5, hid::F3, hid::TAB, hid::RIGHT_GUI] {
        assert_eq!(key_code(key_name(code).unwrap()), Some(code));
    }
}

#[test]
fn modifiers() {
    assert!(key_range::is_modifier(hid::LEFT_CTRL));
    assert!(key_range::is_modifier(hid::RIGHT_GUI));
    assert!(!key_range::is_modifier(hid::UP));
    assert_eq!(key_range::modifier_bit(hid::LEFT_ALT), 0b100);
}
