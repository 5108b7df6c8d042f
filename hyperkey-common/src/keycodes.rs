pub mod key_range {
    pub const NONE: u8 = 0;
    pub const BASIC_MIN: u8 = 0x4;
    pub const BASIC_A: u8 = 0x4;
    pub const BASIC_1: u8 = 0x1e;
    pub const BASIC_0: u8 = 0x27;
    pub const BASIC_F1: u8 = 0x3a;
    pub const BASIC_MAX: u8 = 0xa4;
    pub const MODIFIER_MIN: u8 = 0xe0;
    pub const MODIFIER_MAX: u8 = 0xe7;

    pub fn is_modifier(code: u8) -> bool {
        (MODIFIER_MIN..=MODIFIER_MAX).contains(&code)
    }

    /// Bit for `code` in the modifier byte of a keyboard report.
    pub fn modifier_bit(code: u8) -> u8 {
        1 << (code - MODIFIER_MIN)
    }
}

/// USB HID keyboard page usages.
pub mod hid {
    macro_rules! codes {
        ($($name:ident = $code:expr),* $(,)?) => {
            $(pub const $name: u8 = $code;)*
        };
    }

    codes! {
        A = 0x04, B = 0x05, C = 0x06, D = 0x07, E = 0x08, F = 0x09, G = 0x0a, H = 0x0b,
        I = 0x0c, J = 0x0d, K = 0x0e, L = 0x0f, M = 0x10, N = 0x11, O = 0x12, P = 0x13,
        Q = 0x14, R = 0x15, S = 0x16, T = 0x17, U = 0x18, V = 0x19, W = 0x1a, X = 0x1b,
        Y = 0x1c, Z = 0x1d,
        N1 = 0x1e, N2 = 0x1f, N3 = 0x20, N4 = 0x21, N5 = 0x22,
        N6 = 0x23, N7 = 0x24, N8 = 0x25, N9 = 0x26, N0 = 0x27,
        ENTER = 0x28, ESCAPE = 0x29, BACKSPACE = 0x2a, TAB = 0x2b, SPACE = 0x2c,
        MINUS = 0x2d, EQUAL = 0x2e, LEFT_BRACKET = 0x2f, RIGHT_BRACKET = 0x30,
        BACKSLASH = 0x31, SEMICOLON = 0x33, QUOTE = 0x34, GRAVE = 0x35,
        COMMA = 0x36, DOT = 0x37, SLASH = 0x38, CAPS_LOCK = 0x39,
        F1 = 0x3a, F2 = 0x3b, F3 = 0x3c, F4 = 0x3d, F5 = 0x3e, F6 = 0x3f,
        F7 = 0x40, F8 = 0x41, F9 = 0x42, F10 = 0x43, F11 = 0x44, F12 = 0x45,
        PRINT_SCREEN = 0x46, SCROLL_LOCK = 0x47, PAUSE = 0x48, INSERT = 0x49,
        HOME = 0x4a, PAGE_UP = 0x4b, DELETE = 0x4c, END = 0x4d, PAGE_DOWN = 0x4e,
        RIGHT = 0x4f, LEFT = 0x50, DOWN = 0x51, UP = 0x52,
        LEFT_CTRL = 0xe0, LEFT_SHIFT = 0xe1, LEFT_ALT = 0xe2, LEFT_GUI = 0xe3,
        RIGHT_CTRL = 0xe4, RIGHT_SHIFT = 0xe5, RIGHT_ALT = 0xe6, RIGHT_GUI = 0xe7,
    }
}

/// Key names accepted by [key_code]. Aliases for the same code are separated by `/`.
#[rustfmt::skip]
const KEY_NAMES: &[(&str, u8)] = &[
    ("noop/_", key_range::NONE),
    ("Return/Enter/ent", hid::ENTER),
    ("Escape/esc", hid::ESCAPE),
    ("Backspace/bksp", hid::BACKSPACE),
    ("Tab", hid::TAB),
    ("Spacebar/space/spc", hid::SPACE),
    ("Dash/-/minus", hid::MINUS),
    ("Equals/=/equal", hid::EQUAL),
    ("LeftBrace/[/leftsquarebracket", hid::LEFT_BRACKET),
    ("RightBrace/]/rightsquarebracket", hid::RIGHT_BRACKET),
    ("Backslash/\\", hid::BACKSLASH),
    ("Semicolon/;", hid::SEMICOLON),
    ("LeftApos/'/apostrophe/quote", hid::QUOTE),
    ("GraveAccent/`/grave", hid::GRAVE),
    ("Comma/,", hid::COMMA),
    ("Period/./dot", hid::DOT),
    ("Forwardslash/slash", hid::SLASH),
    ("CapsLock", hid::CAPS_LOCK),
    ("Printscreen/print", hid::PRINT_SCREEN),
    ("ScrollLock", hid::SCROLL_LOCK),
    ("Pause", hid::PAUSE),
    ("Insert/ins", hid::INSERT),
    ("Home", hid::HOME),
    ("PageUp/pgup", hid::PAGE_UP),
    ("Delete/del", hid::DELETE),
    ("End", hid::END),
    ("PageDown/pgdn", hid::PAGE_DOWN),
    ("Right", hid::RIGHT),
    ("Left", hid::LEFT),
    ("Down", hid::DOWN),
    ("Up", hid::UP),
    ("LeftCtrl/lctl", hid::LEFT_CTRL),
    ("LeftShift/lsft", hid::LEFT_SHIFT),
    ("LeftAlt/lalt", hid::LEFT_ALT),
    ("LeftGui/lgui", hid::LEFT_GUI),
    ("RightCtrl/rctl", hid::RIGHT_CTRL),
    ("RightShift/rsft", hid::RIGHT_SHIFT),
    ("RightAlt/ralt", hid::RIGHT_ALT),
    ("RightGui/rgui", hid::RIGHT_GUI),
];

const LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "1234567890";

/// Find the HID code for a key name.
///
/// Names are matched ignoring case, `-` and `_`; single characters are matched exactly.
///
/// ```
/// use hyperkey_common::keycodes::{key_code, hid};
///
/// assert_eq!(key_code("a"), Some(hid::A));
/// assert_eq!(key_code("Page_Up"), Some(hid::PAGE_UP));
/// assert_eq!(key_code("f12"), Some(hid::F12));
/// assert_eq!(key_code("-"), Some(hid::MINUS));
/// assert_eq!(key_code("hyper"), None);
/// ```
pub fn key_code(name: &str) -> Option<u8> {
    if name.len() == 1 {
        let c = name.chars().next()?.to_ascii_lowercase();
        if let Some(i) = LETTERS.find(c) {
            return Some(key_range::BASIC_A + i as u8);
        }
        if let Some(i) = DIGITS.find(c) {
            return Some(key_range::BASIC_1 + i as u8);
        }
    }

    if let Some(n) = function_key(name) {
        return Some(key_range::BASIC_F1 + n - 1);
    }

    KEY_NAMES
        .iter()
        .find(|(names, _)| names.split('/').any(|n| same_name(n, name)))
        .map(|(_, code)| *code)
}

/// The inverse of [key_code]; returns the first name listed for `code`.
pub fn key_name(code: u8) -> Option<&'static str> {
    const F_KEYS: [&str; 12] = [
        "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9", "F10", "F11", "F12",
    ];

    let i = code.wrapping_sub(key_range::BASIC_A) as usize;
    if i < LETTERS.len() {
        return Some(&LETTERS[i..=i]);
    }
    let i = code.wrapping_sub(key_range::BASIC_1) as usize;
    if i < DIGITS.len() {
        return Some(&DIGITS[i..=i]);
    }
    let i = code.wrapping_sub(key_range::BASIC_F1) as usize;
    if i < F_KEYS.len() {
        return Some(F_KEYS[i]);
    }

    KEY_NAMES
        .iter()
        .find(|(_, c)| *c == code)
        .and_then(|(names, _)| names.split('/').next())
}

fn function_key(name: &str) -> Option<u8> {
    let rest = name.strip_prefix(['f', 'F'])?;
    let n: u8 = rest.parse().ok()?;
    (1..=12).contains(&n).then_some(n)
}

fn same_name(a: &str, b: &str) -> bool {
    if a.len() == 1 || b.len() == 1 {
        return a == b;
    }
    normalized(a).eq(normalized(b))
}

fn normalized(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_'))
        .map(|c| c.to_ascii_lowercase())
}

#[cfg(test)]
#[path = "keycodes_test.rs"]
mod test;
