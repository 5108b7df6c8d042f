use hyperkey_common::keycodes::hid;

use crate::layout::KeyId;

/// Fixed lookup from a logical key to the codes sent together when it is pressed.
#[derive(Debug, Clone, Copy)]
pub struct ComboMap<'c> {
    entries: &'c [(KeyId, &'c [u8])],
}

impl<'c> ComboMap<'c> {
    pub const fn new(entries: &'c [(KeyId, &'c [u8])]) -> Self {
        Self { entries }
    }

    pub fn combo(&self, key: KeyId) -> Option<&'c [u8]> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, codes)| *codes)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The first key with more than one entry.
    pub fn find_duplicate(&self) -> Option<KeyId> {
        self.entries
            .iter()
            .enumerate()
            .find(|(i, (k, _))| self.entries[..*i].iter().any(|(p, _)| p == k))
            .map(|(_, (k, _))| *k)
    }
}

macro_rules! hyper {
    ($($key:ident),* $(,)?) => {
        &[$((
            hid::$key,
            &[hid::LEFT_CTRL, hid::LEFT_SHIFT, hid::LEFT_ALT, hid::$key],
        )),*]
    };
}

#[rustfmt::skip]
const HYPER_TABLE: &[(KeyId, &[u8])] = hyper![
    A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    N1, N2, N3, N4, N5, N6, N7, N8, N9, N0,
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    ENTER, ESCAPE, BACKSPACE, TAB, SPACE, MINUS, EQUAL, LEFT_BRACKET, RIGHT_BRACKET,
    BACKSLASH, SEMICOLON, QUOTE, GRAVE, COMMA, DOT, SLASH,
];

/// Every letter, digit, function and punctuation key sent with Ctrl+Shift+Alt held.
pub const HYPER_COMBOS: ComboMap<'static> = ComboMap::new(HYPER_TABLE);

#[cfg(test)]
#[path = "combo_map_test.rs"]
mod test;
