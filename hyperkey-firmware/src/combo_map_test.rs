use super::*;

const HYPER: [u8; 3] = [hid::LEFT_CTRL, hid::LEFT_SHIFT, hid::LEFT_ALT];

#[test]
fn hyper_combos() {
    assert_eq!(HYPER_COMBOS.len(), 64);
    assert_eq!(HYPER_COMBOS.find_duplicate(), None);

    for (key, codes) in HYPER_TABLE {
        assert_eq!(&codes[..3], &HYPER, "key {}", key);
        assert_eq!(codes[3], *key);
        assert_eq!(codes.len(), 4);
    }

    assert_eq!(
        HYPER_COMBOS.combo(hid::Q),
        Some(&[0xe0, 0xe1, 0xe2, 0x14][..])
    );
    assert_eq!(
        HYPER_COMBOS.combo(hid::SLASH),
        Some(&[0xe0, 0xe1, 0xe2, 0x38][..])
    );
    assert!(HYPER_COMBOS.combo(hid::F12).is_some());
    assert!(HYPER_COMBOS.combo(hid::N0).is_some());
}

#[test]
fn hyper_combos_skip_other_keys() {
    assert_eq!(HYPER_COMBOS.combo(hid::CAPS_LOCK), None);
    assert_eq!(HYPER_COMBOS.combo(hid::LEFT_CTRL), None);
    assert_eq!(HYPER_COMBOS.combo(hid::UP), None);
    assert_eq!(HYPER_COMBOS.combo(0), None);
}

#[test]
fn duplicate() {
    let map = ComboMap::new(&[
        (hid::A, &[hid::B]),
        (hid::C, &[hid::D]),
        (hid::A, &[hid::E]),
    ]);
    assert_eq!(map.find_duplicate(), Some(hid::A));
    assert_eq!(map.combo(hid::A), Some(&[hid::B][..]));
}

#[test]
fn empty() {
    let map = ComboMap::new(&[]);
    assert!(map.is_empty());
    assert_eq!(map.combo(hid::A), None);
    assert_eq!(map.find_duplicate(), None);
}
