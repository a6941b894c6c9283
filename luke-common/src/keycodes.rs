//! Keycode encoding shared by the keymaps and the firmware hooks.
//!
//! The values follow the QMK layout so that the tables can be handed to a QMK-compatible runtime
//! unchanged: basic HID usages in the low byte, modifier/tap-hold/layer wrappers above it.

pub mod key_range {
    pub const NO: u16 = 0x0000;
    pub const TRANSPARENT: u16 = 0x0001;

    pub const BASIC_MIN: u16 = 0x0004;
    pub const BASIC_MAX: u16 = 0x00a4;
    pub const MEDIA_MIN: u16 = 0x00a5;
    pub const MEDIA_MAX: u16 = 0x00be;
    pub const MODIFIER_MIN: u16 = 0x00e0;
    pub const MODIFIER_MAX: u16 = 0x00e7;

    pub const MODS: u16 = 0x0100;
    pub const MODS_MAX: u16 = 0x1fff;
    pub const MOD_TAP: u16 = 0x2000;
    pub const MOD_TAP_MAX: u16 = 0x3fff;
    pub const LAYER_TAP: u16 = 0x4000;
    pub const LAYER_TAP_MAX: u16 = 0x4fff;
    pub const TO: u16 = 0x5200;
    pub const TO_MAX: u16 = 0x521f;
    pub const MOMENTARY: u16 = 0x5220;
    pub const MOMENTARY_MAX: u16 = 0x523f;

    pub const UNDERGLOW_MIN: u16 = 0x7820;
    pub const UNDERGLOW_MAX: u16 = 0x783f;
    pub const RGB_MATRIX_MIN: u16 = 0x7840;
    pub const RGB_MATRIX_MAX: u16 = 0x785f;

    pub const QUANTUM_MIN: u16 = 0x7c00;
    pub const QUANTUM_MAX: u16 = 0x7dff;

    pub const MAX_TAP_LAYER: u8 = 0x0f;
    pub const MAX_LAYER: u8 = 0x1f;

    pub fn base_code(code: u16) -> u16 {
        code & 0xff00
    }
}

pub mod mod_bits {
    pub const MOD_LCTL: u8 = 0x01;
    pub const MOD_LSFT: u8 = 0x02;
    pub const MOD_LALT: u8 = 0x04;
    pub const MOD_LGUI: u8 = 0x08;
    /// Set together with one of the left bits to select the right-hand modifier.
    pub const MOD_RIGHT: u8 = 0x10;
    pub const MOD_RCTL: u8 = MOD_RIGHT | MOD_LCTL;
    pub const MOD_RSFT: u8 = MOD_RIGHT | MOD_LSFT;
    pub const MOD_RALT: u8 = MOD_RIGHT | MOD_LALT;
    pub const MOD_RGUI: u8 = MOD_RIGHT | MOD_LGUI;

    pub const MOD_MEH: u8 = MOD_LCTL | MOD_LSFT | MOD_LALT;
    pub const MOD_HYPR: u8 = MOD_MEH | MOD_LGUI;
}

use key_range::*;
use mod_bits::*;

pub const KC_NO: u16 = NO;
pub const KC_TRNS: u16 = TRANSPARENT;

pub const KC_A: u16 = 0x04;
pub const KC_B: u16 = 0x05;
pub const KC_C: u16 = 0x06;
pub const KC_D: u16 = 0x07;
pub const KC_E: u16 = 0x08;
pub const KC_F: u16 = 0x09;
pub const KC_G: u16 = 0x0a;
pub const KC_H: u16 = 0x0b;
pub const KC_I: u16 = 0x0c;
pub const KC_J: u16 = 0x0d;
pub const KC_K: u16 = 0x0e;
pub const KC_L: u16 = 0x0f;
pub const KC_M: u16 = 0x10;
pub const KC_N: u16 = 0x11;
pub const KC_O: u16 = 0x12;
pub const KC_P: u16 = 0x13;
pub const KC_Q: u16 = 0x14;
pub const KC_R: u16 = 0x15;
pub const KC_S: u16 = 0x16;
pub const KC_T: u16 = 0x17;
pub const KC_U: u16 = 0x18;
pub const KC_V: u16 = 0x19;
pub const KC_W: u16 = 0x1a;
pub const KC_X: u16 = 0x1b;
pub const KC_Y: u16 = 0x1c;
pub const KC_Z: u16 = 0x1d;

pub const KC_1: u16 = 0x1e;
pub const KC_2: u16 = 0x1f;
pub const KC_3: u16 = 0x20;
pub const KC_4: u16 = 0x21;
pub const KC_5: u16 = 0x22;
pub const KC_6: u16 = 0x23;
pub const KC_7: u16 = 0x24;
pub const KC_8: u16 = 0x25;
pub const KC_9: u16 = 0x26;
pub const KC_0: u16 = 0x27;

pub const KC_ENT: u16 = 0x28;
pub const KC_ESC: u16 = 0x29;
pub const KC_BSPC: u16 = 0x2a;
pub const KC_TAB: u16 = 0x2b;
pub const KC_SPC: u16 = 0x2c;
pub const KC_MINS: u16 = 0x2d;
pub const KC_EQL: u16 = 0x2e;
pub const KC_LBRC: u16 = 0x2f;
pub const KC_RBRC: u16 = 0x30;
pub const KC_BSLS: u16 = 0x31;
pub const KC_SCLN: u16 = 0x33;
pub const KC_QUOT: u16 = 0x34;
pub const KC_GRV: u16 = 0x35;
pub const KC_COMM: u16 = 0x36;
pub const KC_DOT: u16 = 0x37;
pub const KC_SLSH: u16 = 0x38;

pub const KC_F1: u16 = 0x3a;
pub const KC_F2: u16 = 0x3b;
pub const KC_F3: u16 = 0x3c;
pub const KC_F4: u16 = 0x3d;
pub const KC_F5: u16 = 0x3e;
pub const KC_F6: u16 = 0x3f;
pub const KC_F7: u16 = 0x40;
pub const KC_F8: u16 = 0x41;
pub const KC_F9: u16 = 0x42;
pub const KC_F10: u16 = 0x43;
pub const KC_F11: u16 = 0x44;
pub const KC_F12: u16 = 0x45;

pub const KC_HOME: u16 = 0x4a;
pub const KC_DEL: u16 = 0x4c;
pub const KC_END: u16 = 0x4d;
pub const KC_RGHT: u16 = 0x4f;
pub const KC_LEFT: u16 = 0x50;
pub const KC_DOWN: u16 = 0x51;
pub const KC_UP: u16 = 0x52;

pub const KC_MUTE: u16 = 0xa8;
pub const KC_VOLU: u16 = 0xa9;
pub const KC_VOLD: u16 = 0xaa;
pub const KC_MNXT: u16 = 0xab;
pub const KC_MPRV: u16 = 0xac;
pub const KC_MPLY: u16 = 0xae;
pub const KC_BRIU: u16 = 0xbd;
pub const KC_BRID: u16 = 0xbe;

pub const KC_LCTL: u16 = 0xe0;
pub const KC_LSFT: u16 = 0xe1;
pub const KC_LALT: u16 = 0xe2;
pub const KC_LGUI: u16 = 0xe3;
pub const KC_RCTL: u16 = 0xe4;
pub const KC_RSFT: u16 = 0xe5;
pub const KC_RALT: u16 = 0xe6;
pub const KC_RGUI: u16 = 0xe7;

pub const KC_MEH: u16 = mods(MOD_MEH, KC_NO);
pub const KC_HYPR: u16 = mods(MOD_HYPR, KC_NO);

pub const KC_TILD: u16 = lsft(KC_GRV);
pub const KC_EXLM: u16 = lsft(KC_1);
pub const KC_AT: u16 = lsft(KC_2);
pub const KC_HASH: u16 = lsft(KC_3);
pub const KC_DLR: u16 = lsft(KC_4);
pub const KC_PERC: u16 = lsft(KC_5);
pub const KC_CIRC: u16 = lsft(KC_6);
pub const KC_AMPR: u16 = lsft(KC_7);
pub const KC_ASTR: u16 = lsft(KC_8);
pub const KC_LPRN: u16 = lsft(KC_9);
pub const KC_RPRN: u16 = lsft(KC_0);
pub const KC_UNDS: u16 = lsft(KC_MINS);
pub const KC_PLUS: u16 = lsft(KC_EQL);
pub const KC_LCBR: u16 = lsft(KC_LBRC);
pub const KC_RCBR: u16 = lsft(KC_RBRC);
pub const KC_PIPE: u16 = lsft(KC_BSLS);
pub const KC_COLN: u16 = lsft(KC_SCLN);
pub const KC_DQUO: u16 = lsft(KC_QUOT);
pub const KC_LT: u16 = lsft(KC_COMM);
pub const KC_GT: u16 = lsft(KC_DOT);
pub const KC_QUES: u16 = lsft(KC_SLSH);

pub const RM_VALU: u16 = RGB_MATRIX_MIN + 0x09;
pub const RM_VALD: u16 = RGB_MATRIX_MIN + 0x0a;
/// Underglow brightness keys. Runtimes that drive the RGB matrix from them treat them like
/// [RM_VALU]/[RM_VALD], but the codes are distinct.
pub const RGB_VAI: u16 = UNDERGLOW_MIN + 0x07;
pub const RGB_VAD: u16 = UNDERGLOW_MIN + 0x08;

pub const QK_BOOT: u16 = QUANTUM_MIN;
pub const QK_GESC: u16 = QUANTUM_MIN + 0x16;

/// `kc` with the modifiers in `mods` held while it is sent.
pub const fn mods(mods: u8, kc: u16) -> u16 {
    ((mods as u16 & 0x1f) << 8) | (kc & 0xff)
}

pub const fn lsft(kc: u16) -> u16 {
    mods(MOD_LSFT, kc)
}

/// Left shift + left gui.
pub const fn lsg(kc: u16) -> u16 {
    mods(MOD_LSFT | MOD_LGUI, kc)
}

/// Tap for `kc`, hold for `mods`.
pub const fn mt(mods: u8, kc: u16) -> u16 {
    MOD_TAP | ((mods as u16 & 0x1f) << 8) | (kc & 0xff)
}

/// Tap for `kc`, hold to activate `layer`.
pub const fn lt(layer: u8, kc: u16) -> u16 {
    assert!(layer <= MAX_TAP_LAYER);
    LAYER_TAP | ((layer as u16) << 8) | (kc & 0xff)
}

/// Momentarily activate `layer` while held.
pub const fn mo(layer: u8) -> u16 {
    assert!(layer <= MAX_LAYER);
    MOMENTARY | layer as u16
}

/// Turn on `layer` and turn off every other layer except the default one.
pub const fn to(layer: u8) -> u16 {
    assert!(layer <= MAX_LAYER);
    TO | layer as u16
}

pub const fn is_mod_tap(kc: u16) -> bool {
    kc >= MOD_TAP && kc <= MOD_TAP_MAX
}

pub const fn is_layer_tap(kc: u16) -> bool {
    kc >= LAYER_TAP && kc <= LAYER_TAP_MAX
}

pub const fn is_tap_hold(kc: u16) -> bool {
    is_mod_tap(kc) || is_layer_tap(kc)
}

pub const fn is_modded(kc: u16) -> bool {
    kc >= MODS && kc <= MODS_MAX
}

/// The key sent when a tap-hold key is tapped; any other keycode is returned unchanged.
pub const fn tap_keycode(kc: u16) -> u16 {
    if is_tap_hold(kc) {
        kc & 0xff
    } else {
        kc
    }
}

/// The modifier mask of a mod-tap or modded key.
pub const fn mod_mask(kc: u16) -> u8 {
    if is_mod_tap(kc) || is_modded(kc) {
        ((kc >> 8) & 0x1f) as u8
    } else {
        0
    }
}

/// The layer a layer key refers to.
pub const fn layer_of(kc: u16) -> Option<u8> {
    match kc {
        LAYER_TAP..=LAYER_TAP_MAX => Some(((kc >> 8) & 0x0f) as u8),
        TO..=TO_MAX => Some((kc & 0x1f) as u8),
        MOMENTARY..=MOMENTARY_MAX => Some((kc & 0x1f) as u8),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyKind {
    None,
    Transparent,
    Basic,
    Media,
    Modifier,
    Modded,
    ModTap,
    LayerTap,
    To,
    Momentary,
    Underglow,
    RgbMatrix,
    Quantum,
    Unknown,
}

pub const fn kind(kc: u16) -> KeyKind {
    match kc {
        NO => KeyKind::None,
        TRANSPARENT => KeyKind::Transparent,
        BASIC_MIN..=BASIC_MAX => KeyKind::Basic,
        MEDIA_MIN..=MEDIA_MAX => KeyKind::Media,
        MODIFIER_MIN..=MODIFIER_MAX => KeyKind::Modifier,
        MODS..=MODS_MAX => KeyKind::Modded,
        MOD_TAP..=MOD_TAP_MAX => KeyKind::ModTap,
        LAYER_TAP..=LAYER_TAP_MAX => KeyKind::LayerTap,
        TO..=TO_MAX => KeyKind::To,
        MOMENTARY..=MOMENTARY_MAX => KeyKind::Momentary,
        UNDERGLOW_MIN..=UNDERGLOW_MAX => KeyKind::Underglow,
        RGB_MATRIX_MIN..=RGB_MATRIX_MAX => KeyKind::RgbMatrix,
        QUANTUM_MIN..=QUANTUM_MAX => KeyKind::Quantum,
        _ => KeyKind::Unknown,
    }
}

const BASIC_NAMES: [&str; 0x35] = [
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r",
    "s", "t", "u", "v", "w", "x", "y", "z", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0",
    "enter", "escape", "backspace", "tab", "space", "-", "=", "[", "]", "\\", "nonushash", ";",
    "'", "`", ",", ".", "/",
];

const MODIFIER_NAMES: [&str; 8] = [
    "leftctrl",
    "leftshift",
    "leftalt",
    "leftgui",
    "rightctrl",
    "rightshift",
    "rightalt",
    "rightgui",
];

/// A short mnemonic for `kc`. Wrapped keys are named by their wrapper only.
pub fn name(kc: u16) -> &'static str {
    match kc {
        BASIC_MIN..=0x38 => BASIC_NAMES[(kc - BASIC_MIN) as usize],
        KC_F1..=KC_F12 => {
            const F: [&str; 12] = [
                "f1", "f2", "f3", "f4", "f5", "f6", "f7", "f8", "f9", "f10", "f11", "f12",
            ];
            F[(kc - KC_F1) as usize]
        }
        KC_HOME => "home",
        KC_DEL => "delete",
        KC_END => "end",
        KC_RGHT => "right",
        KC_LEFT => "left",
        KC_DOWN => "down",
        KC_UP => "up",
        KC_MUTE => "mute",
        KC_VOLU => "volumeup",
        KC_VOLD => "volumedown",
        KC_MNXT => "nexttrack",
        KC_MPRV => "prevtrack",
        KC_MPLY => "playpause",
        KC_BRIU => "brightnessup",
        KC_BRID => "brightnessdown",
        MODIFIER_MIN..=MODIFIER_MAX => MODIFIER_NAMES[(kc - MODIFIER_MIN) as usize],
        KC_MEH => "meh",
        KC_HYPR => "hyper",
        RM_VALU => "rgb_value_up",
        RM_VALD => "rgb_value_down",
        RGB_VAI => "underglow_value_up",
        RGB_VAD => "underglow_value_down",
        QK_BOOT => "bootloader",
        QK_GESC => "grave_escape",
        _ => match kind(kc) {
            KeyKind::None => "noop",
            KeyKind::Transparent => "transparent",
            KeyKind::Modded => "modded",
            KeyKind::ModTap => "mod_tap",
            KeyKind::LayerTap => "layer_tap",
            KeyKind::To => "to",
            KeyKind::Momentary => "momentary",
            _ => "unknown",
        },
    }
}

#[cfg(test)]
#[path = "keycodes_test.rs"]
mod test;
