//! Keebio Chiri CE: 3x6 + 4 per half with home row mods.

use luke_common::{
    globals::{FLOW_TAP_TERM, MOD_TAP_EXTRA, RGB_MATRIX_TIMEOUT_MS, TAPPING_TERM},
    keycodes::{mod_bits::*, *},
    layers::{LayerState, DFLT, GAME, NAV, NUM, SYS},
};

use super::{split_positions, COLS};
use crate::{
    board::{Board, BoardConfig},
    keymap::{place, Keymap, Layer},
    KeyPos,
};

pub const ROWS: usize = 8;
pub const KEY_COUNT: usize = 44;

const POSITIONS: [KeyPos; KEY_COUNT] = split_positions(3, 4);

const fn layout(keys: [u16; KEY_COUNT]) -> Layer<ROWS, COLS> {
    place(&POSITIONS, keys)
}

const ____: u16 = KC_TRNS;

pub const LSG_S: u16 = lsg(KC_S);

pub const HRM_A: u16 = mt(MOD_LCTL, KC_A);
pub const HRM_R: u16 = mt(MOD_LALT, KC_R);
pub const HRM_S: u16 = mt(MOD_LGUI, KC_S);
pub const HRM_T: u16 = mt(MOD_LSFT, KC_T);

pub const HRM_O: u16 = mt(MOD_RCTL, KC_O);
pub const HRM_I: u16 = mt(MOD_LALT, KC_I);
pub const HRM_E: u16 = mt(MOD_RGUI, KC_E);
pub const HRM_N: u16 = mt(MOD_RSFT, KC_N);

pub const NAV_BS: u16 = lt(NAV, KC_BSPC);
pub const NAV_SPC: u16 = lt(NAV, KC_SPC);
pub const NUM_ENT: u16 = lt(NUM, KC_ENT);
pub const SYS_ESC: u16 = lt(SYS, KC_ESC);
pub const SYS_QUOT: u16 = lt(SYS, KC_QUOT);

#[rustfmt::skip]
static LAYERS: [Layer<ROWS, COLS>; 5] = [
    // DFLT
    layout([
        KC_TAB,  KC_Q,    KC_W,    KC_F,    KC_P,    KC_B,                      KC_J,    KC_L,    KC_U,    KC_Y,    KC_QUOT, KC_BSLS,
        SYS_ESC, HRM_A,   HRM_R,   HRM_S,   HRM_T,   KC_G,                      KC_M,    HRM_N,   HRM_E,   HRM_I,   HRM_O,   SYS_QUOT,
        KC_MEH,  KC_Z,    KC_X,    KC_C,    KC_D,    KC_V,    NUM_ENT, NUM_ENT, KC_K,    KC_H,    KC_COMM, KC_DOT,  KC_SLSH, KC_MEH,
                                   KC_HYPR, KC_LSFT, NAV_BS,           NAV_SPC, mo(NUM), KC_HYPR,
    ]),
    // GAME
    layout([
        ____,    KC_I,    KC_Q,    KC_W,    KC_E,    KC_R,                      ____,    ____,    ____,    ____,    ____,    ____,
        ____,    KC_LSFT, KC_A,    KC_S,    KC_D,    KC_F,                      ____,    ____,    ____,    ____,    ____,    ____,
        ____,    KC_Z,    KC_X,    KC_C,    KC_M,    KC_V,    NUM_ENT, ____,    ____,    ____,    ____,    ____,    ____,    ____,
                                   ____,    mo(NAV), KC_SPC,           ____,    ____,    ____,
    ]),
    // NAV
    layout([
        ____,    ____,    KC_BSPC, KC_UP,   KC_DEL,  KC_LBRC,                   KC_RBRC, KC_GRV,  KC_PLUS, KC_PIPE, KC_COLN, KC_PIPE,
        ____,    KC_LSFT, KC_LEFT, KC_DOWN, KC_RGHT, KC_LPRN,                   KC_RPRN, KC_MINS, KC_EQL,  KC_BSLS, KC_SCLN, KC_DQUO,
        ____,    KC_LGUI, ____,    KC_HOME, KC_END,  KC_LCBR, ____,    ____,    KC_RCBR, KC_UNDS, KC_LT,   KC_GT,   KC_QUES, ____,
                                   ____,    ____,    ____,             ____,    ____,    ____,
    ]),
    // SYS
    layout([
        ____,    to(DFLT),to(GAME),____,    ____,    ____,                      ____,    ____,    ____,    ____,    ____,    ____,
        ____,    ____,    KC_VOLU, KC_MPLY, KC_MNXT, KC_BRIU,                   RM_VALU, ____,    ____,    ____,    ____,    ____,
        QK_BOOT, ____,    KC_VOLD, KC_MUTE, KC_MPRV, KC_BRID, ____,    ____,    RM_VALD, ____,    ____,    ____,    ____,    QK_BOOT,
                                   ____,    ____,    ____,             ____,    ____,    ____,
    ]),
    // NUM
    layout([
        ____,    KC_EXLM, KC_AT,   KC_HASH, KC_DLR,  KC_PERC,                   KC_CIRC, KC_AMPR, KC_ASTR, KC_LPRN, KC_RPRN, ____,
        ____,    KC_1,    KC_2,    KC_3,    KC_4,    KC_5,                      KC_6,    KC_7,    KC_8,    KC_9,    KC_0,    ____,
        KC_F12,  KC_F1,   KC_F2,   KC_F3,   KC_F4,   KC_F5,   ____,    ____,    KC_F6,   KC_F7,   KC_F8,   KC_F9,   KC_F10,  KC_F11,
                                   ____,    ____,    ____,             ____,    ____,    ____,
    ]),
];

pub static KEYMAP: Keymap<ROWS, COLS> = Keymap::new(&LAYERS);

pub static CONFIG: BoardConfig = BoardConfig {
    tapping_term: TAPPING_TERM,
    chordal_hold: true,
    hold_on_other_key_press_per_key: true,
    flow_tap_term: Some(FLOW_TAP_TERM),
    rgb_matrix_timeout_ms: RGB_MATRIX_TIMEOUT_MS,
    rgb_matrix_sleep: true,
    led_count: 44,
    split_led_state: true,
    split_layer_state: true,
    split_transport_mirror: true,
    // the outer columns snap off, so bootmagic uses the second column in
    bootmagic_left: KeyPos::new(0, 1),
    bootmagic_right: KeyPos::new(4, 1),
    ..BoardConfig::new()
};

/// Matched by alias, so `HRM_R` (LALT) and `HRM_S` (LGUI) get the home row mod terms too. Their
/// mod-swapped spellings `mt(MOD_LGUI, KC_R)`/`mt(MOD_LALT, KC_S)` are not home row mods.
const fn is_home_row_mod(keycode: u16) -> bool {
    matches!(
        keycode,
        HRM_A | HRM_R | HRM_S | HRM_T | HRM_O | HRM_I | HRM_E | HRM_N
    )
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ChiriCe;

impl Board for ChiriCe {
    const NAME: &'static str = "chiri_ce";

    fn config(&self) -> &'static BoardConfig {
        &CONFIG
    }

    fn layer_count(&self) -> usize {
        KEYMAP.layer_count()
    }

    fn keycode_at(&self, layer: u8, pos: KeyPos) -> u16 {
        KEYMAP.get(layer, pos)
    }

    fn resolve(&self, state: LayerState, pos: KeyPos) -> u16 {
        KEYMAP.resolve(state, DFLT, pos)
    }

    fn tapping_term(&self, keycode: u16) -> u16 {
        if is_home_row_mod(keycode) {
            CONFIG.tapping_term + MOD_TAP_EXTRA
        } else {
            CONFIG.tapping_term
        }
    }

    fn quick_tap_term(&self, keycode: u16) -> u16 {
        match keycode {
            NAV_SPC | NAV_BS => CONFIG.tapping_term,
            kc if is_home_row_mod(kc) => CONFIG.tapping_term,
            _ => 0,
        }
    }

    fn flow_tap_term(&self, keycode: u16, _prev_keycode: u16) -> u16 {
        match tap_keycode(keycode) {
            KC_SPC | KC_BSPC | KC_ENT | KC_TAB => 0,
            _ => FLOW_TAP_TERM,
        }
    }

    fn permissive_hold(&self, keycode: u16) -> bool {
        matches!(keycode, NAV_SPC | NAV_BS)
    }

    fn retro_tapping(&self, keycode: u16) -> bool {
        is_home_row_mod(keycode)
    }
}

#[cfg(test)]
#[path = "chiri_ce_test.rs"]
mod test;
