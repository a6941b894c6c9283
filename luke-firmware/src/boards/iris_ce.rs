//! Keebio Iris CE: 4x6 + 4 per half with bottom row mods and per-layer auto shift.

use luke_common::{
    globals::{MOD_TAP_EXTRA, TAPPING_TERM},
    keycodes::{mod_bits::*, *},
    layers::{LayerState, CFG, DFLT, GAME, NAV, NUM, SYS},
};

use super::{split_positions, COLS};
use crate::{
    board::{Board, BoardConfig},
    keymap::{place, Keymap, Layer},
    KeyPos,
};

pub const ROWS: usize = 10;
pub const KEY_COUNT: usize = 56;

const POSITIONS: [KeyPos; KEY_COUNT] = split_positions(4, 5);

const fn layout(keys: [u16; KEY_COUNT]) -> Layer<ROWS, COLS> {
    place(&POSITIONS, keys)
}

const ____: u16 = KC_TRNS;

pub const LSG_S: u16 = lsg(KC_S);

pub const BRM_Z: u16 = mt(MOD_LCTL, KC_Z);
pub const BRM_X: u16 = mt(MOD_LALT, KC_X);
pub const BRM_C: u16 = mt(MOD_LGUI, KC_C);
pub const BRM_COMM: u16 = mt(MOD_RGUI, KC_COMM);
pub const BRM_DOT: u16 = mt(MOD_RALT, KC_DOT);
pub const BRM_SLSH: u16 = mt(MOD_RCTL, KC_SLSH);

pub const NAV_BS: u16 = lt(NAV, KC_BSPC);
pub const NAV_SPC: u16 = lt(NAV, KC_SPC);
pub const NUM_ENT: u16 = lt(NUM, KC_ENT);
pub const MT_TAB: u16 = mt(MOD_LSFT, KC_TAB);

#[rustfmt::skip]
static LAYERS: [Layer<ROWS, COLS>; 6] = [
    // DFLT
    layout([
        QK_GESC, KC_1,    KC_2,    KC_3,    KC_4,    KC_5,                      KC_6,    KC_7,    KC_8,    KC_9,    KC_0,    ____,
        KC_TAB,  KC_Q,    KC_W,    KC_F,    KC_P,    KC_B,                      KC_J,    KC_L,    KC_U,    KC_Y,    KC_QUOT, ____,
        KC_ESC,  KC_A,    KC_R,    KC_S,    KC_T,    KC_G,                      KC_M,    KC_N,    KC_E,    KC_I,    KC_O,    ____,
        KC_LCTL, BRM_Z,   BRM_X,   BRM_C,   KC_D,    KC_V,    mo(SYS), mo(CFG), KC_K,    KC_H,    BRM_COMM,BRM_DOT, BRM_SLSH,KC_ENT,
                                   KC_ESC,  MT_TAB,  NAV_BS,           NAV_SPC, NUM_ENT, KC_LALT,
    ]),
    // GAME
    layout([
        ____,    ____,    ____,    ____,    ____,    ____,                      ____,    ____,    ____,    ____,    ____,    ____,
        ____,    KC_I,    KC_Q,    KC_W,    KC_E,    KC_R,                      ____,    ____,    ____,    ____,    ____,    ____,
        ____,    KC_LSFT, KC_A,    KC_S,    KC_D,    KC_F,                      ____,    ____,    ____,    ____,    ____,    ____,
        ____,    KC_M,    KC_Z,    KC_X,    KC_C,    KC_V,    mo(SYS), mo(CFG), ____,    ____,    ____,    ____,    ____,    ____,
                                   ____,    mo(NAV), KC_SPC,           ____,    ____,    ____,
    ]),
    // NAV
    layout([
        KC_TILD, KC_EXLM, KC_AT,   KC_HASH, KC_DLR,  KC_PERC,                   KC_CIRC, KC_AMPR, KC_ASTR, KC_LPRN, KC_RPRN, ____,
        ____,    KC_TAB,  KC_BSPC, KC_UP,   KC_DEL,  KC_LBRC,                   KC_RBRC, KC_GRV,  KC_PLUS, KC_PIPE, KC_DQUO, ____,
        ____,    KC_LSFT, KC_LEFT, KC_DOWN, KC_RGHT, KC_LPRN,                   KC_RPRN, KC_MINS, KC_EQL,  KC_BSLS, KC_SCLN, ____,
        ____,    KC_LGUI, ____,    KC_HOME, KC_END,  KC_LCBR, ____,    ____,    KC_RCBR, KC_UNDS, KC_LT,   KC_GT,   KC_QUES, ____,
                                   ____,    ____,    ____,             ____,    ____,    ____,
    ]),
    // SYS
    layout([
        KC_F12,  KC_F1,   KC_F2,   KC_F3,   KC_F4,   KC_F5,                     KC_F6,   KC_F7,   KC_F8,   KC_F9,   KC_F10,  KC_F11,
        ____,    LSG_S,   KC_VOLD, KC_MUTE, KC_VOLU, KC_BRIU,                   RGB_VAI, ____,    ____,    ____,    ____,    ____,
        ____,    ____,    KC_MPRV, KC_MPLY, KC_MNXT, KC_BRID,                   RGB_VAD, ____,    ____,    ____,    ____,    ____,
        ____,    ____,    ____,    ____,    ____,    ____,    ____,    ____,    ____,    ____,    ____,    ____,    ____,    ____,
                                   QK_BOOT, ____,    ____,             ____,    ____,    QK_BOOT,
    ]),
    // NUM
    layout([
        KC_F12,  KC_F1,   KC_F2,   KC_F3,   KC_F4,   KC_F5,                     KC_F6,   KC_F7,   KC_F8,   KC_F9,   KC_F10,  KC_F11,
        ____,    KC_EXLM, KC_AT,   KC_HASH, KC_DLR,  KC_PERC,                   KC_CIRC, KC_AMPR, KC_ASTR, KC_LPRN, KC_RPRN, ____,
        ____,    KC_1,    KC_2,    KC_3,    KC_4,    KC_5,                      KC_6,    KC_7,    KC_8,    KC_9,    KC_0,    ____,
        ____,    KC_F1,   KC_F2,   KC_F3,   KC_F4,   KC_F5,   KC_F11,  KC_F12,  KC_F6,   KC_F7,   KC_F8,   KC_F9,   KC_F10,  ____,
                                   ____,    ____,    ____,             ____,    ____,    ____,
    ]),
    // CFG
    layout([
        ____,    to(DFLT),to(GAME),____,    ____,    ____,                      ____,    ____,    ____,    ____,    ____,    ____,
        ____,    ____,    ____,    ____,    ____,    ____,                      ____,    ____,    ____,    ____,    ____,    ____,
        ____,    ____,    ____,    ____,    ____,    ____,                      ____,    ____,    ____,    ____,    ____,    ____,
        ____,    ____,    ____,    ____,    ____,    ____,    ____,    ____,    ____,    ____,    ____,    ____,    ____,    ____,
                                   QK_BOOT, ____,    ____,             ____,    ____,    QK_BOOT,
    ]),
];

pub static KEYMAP: Keymap<ROWS, COLS> = Keymap::new(&LAYERS);

// No board-level overrides exist for this keyboard. The per-key switches are on because the
// policy below answers per key; LED count and bootmagic keys are the Iris CE board defaults.
pub static CONFIG: BoardConfig = BoardConfig {
    tapping_term: TAPPING_TERM,
    hold_on_other_key_press_per_key: true,
    auto_shift_per_key: true,
    led_count: 68,
    split_layer_state: true,
    bootmagic_left: KeyPos::new(0, 0),
    bootmagic_right: KeyPos::new(5, 0),
    ..BoardConfig::new()
};

#[derive(Debug, Default, Clone, Copy)]
pub struct IrisCe;

impl Board for IrisCe {
    const NAME: &'static str = "iris_ce";

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
        match keycode {
            BRM_COMM | BRM_DOT | BRM_SLSH => CONFIG.tapping_term + MOD_TAP_EXTRA,
            BRM_X | BRM_C | BRM_Z => CONFIG.tapping_term + 2 * MOD_TAP_EXTRA,
            _ => CONFIG.tapping_term,
        }
    }

    fn quick_tap_term(&self, keycode: u16) -> u16 {
        match keycode {
            MT_TAB | NAV_SPC | NAV_BS => 200,
            BRM_X | BRM_C | BRM_Z => 300,
            _ => 0,
        }
    }

    fn hold_on_other_key_press(&self, keycode: u16) -> bool {
        keycode == MT_TAB
    }

    fn permissive_hold(&self, keycode: u16) -> bool {
        matches!(keycode, MT_TAB | NAV_SPC | NAV_BS)
    }

    fn retro_tapping(&self, keycode: u16) -> bool {
        matches!(
            keycode,
            BRM_Z | BRM_X | BRM_C | BRM_COMM | BRM_DOT | BRM_SLSH
        )
    }

    /// Shift on hold only for the symbols of the NAV layer and the NUM layer digits.
    fn auto_shifted_key(&self, keycode: u16, layer: u8) -> bool {
        match layer {
            NAV => matches!(keycode, KC_GRV | KC_MINS | KC_EQL | KC_BSLS | KC_SCLN),
            NUM => matches!(keycode, KC_1..=KC_0),
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "iris_ce_test.rs"]
mod test;
