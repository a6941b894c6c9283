use luke_common::{globals, layers::LayerState};

use crate::{rgb, KeyPos};

/// Compile-time settings consumed by the host runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    pub tapping_term: u16,
    pub chordal_hold: bool,
    pub hold_on_other_key_press_per_key: bool,
    /// `None` when flow tap is disabled.
    pub flow_tap_term: Option<u16>,
    pub auto_shift_per_key: bool,
    pub rgb_matrix_timeout_ms: u32,
    pub rgb_matrix_sleep: bool,
    pub led_count: u8,
    pub split_led_state: bool,
    pub split_layer_state: bool,
    pub split_transport_mirror: bool,
    pub bootmagic_left: KeyPos,
    pub bootmagic_right: KeyPos,
}

impl BoardConfig {
    pub const fn new() -> Self {
        Self {
            tapping_term: globals::TAPPING_TERM,
            chordal_hold: false,
            hold_on_other_key_press_per_key: false,
            flow_tap_term: None,
            auto_shift_per_key: false,
            rgb_matrix_timeout_ms: 0,
            rgb_matrix_sleep: false,
            led_count: 0,
            split_led_state: false,
            split_layer_state: false,
            split_transport_mirror: false,
            bootmagic_left: KeyPos::new(0, 0),
            bootmagic_right: KeyPos::new(0, 0),
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// One keyboard: its keymap and how its tap-hold keys should behave.
///
/// Every query is a pure function of its arguments. The defaults mirror the behaviour of a
/// runtime with no per-key customization.
pub trait Board {
    const NAME: &'static str;

    fn config(&self) -> &'static BoardConfig;

    fn layer_count(&self) -> usize;

    /// The keycode at `pos` on `layer`, `KC_NO` when out of range.
    fn keycode_at(&self, layer: u8, pos: KeyPos) -> u16;

    /// The keycode a press at `pos` produces with `state` active.
    fn resolve(&self, state: LayerState, pos: KeyPos) -> u16;

    fn tapping_term(&self, _keycode: u16) -> u16 {
        self.config().tapping_term
    }

    /// Within this time of a previous tap, a tap-hold key repeats its tap instead of holding.
    fn quick_tap_term(&self, _keycode: u16) -> u16 {
        self.config().tapping_term
    }

    /// A tap-hold key pressed within this time of `prev_keycode` is settled as a tap.
    fn flow_tap_term(&self, _keycode: u16, _prev_keycode: u16) -> u16 {
        self.config().flow_tap_term.unwrap_or(0)
    }

    fn permissive_hold(&self, _keycode: u16) -> bool {
        false
    }

    fn retro_tapping(&self, _keycode: u16) -> bool {
        false
    }

    fn hold_on_other_key_press(&self, _keycode: u16) -> bool {
        false
    }

    fn auto_shifted_key(&self, _keycode: u16, _layer: u8) -> bool {
        false
    }

    fn layer_color(&self, layer: u8) -> Option<rgb::Color> {
        rgb::layer_color(layer)
    }

    /// Keys whose press changes the RGB brightness: the RGB matrix pair and the underglow pair
    /// older keymaps bind.
    fn is_brightness_key(&self, keycode: u16) -> bool {
        use luke_common::keycodes::{RGB_VAD, RGB_VAI, RM_VALD, RM_VALU};
        matches!(keycode, RM_VALU | RM_VALD | RGB_VAI | RGB_VAD)
    }
}
