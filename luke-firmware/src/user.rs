//! Hooks the host runtime calls at its lifecycle points, plus the per-key policy queries it
//! consults while resolving tap-hold keys.

use embassy_time::Instant;
use luke_common::layers::LayerState;

use crate::{
    board::Board,
    brightness::BrightnessSaver,
    config_store::ConfigStore,
    rgb::{RgbMatrix, RgbMode, WHITE},
    KeyRecord,
};

pub struct UserKeymap<B: Board> {
    board: B,
    brightness: BrightnessSaver,
}

impl<B: Board + Default> Default for UserKeymap<B> {
    fn default() -> Self {
        Self::new(B::default())
    }
}

impl<B: Board> UserKeymap<B> {
    pub const fn new(board: B) -> Self {
        Self::with_saver(board, BrightnessSaver::new(luke_common::globals::DEFAULT_BRIGHTNESS))
    }

    pub const fn with_saver(board: B, brightness: BrightnessSaver) -> Self {
        Self { board, brightness }
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn brightness(&self) -> &BrightnessSaver {
        &self.brightness
    }

    /// Restore the saved RGB settings and show the base layer colour.
    pub fn keyboard_post_init(&mut self, rgb: &mut impl RgbMatrix, store: &mut impl ConfigStore) {
        // loaded first so enable and solid colour below always win over the saved settings
        match store.read_rgb_matrix() {
            Ok(config) => rgb.load_config(config),
            Err(err) => crate::info!("no saved rgb config {:?}", err),
        }
        rgb.enable_noeeprom();
        rgb.mode_noeeprom(RgbMode::SolidColor);
        self.brightness.set_value(rgb.val());
        rgb.sethsv_noeeprom(WHITE.with_value(self.brightness.value()));
        crate::debug!("{} ready, brightness {}", B::NAME, self.brightness.value());
    }

    /// Colour the board by the highest active layer. The state is returned unchanged.
    pub fn layer_state_set(&mut self, state: LayerState, rgb: &mut impl RgbMatrix) -> LayerState {
        self.brightness.set_value(rgb.val());
        rgb.mode_noeeprom(RgbMode::SolidColor);
        if let Some(color) = self.board.layer_color(state.highest()) {
            rgb.sethsv_noeeprom(color.with_value(self.brightness.value()));
        }
        state
    }

    /// Called after the runtime has acted on a key event. The driver has already applied any
    /// brightness step, so its value is the one to save.
    pub fn post_process_record(&mut self, keycode: u16, record: &KeyRecord, rgb: &impl RgbMatrix) {
        if record.pressed && self.board.is_brightness_key(keycode) {
            self.brightness.record(rgb.val(), record.time);
        }
    }

    /// Save the RGB config once brightness has been left alone for the save delay. Returns
    /// true when a save was attempted.
    pub fn matrix_scan(
        &mut self,
        now: Instant,
        rgb: &impl RgbMatrix,
        store: &mut impl ConfigStore,
    ) -> bool {
        let Some(value) = self.brightness.poll(now) else {
            return false;
        };

        let config = rgb.config();
        if config.hsv.v != value {
            crate::warn!(
                "brightness moved from {} to {} without a key press",
                value,
                config.hsv.v
            );
        }
        if let Err(err) = store.update_rgb_matrix(&config) {
            crate::error!("saving rgb config failed {:?}", err);
        }
        true
    }

    /// When the next [Self::matrix_scan] call can save a pending change.
    pub fn save_due_at(&self) -> Option<Instant> {
        self.brightness.due_at()
    }

    pub fn tapping_term(&self, keycode: u16, _record: &KeyRecord) -> u16 {
        self.board.tapping_term(keycode)
    }

    pub fn quick_tap_term(&self, keycode: u16, _record: &KeyRecord) -> u16 {
        self.board.quick_tap_term(keycode)
    }

    pub fn flow_tap_term(&self, keycode: u16, _record: &KeyRecord, prev_keycode: u16) -> u16 {
        self.board.flow_tap_term(keycode, prev_keycode)
    }

    pub fn permissive_hold(&self, keycode: u16, _record: &KeyRecord) -> bool {
        self.board.permissive_hold(keycode)
    }

    pub fn retro_tapping(&self, keycode: u16, _record: &KeyRecord) -> bool {
        self.board.retro_tapping(keycode)
    }

    pub fn hold_on_other_key_press(&self, keycode: u16, _record: &KeyRecord) -> bool {
        self.board.hold_on_other_key_press(keycode)
    }

    /// Auto shift applies per layer, judged on the highest layer in `state`.
    pub fn auto_shifted_key(&self, keycode: u16, state: LayerState) -> bool {
        self.board.auto_shifted_key(keycode, state.highest())
    }
}

#[cfg(test)]
#[path = "user_test.rs"]
mod test;
