//! Glue for embassy based hosts: one owner for the keymap and the peripherals it drives, and a
//! task that ticks the periodic hook.

use core::cell::RefCell;

use embassy_futures::select::{select, Either};
use embassy_sync::{
    blocking_mutex::{raw::RawMutex, Mutex},
    signal::Signal,
};
use embassy_time::{Duration, Instant, Ticker};
use luke_common::layers::LayerState;

use crate::{board::Board, config_store::ConfigStore, rgb::RgbMatrix, user::UserKeymap, KeyRecord};

pub const SCAN_PERIOD: Duration = Duration::from_millis(10);

pub struct Keyboard<B: Board, R: RgbMatrix, S: ConfigStore> {
    pub keymap: UserKeymap<B>,
    pub rgb: R,
    pub store: S,
}

impl<B: Board, R: RgbMatrix, S: ConfigStore> Keyboard<B, R, S> {
    pub fn new(board: B, rgb: R, store: S) -> Self {
        Self {
            keymap: UserKeymap::new(board),
            rgb,
            store,
        }
    }

    pub fn post_init(&mut self) {
        self.keymap.keyboard_post_init(&mut self.rgb, &mut self.store);
    }

    pub fn layer_state_set(&mut self, state: LayerState) -> LayerState {
        self.keymap.layer_state_set(state, &mut self.rgb)
    }

    pub fn post_process_record(&mut self, keycode: u16, record: &KeyRecord) {
        self.keymap.post_process_record(keycode, record, &self.rgb);
    }

    pub fn matrix_scan(&mut self, now: Instant) -> bool {
        self.keymap.matrix_scan(now, &self.rgb, &mut self.store)
    }
}

/// Call [Keyboard::matrix_scan] every `period` until `stop` is signalled.
pub async fn run_matrix_scan<M: RawMutex, B: Board, R: RgbMatrix, S: ConfigStore>(
    keyboard: &Mutex<M, RefCell<Keyboard<B, R, S>>>,
    period: Duration,
    stop: &Signal<M, ()>,
) {
    let mut ticker = Ticker::every(period);
    loop {
        match select(ticker.next(), stop.wait()).await {
            Either::First(_) => {
                let now = Instant::now();
                if keyboard.lock(|k| k.borrow_mut().matrix_scan(now)) {
                    crate::debug!("rgb config flushed at {}", now.as_millis());
                }
            }
            Either::Second(_) => break,
        }
    }
    crate::debug!("matrix scan stopped");
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod test;
