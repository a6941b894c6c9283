extern crate std;

use embassy_futures::{block_on, join::join};
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_time::Timer;
use luke_common::{
    keycodes::RM_VALU,
    layers::{GAME, NAV},
};
use std::vec::Vec;

use crate::{
    boards::ChiriCe,
    config_store::StorageError,
    rgb::{Hsv, RgbConfig, RgbMode, RED},
    time_driver_test_stub::{self, set_time},
    KeyPos,
};

use super::*;

#[derive(Default)]
struct Rgb(RgbConfig);

impl RgbMatrix for Rgb {
    fn enable_noeeprom(&mut self) {
        self.0.enable = true;
    }

    fn mode_noeeprom(&mut self, mode: RgbMode) {
        self.0.mode = mode;
    }

    fn sethsv_noeeprom(&mut self, hsv: Hsv) {
        self.0.hsv = hsv;
    }

    fn val(&self) -> u8 {
        self.0.hsv.v
    }

    fn config(&self) -> RgbConfig {
        self.0
    }

    fn load_config(&mut self, config: RgbConfig) {
        self.0 = config;
    }
}

#[derive(Default)]
struct Store(Vec<RgbConfig>);

impl ConfigStore for Store {
    fn read_rgb_matrix(&mut self) -> Result<RgbConfig, StorageError> {
        self.0.last().copied().ok_or(StorageError::NotFormatted)
    }

    fn update_rgb_matrix(&mut self, config: &RgbConfig) -> Result<(), StorageError> {
        self.0.push(*config);
        Ok(())
    }
}

type Shared = Mutex<NoopRawMutex, RefCell<Keyboard<ChiriCe, Rgb, Store>>>;

fn shared() -> Shared {
    Mutex::new(RefCell::new(Keyboard::new(
        ChiriCe,
        Rgb::default(),
        Store::default(),
    )))
}

#[test]
fn keyboard_forwards_hooks() {
    set_time(Instant::from_millis(0));
    let mut kb = Keyboard::new(ChiriCe, Rgb::default(), Store::default());
    kb.post_init();
    assert_eq!(kb.rgb.0.hsv, Hsv::new(0, 0, 64));

    let mut state = LayerState::with(NAV);
    state.on(GAME);
    state.off(NAV);
    assert_eq!(kb.layer_state_set(state), state);
    assert_eq!(kb.rgb.0.hsv, RED.with_value(64));

    kb.rgb.0.hsv.v = 80;
    kb.post_process_record(RM_VALU, &KeyRecord::new(KeyPos::new(5, 5), true, Instant::now()));
    assert!(!kb.matrix_scan(Instant::from_millis(999)));
    assert!(kb.matrix_scan(Instant::from_millis(1000)));
    assert_eq!(kb.store.0.len(), 1);
    assert_eq!(kb.store.0[0].hsv.v, 80);
}

#[test]
fn stops_when_signalled() {
    set_time(Instant::from_millis(0));
    let kb = shared();
    let stop = Signal::<NoopRawMutex, ()>::new();
    stop.signal(());

    block_on(run_matrix_scan(&kb, SCAN_PERIOD, &stop));

    kb.lock(|k| assert!(k.borrow().store.0.is_empty()));
}

#[test]
fn flushes_pending_brightness() {
    set_time(Instant::from_millis(5));
    let kb = shared();
    let stop = Signal::<NoopRawMutex, ()>::new();
    kb.lock(|k| {
        let mut k = k.borrow_mut();
        k.rgb.0.hsv.v = 120;
        k.post_process_record(
            RM_VALU,
            &KeyRecord::new(KeyPos::new(5, 5), true, Instant::now()),
        );
    });

    block_on(join(run_matrix_scan(&kb, SCAN_PERIOD, &stop), async {
        loop {
            Timer::after(SCAN_PERIOD).await;
            if kb.lock(|k| !k.borrow().keymap.brightness().is_pending()) {
                break;
            }
        }
        stop.signal(());
    }));

    assert!(Instant::now() >= Instant::from_millis(1005));
    assert!(time_driver_test_stub::wake_count() > 0);
    kb.lock(|k| {
        let k = k.borrow();
        assert_eq!(k.store.0.len(), 1);
        assert_eq!(k.store.0[0].hsv.v, 120);
    });
}
