use embedded_storage::nor_flash::NorFlashErrorKind;

use crate::{
    flash_test_stub::{Action, NorFlashStub},
    rgb::{Hsv, RgbMode},
};

use super::*;

extern crate std;

fn config(v: u8) -> RgbConfig {
    RgbConfig {
        enable: true,
        mode: RgbMode::SolidColor,
        hsv: Hsv::new(0, 0, v),
        speed: 128,
    }
}

#[test]
fn blank_flash_is_not_formatted() {
    let mut flash = NorFlashStub::<256>::erased();
    let mut store = FlashConfigStore::<_, 64>::new(&mut flash);
    assert_eq!(store.read_rgb_matrix(), Err(StorageError::NotFormatted));
}

#[test]
fn write_then_read() {
    let mut flash = NorFlashStub::<256>::erased();
    {
        let mut store = FlashConfigStore::<_, 64>::new(&mut flash);
        store.update_rgb_matrix(&config(120)).unwrap();
        assert_eq!(store.read_rgb_matrix(), Ok(config(120)));
    }

    assert_eq!(
        flash.actions,
        [
            Action::Erase(64, 128),
            Action::Write(
                64,
                std::vec![0x4c, 0x4b, 0x45, 0x43, 1, 6, 1, 1, 0, 0, 120, 128, 0xdf]
            ),
        ]
    );
    // neighbouring sectors untouched
    assert!(flash.buf[..64].iter().all(|b| *b == 0xff));
    assert!(flash.buf[128..].iter().all(|b| *b == 0xff));
}

#[test]
fn unchanged_config_is_not_rewritten() {
    let mut flash = NorFlashStub::<256>::erased();
    {
        let mut store = FlashConfigStore::<_, 0>::new(&mut flash);
        store.update_rgb_matrix(&config(100)).unwrap();
        store.update_rgb_matrix(&config(100)).unwrap();
    }
    assert_eq!(flash.write_count(), 1);
    assert_eq!(flash.erase_count(), 1);

    {
        let mut store = FlashConfigStore::<_, 0>::new(&mut flash);
        store.update_rgb_matrix(&config(101)).unwrap();
        assert_eq!(store.read_rgb_matrix(), Ok(config(101)));
    }
    assert_eq!(flash.write_count(), 2);
}

#[test]
fn corrupt_record() {
    let mut flash = NorFlashStub::<256>::erased();
    {
        let mut store = FlashConfigStore::<_, 0>::new(&mut flash);
        store.update_rgb_matrix(&config(50)).unwrap();
    }
    flash.buf[10] = 51;
    {
        let mut store = FlashConfigStore::<_, 0>::new(&mut flash);
        assert_eq!(store.read_rgb_matrix(), Err(StorageError::Corrupt));
    }

    flash.buf[4] = 9;
    {
        let mut store = FlashConfigStore::<_, 0>::new(&mut flash);
        assert_eq!(store.read_rgb_matrix(), Err(StorageError::VersionMismatch));
        // a bad record gets replaced
        store.update_rgb_matrix(&config(50)).unwrap();
        assert_eq!(store.read_rgb_matrix(), Ok(config(50)));
    }
}

#[test]
fn flash_errors_are_mapped() {
    let mut flash = NorFlashStub::<256>::erased();
    flash.fail_with = Some(NorFlashErrorKind::NotAligned);
    {
        let mut store = FlashConfigStore::<_, 0>::new(&mut flash);
        assert_eq!(
            store.update_rgb_matrix(&config(1)),
            Err(StorageError::NotAligned)
        );
    }

    flash.fail_with = Some(NorFlashErrorKind::Other);
    let mut store = FlashConfigStore::<_, 0>::new(&mut flash);
    assert_eq!(store.erase(), Err(StorageError::Flash));
}

#[test]
fn sector_past_end_is_out_of_bounds() {
    let mut flash = NorFlashStub::<128>::erased();
    let mut store = FlashConfigStore::<_, 128>::new(&mut flash);
    assert_eq!(store.read_rgb_matrix(), Err(StorageError::OutOfBounds));
}
