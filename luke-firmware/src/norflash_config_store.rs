use embedded_storage::nor_flash::{self, NorFlash};

use crate::{
    config_store::{ConfigStore, StorageError},
    rgb::RgbConfig,
};

const FORMAT_MAGIC_NUMBER: [u8; 4] = 0x4c4b4543u32.to_be_bytes();
const FORMAT_VERSION: u8 = 1;

const HEADER_LEN: usize = FORMAT_MAGIC_NUMBER.len() + 2;
const RECORD_LEN: usize = HEADER_LEN + RgbConfig::SERIALIZED_LEN + 1;
const BUFFER_LEN: usize = 256;

/// Keeps the RGB matrix settings in one erase sector of NOR flash starting at `BASE`.
///
/// Record layout: magic number, format version, payload length, payload, checksum; padded with
/// `0xff` up to the flash read/write granularity.
pub struct FlashConfigStore<'d, F: NorFlash, const BASE: u32> {
    flash: &'d mut F,
}

const fn max(a: usize, b: usize) -> usize {
    if a < b {
        b
    } else {
        a
    }
}

const fn assert_store_params<const BASE: u32>(
    read_size: usize,
    write_size: usize,
    erase_size: usize,
) -> usize {
    let unit = max(max(read_size, write_size), 1);
    let padded = RECORD_LEN.div_ceil(unit) * unit;
    assert!(padded <= BUFFER_LEN);
    assert!(padded <= erase_size);
    assert!(BASE as usize % erase_size == 0);
    padded
}

fn map_flash_error(err: impl nor_flash::NorFlashError) -> StorageError {
    match err.kind() {
        nor_flash::NorFlashErrorKind::NotAligned => StorageError::NotAligned,
        nor_flash::NorFlashErrorKind::OutOfBounds => StorageError::OutOfBounds,
        _ => StorageError::Flash,
    }
}

fn checksum(bytes: &[u8]) -> u8 {
    !bytes.iter().fold(0u8, |a, b| a.wrapping_add(*b))
}

impl<'d, F: NorFlash, const BASE: u32> FlashConfigStore<'d, F, BASE> {
    const PADDED_LEN: usize =
        assert_store_params::<BASE>(F::READ_SIZE, F::WRITE_SIZE, F::ERASE_SIZE);

    pub fn new(flash: &'d mut F) -> Self {
        Self { flash }
    }

    fn encode(config: &RgbConfig, buf: &mut [u8; BUFFER_LEN]) {
        buf.fill(0xff);
        buf[..4].copy_from_slice(&FORMAT_MAGIC_NUMBER);
        buf[4] = FORMAT_VERSION;
        buf[5] = RgbConfig::SERIALIZED_LEN as u8;
        buf[HEADER_LEN..RECORD_LEN - 1].copy_from_slice(&config.to_bytes());
        buf[RECORD_LEN - 1] = checksum(&buf[..RECORD_LEN - 1]);
    }

    fn decode(buf: &[u8]) -> Result<RgbConfig, StorageError> {
        if buf[..4] != FORMAT_MAGIC_NUMBER {
            return Err(StorageError::NotFormatted);
        }
        if buf[4] != FORMAT_VERSION {
            return Err(StorageError::VersionMismatch);
        }
        if buf[5] as usize != RgbConfig::SERIALIZED_LEN
            || checksum(&buf[..RECORD_LEN - 1]) != buf[RECORD_LEN - 1]
        {
            return Err(StorageError::Corrupt);
        }
        RgbConfig::from_bytes(&buf[HEADER_LEN..RECORD_LEN - 1]).ok_or(StorageError::Corrupt)
    }

    pub fn erase(&mut self) -> Result<(), StorageError> {
        self.flash
            .erase(BASE, BASE + F::ERASE_SIZE as u32)
            .map_err(map_flash_error)
    }
}

impl<F: NorFlash, const BASE: u32> ConfigStore for FlashConfigStore<'_, F, BASE> {
    fn read_rgb_matrix(&mut self) -> Result<RgbConfig, StorageError> {
        let mut buf = [0u8; BUFFER_LEN];
        self.flash
            .read(BASE, &mut buf[..Self::PADDED_LEN])
            .map_err(map_flash_error)?;
        Self::decode(&buf)
    }

    fn update_rgb_matrix(&mut self, config: &RgbConfig) -> Result<(), StorageError> {
        match self.read_rgb_matrix() {
            Ok(current) if current == *config => {
                crate::debug!("rgb config unchanged");
                return Ok(());
            }
            Ok(_) => {}
            Err(err) => crate::debug!("rewriting rgb config: {:?}", err),
        }

        let mut buf = [0u8; BUFFER_LEN];
        Self::encode(config, &mut buf);
        self.erase()?;
        self.flash
            .write(BASE, &buf[..Self::PADDED_LEN])
            .map_err(map_flash_error)
    }
}

#[cfg(test)]
#[path = "norflash_config_store_test.rs"]
mod test;
