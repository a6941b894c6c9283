use crate::rgb::RgbConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    NotFormatted,
    VersionMismatch,
    Corrupt,
    NotAligned,
    OutOfBounds,
    Flash,
}

/// Non-volatile settings owned by the host runtime.
pub trait ConfigStore {
    fn read_rgb_matrix(&mut self) -> Result<RgbConfig, StorageError>;

    /// Persist `config` unless the stored copy already matches it.
    fn update_rgb_matrix(&mut self, config: &RgbConfig) -> Result<(), StorageError>;
}
