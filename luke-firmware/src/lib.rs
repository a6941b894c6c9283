#![no_std]
pub mod board;
pub mod boards;
pub mod brightness;
pub mod config_store;
pub mod keymap;
pub mod norflash_config_store;
pub mod rgb;
pub mod runner;
pub mod user;

#[cfg(any(test, feature = "test-utils"))]
pub mod flash_test_stub;
#[cfg(any(test, feature = "test-utils"))]
pub mod time_driver_test_stub;

#[macro_use]
mod macros;

/// Matrix position of a switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyPos {
    pub row: u8,
    pub col: u8,
}
impl KeyPos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn column(&self) -> usize {
        self.col as usize
    }
}

/// A press or release event as delivered by the matrix scanner.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyRecord {
    pub pos: KeyPos,
    pub pressed: bool,
    pub time: embassy_time::Instant,
}
impl KeyRecord {
    pub fn new(pos: KeyPos, pressed: bool, time: embassy_time::Instant) -> Self {
        Self { pos, pressed, time }
    }
}
