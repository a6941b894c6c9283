/// Maximum time in ms between press and release for a tap-hold key to count as a tap.
pub const TAPPING_TERM: u16 = 200;
pub const FLOW_TAP_TERM: u16 = 200;

/// Extra tapping term given to home and bottom row mods.
pub const MOD_TAP_EXTRA: u16 = 100;

/// Brightness changes are written to storage after this many ms of no further changes.
pub const BRIGHTNESS_SAVE_DELAY_MS: u64 = 1000;
pub const DEFAULT_BRIGHTNESS: u8 = 64;

pub const RGB_MATRIX_TIMEOUT_MS: u32 = 60000;
