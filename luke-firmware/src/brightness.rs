//! Coalesces bursts of brightness changes into one delayed storage write.

use embassy_time::{Duration, Instant};
use luke_common::globals::{BRIGHTNESS_SAVE_DELAY_MS, DEFAULT_BRIGHTNESS};

pub const SAVE_DELAY: Duration = Duration::from_millis(BRIGHTNESS_SAVE_DELAY_MS);

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BrightnessSaver {
    value: u8,
    /// `Some` while a change is waiting to be saved.
    changed_at: Option<Instant>,
    delay: Duration,
}

impl Default for BrightnessSaver {
    fn default() -> Self {
        Self::new(DEFAULT_BRIGHTNESS)
    }
}

impl BrightnessSaver {
    pub const fn new(value: u8) -> Self {
        Self::with_delay(value, SAVE_DELAY)
    }

    pub const fn with_delay(value: u8, delay: Duration) -> Self {
        Self {
            value,
            changed_at: None,
            delay,
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Mirror `value` without scheduling a save.
    pub fn set_value(&mut self, value: u8) {
        self.value = value;
    }

    pub fn is_pending(&self) -> bool {
        self.changed_at.is_some()
    }

    /// Remember a user change and restart the quiet period.
    pub fn record(&mut self, value: u8, now: Instant) {
        self.value = value;
        self.changed_at = Some(now);
    }

    /// Returns the value to save once the quiet period has passed, clearing the pending change.
    pub fn poll(&mut self, now: Instant) -> Option<u8> {
        let changed_at = self.changed_at?;
        if now.saturating_duration_since(changed_at) < self.delay {
            return None;
        }
        self.changed_at = None;
        Some(self.value)
    }

    /// When the pending change becomes due.
    pub fn due_at(&self) -> Option<Instant> {
        self.changed_at.map(|t| t + self.delay)
    }
}

#[cfg(test)]
#[path = "brightness_test.rs"]
mod test;
