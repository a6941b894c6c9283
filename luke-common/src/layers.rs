pub const DFLT: u8 = 0;
pub const GAME: u8 = 1;
pub const NAV: u8 = 2;
pub const SYS: u8 = 3;
pub const NUM: u8 = 4;
pub const CFG: u8 = 5;

pub const MAX_LAYERS: u8 = 32;

/// Bit set of active layers. The highest set bit is the layer whose keys win.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState(u32);

impl LayerState {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    pub const fn with(layer: u8) -> Self {
        Self(mask(layer))
    }

    pub const fn is_on(&self, layer: u8) -> bool {
        self.0 & mask(layer) != 0
    }

    pub fn on(&mut self, layer: u8) {
        self.0 |= mask(layer);
    }

    pub fn off(&mut self, layer: u8) {
        self.0 &= !mask(layer);
    }

    pub fn toggle(&mut self, layer: u8) {
        self.0 ^= mask(layer);
    }

    pub fn move_to(&mut self, layer: u8) {
        self.0 = mask(layer);
    }

    /// The highest active layer, or 0 when nothing is active.
    pub const fn highest(&self) -> u8 {
        if self.0 == 0 {
            0
        } else {
            (31 - self.0.leading_zeros()) as u8
        }
    }

    /// Active layers from highest to lowest.
    pub fn iter_down(&self) -> impl Iterator<Item = u8> {
        let bits = self.0;
        (0..MAX_LAYERS).rev().filter(move |l| bits & (1 << l) != 0)
    }
}

const fn mask(layer: u8) -> u32 {
    if layer < MAX_LAYERS {
        1 << layer
    } else {
        0
    }
}

#[cfg(test)]
#[path = "layers_test.rs"]
mod test;
