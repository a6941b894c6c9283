use luke_common::{
    keycodes::{KC_NO, KC_TRNS},
    layers::LayerState,
};

use crate::KeyPos;

pub type Layer<const ROWS: usize, const COLS: usize> = [[u16; COLS]; ROWS];

/// Static keycode tables for one board, one matrix-shaped [Layer] per layer index.
#[derive(Debug)]
pub struct Keymap<const ROWS: usize, const COLS: usize>(&'static [Layer<ROWS, COLS>]);

impl<const ROWS: usize, const COLS: usize> Keymap<ROWS, COLS> {
    pub const fn new(layers: &'static [Layer<ROWS, COLS>]) -> Self {
        Self(layers)
    }

    pub const fn layer_count(&self) -> usize {
        self.0.len()
    }

    pub const fn rows(&self) -> usize {
        ROWS
    }

    pub const fn columns(&self) -> usize {
        COLS
    }

    pub fn layer(&self, layer: u8) -> Option<&'static Layer<ROWS, COLS>> {
        self.0.get(layer as usize)
    }

    /// The keycode at `pos` on `layer`; [KC_NO] when either is out of range.
    pub fn get(&self, layer: u8, pos: KeyPos) -> u16 {
        self.layer(layer)
            .and_then(|l| l.get(pos.row()))
            .and_then(|r| r.get(pos.column()))
            .copied()
            .unwrap_or(KC_NO)
    }

    /// Find the keycode a press at `pos` produces. Active layers are searched from the highest
    /// down; transparent entries fall through and the default layer is the last resort.
    pub fn resolve(&self, state: LayerState, default_layer: u8, pos: KeyPos) -> u16 {
        for layer in state.iter_down() {
            if layer as usize >= self.0.len() {
                continue;
            }
            let code = self.get(layer, pos);
            if code != KC_TRNS {
                return code;
            }
        }
        match self.get(default_layer, pos) {
            KC_TRNS => KC_NO,
            code => code,
        }
    }

    /// Every matrix position holding `keycode` on `layer`.
    pub fn positions_of(&self, layer: u8, keycode: u16) -> impl Iterator<Item = KeyPos> + '_ {
        self.layer(layer).into_iter().flat_map(move |l| {
            l.iter().enumerate().flat_map(move |(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(move |&(_, &kc)| kc == keycode)
                    .map(move |(c, _)| KeyPos::new(r as u8, c as u8))
            })
        })
    }
}

/// Spread keycodes given in visual order over the matrix. `positions[i]` is the matrix
/// position of the i-th key; positions not listed stay [KC_NO].
pub const fn place<const ROWS: usize, const COLS: usize, const N: usize>(
    positions: &[KeyPos; N],
    keys: [u16; N],
) -> Layer<ROWS, COLS> {
    let mut layer = [[KC_NO; COLS]; ROWS];
    let mut i = 0;
    while i < N {
        let pos = positions[i];
        assert!((pos.row as usize) < ROWS && (pos.col as usize) < COLS);
        layer[pos.row as usize][pos.col as usize] = keys[i];
        i += 1;
    }
    layer
}

#[cfg(test)]
#[path = "keymap_test.rs"]
mod test;
