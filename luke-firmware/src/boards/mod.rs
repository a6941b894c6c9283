//! The two split keyboards. Both halves share one matrix: left half on the top rows, right half
//! below it. Column 0 is the outer edge on either half, so the right half reads mirrored.

use crate::KeyPos;

pub mod chiri_ce;
pub mod iris_ce;

pub use chiri_ce::ChiriCe;
pub use iris_ce::IrisCe;

pub(crate) const COLS: usize = 6;

/// Matrix positions in the order keys appear in a split `layout(...)` listing:
///
/// * `finger_rows` rows of six keys per half, left then right;
/// * the last finger row gains an inner key on each side (after the left six, before the right
///   six);
/// * three thumb keys per side.
///
/// Inner and thumb keys sit on the bottom row of their half, inner at column 5 and thumbs at
/// columns 2..=4.
pub(crate) const fn split_positions<const N: usize>(
    finger_rows: u8,
    half_rows: u8,
) -> [KeyPos; N] {
    assert!(finger_rows < half_rows);
    let c = COLS as u8;
    let bottom_l = half_rows - 1;
    let bottom_r = 2 * half_rows - 1;

    let mut p = [KeyPos::new(0, 0); N];
    let mut i = 0;
    let mut r = 0;
    while r < finger_rows {
        let mut col = 0;
        while col < c {
            p[i] = KeyPos::new(r, col);
            i += 1;
            col += 1;
        }
        if r + 1 == finger_rows {
            p[i] = KeyPos::new(bottom_l, 5);
            p[i + 1] = KeyPos::new(bottom_r, 5);
            i += 2;
        }
        let mut col = 0;
        while col < c {
            p[i] = KeyPos::new(half_rows + r, c - 1 - col);
            i += 1;
            col += 1;
        }
        r += 1;
    }

    let mut t = 0;
    while t < 3 {
        p[i + t] = KeyPos::new(bottom_l, 2 + t as u8);
        p[i + 3 + t] = KeyPos::new(bottom_r, 4 - t as u8);
        t += 1;
    }
    i += 6;

    assert!(i == N);
    p
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod test;
