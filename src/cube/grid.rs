use crate::prelude::*;

/// One face's 9 stickers in row-major reading order:
///
/// ```text
///  0 1 2
///  3 4 5
///  6 7 8
/// ```
///
/// Index 4 is the center. Centers never move under rotation, so the center
/// color identifies which logical face the grid belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StickerGrid([Color; 9]);

pub const CENTER: usize = 4;

// new[i] = old[table[i]] for a 90-degree turn of the face itself.
const ROTATE_CW: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];
const ROTATE_CCW: [usize; 9] = [2, 5, 8, 1, 4, 7, 0, 3, 6];

impl StickerGrid {
    pub fn new(stickers: [Color; 9]) -> StickerGrid {
        StickerGrid(stickers)
    }

    pub fn monochrome(color: Color) -> StickerGrid {
        StickerGrid([color; 9])
    }

    pub fn stickers(&self) -> &[Color; 9] {
        &self.0
    }

    pub fn center(&self) -> Color {
        self.0[CENTER]
    }

    pub(crate) fn get(&self, index: usize) -> Color {
        self.0[index]
    }

    pub(crate) fn set(&mut self, index: usize, color: Color) {
        self.0[index] = color;
    }

    pub(crate) fn rotated_cw(&self) -> StickerGrid {
        self.permuted(&ROTATE_CW)
    }

    pub(crate) fn rotated_ccw(&self) -> StickerGrid {
        self.permuted(&ROTATE_CCW)
    }

    fn permuted(&self, table: &[usize; 9]) -> StickerGrid {
        let mut next = self.0;
        for (i, &source) in table.iter().enumerate() {
            next[i] = self.0[source];
        }
        StickerGrid(next)
    }
}
