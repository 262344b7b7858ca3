use crate::prelude::*;

use super::grid::CENTER;

/// The full 54-sticker configuration, one grid per face.
///
/// A value is only ever changed through [`CubeState::apply`] (which builds a
/// whole new state) or [`CubeState::set_sticker`] (single-sticker recolor
/// for manual entry). Recoloring may leave the state unrealizable until the
/// caller finishes editing and runs [`validate`]; rotation preserves
/// validity by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeState {
    up: StickerGrid,
    right: StickerGrid,
    front: StickerGrid,
    down: StickerGrid,
    left: StickerGrid,
    back: StickerGrid,
}

impl CubeState {
    /// Each face monochrome in its canonical color.
    pub fn solved() -> CubeState {
        CubeState {
            up: StickerGrid::monochrome(Face::Up.color()),
            right: StickerGrid::monochrome(Face::Right.color()),
            front: StickerGrid::monochrome(Face::Front.color()),
            down: StickerGrid::monochrome(Face::Down.color()),
            left: StickerGrid::monochrome(Face::Left.color()),
            back: StickerGrid::monochrome(Face::Back.color()),
        }
    }

    /// Grids in facelet-string face order (U, R, F, D, L, B).
    pub fn from_grids(grids: [StickerGrid; 6]) -> CubeState {
        let [up, right, front, down, left, back] = grids;
        CubeState {
            up,
            right,
            front,
            down,
            left,
            back,
        }
    }

    pub fn grid(&self, face: Face) -> &StickerGrid {
        match face {
            Face::Up => &self.up,
            Face::Right => &self.right,
            Face::Front => &self.front,
            Face::Down => &self.down,
            Face::Left => &self.left,
            Face::Back => &self.back,
        }
    }

    pub(crate) fn grid_mut(&mut self, face: Face) -> &mut StickerGrid {
        match face {
            Face::Up => &mut self.up,
            Face::Right => &mut self.right,
            Face::Front => &mut self.front,
            Face::Down => &mut self.down,
            Face::Left => &mut self.left,
            Face::Back => &mut self.back,
        }
    }

    pub fn sticker(&self, face: Face, index: usize) -> Result<Color, CubeError> {
        if index > 8 {
            return Err(CubeError::IndexOutOfRange { index });
        }
        Ok(self.grid(face).get(index))
    }

    /// Recolor one sticker. The center (index 4) is structurally fixed; it
    /// defines the face-to-color correspondence the codec relies on, so
    /// writes to it are rejected.
    pub fn set_sticker(&mut self, face: Face, index: usize, color: Color) -> Result<(), CubeError> {
        if index > 8 {
            return Err(CubeError::IndexOutOfRange { index });
        }
        if index == CENTER {
            return Err(CubeError::CenterWrite { face });
        }
        self.grid_mut(face).set(index, color);
        Ok(())
    }

    pub fn count_of(&self, color: Color) -> usize {
        Face::all()
            .flat_map(|face| self.grid(face).stickers())
            .filter(|&&sticker| sticker == color)
            .count()
    }

    pub fn apply(self, move_: Move) -> CubeState {
        rotate(&self, move_.face, move_.direction)
    }

    pub fn apply_all(self, moves: impl IntoIterator<Item = Move>) -> CubeState {
        moves.into_iter().fold(self, |cube, m| cube.apply(m))
    }
}

impl std::fmt::Display for CubeState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let row = |face: Face, r: usize| {
            let s = self.grid(face).stickers();
            format!("{}{}{}", s[r * 3], s[r * 3 + 1], s[r * 3 + 2])
        };

        for r in 0..3 {
            writeln!(f, "    {}", row(Face::Up, r))?;
        }
        for r in 0..3 {
            writeln!(
                f,
                "{} {} {} {}",
                row(Face::Left, r),
                row(Face::Front, r),
                row(Face::Right, r),
                row(Face::Back, r)
            )?;
        }
        for r in 0..3 {
            writeln!(f, "    {}", row(Face::Down, r))?;
        }

        Ok(())
    }
}
