use crate::prelude::*;

use thiserror::Error;

/// Everything that can go wrong between raw sticker input and the solver
/// boundary. All variants are recoverable: callers render them as user
/// messages, nothing here aborts the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("malformed input: expected {expected}, got {got}")]
    Structure { expected: String, got: String },

    #[error("sticker index {index} is out of range (0..=8)")]
    IndexOutOfRange { index: usize },

    #[error("sticker 4 is the {face} face's center and cannot be recolored")]
    CenterWrite { face: Face },

    #[error("declared center {declared} does not match the center sticker {found}")]
    CenterMismatch { declared: Color, found: Color },

    #[error("no face is centered on {0}")]
    MissingCenter(Color),

    #[error("more than one face is centered on {0}")]
    DuplicateCenter(Color),

    #[error("color {color} appears {count} times, expected 9")]
    ColorCount { color: Color, count: usize },

    #[error("{a} and {b} are opposite colors and cannot share a piece")]
    OppositeColors { a: Color, b: Color },

    #[error("color {0} appears more than once on a single piece")]
    DuplicateColor(Color),

    #[error("unknown color code '{0}', valid codes are W, R, G, Y, O, B")]
    UnknownColor(char),

    #[error("unknown facelet letter '{0}', valid letters are U, R, F, D, L, B")]
    UnknownFacelet(char),

    #[error("sticker color {0} does not match any center")]
    MissingCenterColor(Color),

    #[error("solver: {0}")]
    Solver(String),
}

/// Decide whether `state` could be a physically assembled cube, as far as
/// sticker structure can tell: distinct centers covering all six colors,
/// then nine stickers of each color. Checks short-circuit in that order.
///
/// Permutation parity (whether the exact arrangement is reachable by legal
/// turns) is deliberately not checked here; the external solver reports
/// that as its own failure. A single recolored sticker can produce a state
/// that passes this function and still has no solution.
pub fn validate(state: &CubeState) -> Result<(), CubeError> {
    check_centers(state)?;
    check_color_counts(state)?;
    Ok(())
}

fn check_centers(state: &CubeState) -> Result<(), CubeError> {
    for color in Color::all() {
        let centers = Face::all()
            .filter(|&face| state.grid(face).center() == color)
            .count();
        match centers {
            0 => return Err(CubeError::MissingCenter(color)),
            1 => {}
            _ => return Err(CubeError::DuplicateCenter(color)),
        }
    }
    Ok(())
}

fn check_color_counts(state: &CubeState) -> Result<(), CubeError> {
    for color in Color::all() {
        let count = state.count_of(color);
        if count != 9 {
            return Err(CubeError::ColorCount { color, count });
        }
    }
    Ok(())
}

/// The small-set piece check used when stickers are entered a piece at a
/// time: the colors on one physical piece are pairwise distinct and never
/// include an opposite pair.
pub fn check_piece(stickers: &[Color]) -> Result<(), CubeError> {
    for (i, &a) in stickers.iter().enumerate() {
        for &b in &stickers[i + 1..] {
            if a == b {
                return Err(CubeError::DuplicateColor(a));
            }
            if a.opposite() == b {
                return Err(CubeError::OppositeColors { a, b });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::*;

    #[test]
    fn accepts_the_solved_cube() {
        assert_eq!(validate(&CubeState::solved()), Ok(()));
    }

    #[test]
    fn accepts_any_scramble() {
        assert_eq!(validate(&cube_with_moves("R U2 F' L D B2 R' U")), Ok(()));
    }

    #[test]
    fn rejects_unbalanced_color_counts() {
        // Ten white, eight yellow, all else untouched.
        let mut cube = CubeState::solved();
        cube.set_sticker(Face::Down, 0, White).unwrap();

        assert_eq!(
            validate(&cube),
            Err(CubeError::ColorCount {
                color: White,
                count: 10
            })
        );
    }

    #[test]
    fn rejects_duplicate_centers() {
        let cube = CubeState::from_grids([
            StickerGrid::monochrome(White),
            StickerGrid::monochrome(Red),
            StickerGrid::monochrome(Green),
            StickerGrid::monochrome(White),
            StickerGrid::monochrome(Orange),
            StickerGrid::monochrome(Blue),
        ]);

        assert_eq!(validate(&cube), Err(CubeError::DuplicateCenter(White)));
    }

    #[test]
    fn center_check_runs_before_color_counts() {
        // Both checks would fail here; the center one must win.
        let mut grid = [Yellow; 9];
        grid[4] = White;
        let cube = CubeState::from_grids([
            StickerGrid::new(grid),
            StickerGrid::monochrome(Red),
            StickerGrid::monochrome(Green),
            StickerGrid::monochrome(White),
            StickerGrid::monochrome(Orange),
            StickerGrid::monochrome(Blue),
        ]);

        assert_eq!(validate(&cube), Err(CubeError::DuplicateCenter(White)));
    }

    #[test]
    fn piece_check_accepts_legal_corners() {
        assert_eq!(check_piece(&[White, Red, Green]), Ok(()));
        assert_eq!(check_piece(&[Yellow, Blue, Orange]), Ok(()));
    }

    #[test]
    fn piece_check_rejects_opposite_pairs() {
        assert_eq!(
            check_piece(&[White, Yellow, Green]),
            Err(CubeError::OppositeColors { a: White, b: Yellow })
        );
        assert_eq!(
            check_piece(&[Green, Blue]),
            Err(CubeError::OppositeColors { a: Green, b: Blue })
        );
    }

    #[test]
    fn piece_check_rejects_repeats() {
        assert_eq!(
            check_piece(&[Red, Green, Red]),
            Err(CubeError::DuplicateColor(Red))
        );
    }
}
