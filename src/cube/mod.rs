use crate::prelude::*;

use enum_iterator::Sequence;

mod grid;
mod rotation;
mod state;

pub use grid::StickerGrid;
pub use rotation::rotate;
pub use state::CubeState;

/// The six faces of the cube, in facelet-string order (U, R, F, D, L, B).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence)]
pub enum Face {
    Up,
    Right,
    Front,
    Down,
    Left,
    Back,
}

impl Face {
    pub fn all() -> impl Iterator<Item = Face> {
        enum_iterator::all()
    }

    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Back => 'B',
        }
    }

    pub fn from_letter(c: char) -> Option<Face> {
        match c.to_ascii_uppercase() {
            'U' => Some(Face::Up),
            'R' => Some(Face::Right),
            'F' => Some(Face::Front),
            'D' => Some(Face::Down),
            'L' => Some(Face::Left),
            'B' => Some(Face::Back),
            _ => None,
        }
    }

    /// This face's center color under the fixed standard scheme.
    pub fn color(self) -> Color {
        match self {
            Face::Up => Color::White,
            Face::Right => Color::Red,
            Face::Front => Color::Green,
            Face::Down => Color::Yellow,
            Face::Left => Color::Orange,
            Face::Back => Color::Blue,
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_order_matches_facelet_string_order() {
        let letters: String = Face::all().map(Face::letter).collect();
        assert_eq!(letters, "URFDLB");
    }

    #[test]
    fn letters_round_trip() {
        for face in Face::all() {
            assert_eq!(Face::from_letter(face.letter()), Some(face));
        }
    }
}
