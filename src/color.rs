use crate::prelude::*;

use enum_iterator::Sequence;

/// The six sticker colors, in the same order as their home faces (U, R, F,
/// D, L, B under the standard scheme).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence)]
pub enum Color {
    White,
    Red,
    Green,
    Yellow,
    Orange,
    Blue,
}

impl Color {
    pub fn all() -> impl Iterator<Item = Color> {
        enum_iterator::all()
    }

    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::Blue => 'B',
        }
    }

    pub fn from_letter(c: char) -> Option<Color> {
        match c.to_ascii_uppercase() {
            'W' => Some(Color::White),
            'R' => Some(Color::Red),
            'G' => Some(Color::Green),
            'Y' => Some(Color::Yellow),
            'O' => Some(Color::Orange),
            'B' => Some(Color::Blue),
            _ => None,
        }
    }

    /// The color on the far side of the cube. Opposite colors never share a
    /// physical piece.
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Yellow,
            Color::Yellow => Color::White,
            Color::Red => Color::Orange,
            Color::Orange => Color::Red,
            Color::Green => Color::Blue,
            Color::Blue => Color::Green,
        }
    }

    /// The face this color sits on in a solved cube under the fixed
    /// standard scheme (White=U, Red=R, Green=F, Yellow=D, Orange=L,
    /// Blue=B). The solver's notation assumes this scheme.
    pub fn home_face(self) -> Face {
        match self {
            Color::White => Face::Up,
            Color::Red => Face::Right,
            Color::Green => Face::Front,
            Color::Yellow => Face::Down,
            Color::Orange => Face::Left,
            Color::Blue => Face::Back,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
