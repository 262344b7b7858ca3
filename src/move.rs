use crate::prelude::*;

/// One quarter or half turn in standard notation: a face letter, optionally
/// suffixed by `'` (counter-clockwise) or `2` (half turn).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Single,
    Double,
    Reverse,
}

impl Move {
    pub fn parse_sequence(s: &str) -> anyhow::Result<Vec<Move>> {
        s.split_whitespace().map(|s| s.parse()).collect()
    }

    pub fn all() -> impl Iterator<Item = Move> {
        Face::all().flat_map(|face| {
            [Direction::Single, Direction::Double, Direction::Reverse]
                .into_iter()
                .map(move |direction| Move { face, direction })
        })
    }

    pub fn reverse(self) -> Move {
        let direction = match self.direction {
            Direction::Single => Direction::Reverse,
            Direction::Reverse => Direction::Single,
            Direction::Double => Direction::Double,
        };
        Move {
            face: self.face,
            direction,
        }
    }
}

impl core::str::FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Move> {
        let mut chars = s.chars();
        let face_char = match chars.next() {
            Some(c) => c,
            None => return Err(anyhow::anyhow!("No face for move")),
        };

        let face = match Face::from_letter(face_char) {
            Some(face) => face,
            None => return Err(anyhow::anyhow!("Unrecognized face {}", face_char)),
        };

        let direction = match chars.next() {
            None => Direction::Single,
            Some('\'') => Direction::Reverse,
            Some('2') => Direction::Double,
            Some(c) => return Err(anyhow::anyhow!("Unrecognized direction {}", c)),
        };

        if let Some(c) = chars.next() {
            return Err(anyhow::anyhow!("Trailing character {} in move {}", c, s));
        }

        Ok(Move { face, direction })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.face.letter())?;
        match self.direction {
            Direction::Single => Ok(()),
            Direction::Double => write!(f, "2"),
            Direction::Reverse => write!(f, "'"),
        }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Move {
    fn arbitrary(g: &mut quickcheck::Gen) -> Move {
        let faces: Vec<Face> = Face::all().collect();
        let directions = [Direction::Single, Direction::Double, Direction::Reverse];
        Move {
            face: *g.choose(&faces).unwrap(),
            direction: *g.choose(&directions).unwrap(),
        }
    }
}
