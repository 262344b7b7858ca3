use crate::prelude::*;

/// What `encode` produces for a solved cube, and the solver's notion of
/// "done".
pub const SOLVED_FACELETS: &str =
    "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

/// Translate a cube state into the 54-character facelet string the solver
/// consumes: 9 characters per face in U, R, F, D, L, B order, each the
/// face letter of the color occupying that sticker.
///
/// The translation goes through the centers twice. Each output position
/// sources from whichever face is currently centered on that position's
/// canonical color, and each sticker color reads as the letter of the face
/// holding that color as its center. After a scramble a sticker's color
/// says nothing about its position; only the centers tie colors to letters.
pub fn encode(state: &CubeState) -> Result<String, CubeError> {
    let centered_on =
        |color: Color| Face::all().find(|&face| state.grid(face).center() == color);

    let mut out = String::with_capacity(54);
    for position in Face::all() {
        let source =
            centered_on(position.color()).ok_or(CubeError::MissingCenter(position.color()))?;

        for &sticker in state.grid(source).stickers() {
            if centered_on(sticker).is_none() {
                return Err(CubeError::MissingCenterColor(sticker));
            }
            out.push(sticker.home_face().letter());
        }
    }
    Ok(out)
}

/// Rebuild a cube state from a facelet string. Inverse of [`encode`] for
/// any string that describes a structurally legal cube.
pub fn decode(facelets: &str) -> Result<CubeState, CubeError> {
    let chars: Vec<char> = facelets.chars().collect();
    if chars.len() != 54 {
        return Err(CubeError::Structure {
            expected: "54 facelet characters".to_string(),
            got: chars.len().to_string(),
        });
    }

    let mut grids = [StickerGrid::monochrome(Color::White); 6];
    for (face, chunk) in Face::all().zip(chars.chunks(9)) {
        let mut colors = [Color::White; 9];
        for (i, &c) in chunk.iter().enumerate() {
            let letter_face = Face::from_letter(c).ok_or(CubeError::UnknownFacelet(c))?;
            colors[i] = letter_face.color();
        }
        if colors[4] != face.color() {
            return Err(CubeError::CenterMismatch {
                declared: face.color(),
                found: colors[4],
            });
        }
        grids[face as usize] = StickerGrid::new(colors);
    }

    let state = CubeState::from_grids(grids);
    validate(&state)?;
    Ok(state)
}
