use crate::prelude::*;

/// The three raw sticker encodings accepted at the boundary, unified as one
/// sum type instead of per-caller string splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// Six space-separated `<CENTER>(<c0>,...,<c8>)` groups, each keyed by
    /// its declared center color.
    CenterGroups(String),
    /// Six comma-separated 9-character color strings in U, R, F, D, L, B
    /// face order.
    CommaFaces(String),
    /// One 54-character color string, chunked into six faces in U, R, F,
    /// D, L, B order.
    Flat(String),
}

impl RawInput {
    pub fn detect(s: &str) -> RawInput {
        let trimmed = s.trim();
        if trimmed.contains('(') {
            RawInput::CenterGroups(trimmed.to_string())
        } else if trimmed.contains(',') {
            RawInput::CommaFaces(trimmed.to_string())
        } else {
            RawInput::Flat(trimmed.to_string())
        }
    }

    /// Parse into a fully validated [`CubeState`].
    pub fn parse(&self) -> Result<CubeState, CubeError> {
        let state = match self {
            RawInput::CenterGroups(s) => parse_center_groups(s)?,
            RawInput::CommaFaces(s) => parse_comma_faces(s)?,
            RawInput::Flat(s) => parse_flat(s)?,
        };
        validate(&state)?;
        Ok(state)
    }
}

fn parse_center_groups(input: &str) -> Result<CubeState, CubeError> {
    let groups: Vec<&str> = input.split_whitespace().collect();
    if groups.len() != 6 {
        return Err(CubeError::Structure {
            expected: "6 face groups".to_string(),
            got: groups.len().to_string(),
        });
    }

    let mut grids: [Option<StickerGrid>; 6] = [None; 6];
    for group in groups {
        let (declared, grid) = parse_group(group)?;
        let slot = &mut grids[declared.home_face() as usize];
        if slot.is_some() {
            return Err(CubeError::DuplicateCenter(declared));
        }
        *slot = Some(grid);
    }

    // Six groups with six distinct declared centers fill every slot.
    let mut filled = [StickerGrid::monochrome(Color::White); 6];
    for (face, slot) in Face::all().zip(grids) {
        filled[face as usize] = slot.ok_or(CubeError::MissingCenter(face.color()))?;
    }
    Ok(CubeState::from_grids(filled))
}

fn parse_group(group: &str) -> Result<(Color, StickerGrid), CubeError> {
    let malformed = || CubeError::Structure {
        expected: "a face group of the form C(c,c,c,c,c,c,c,c,c)".to_string(),
        got: group.to_string(),
    };

    let mut chars = group.chars();
    let center_char = chars.next().ok_or_else(malformed)?;
    let declared = Color::from_letter(center_char).ok_or(CubeError::UnknownColor(center_char))?;

    let inner = chars
        .as_str()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(malformed)?;

    let stickers: Vec<&str> = inner.split(',').collect();
    if stickers.len() != 9 {
        return Err(CubeError::Structure {
            expected: "9 stickers".to_string(),
            got: stickers.len().to_string(),
        });
    }

    let mut colors = [Color::White; 9];
    for (i, sticker) in stickers.iter().enumerate() {
        let mut sticker_chars = sticker.chars();
        let c = match (sticker_chars.next(), sticker_chars.next()) {
            (Some(c), None) => c,
            _ => return Err(malformed()),
        };
        colors[i] = Color::from_letter(c).ok_or(CubeError::UnknownColor(c))?;
    }

    if colors[4] != declared {
        return Err(CubeError::CenterMismatch {
            declared,
            found: colors[4],
        });
    }

    Ok((declared, StickerGrid::new(colors)))
}

fn parse_comma_faces(input: &str) -> Result<CubeState, CubeError> {
    let faces: Vec<&str> = input.split(',').collect();
    if faces.len() != 6 {
        return Err(CubeError::Structure {
            expected: "6 comma-separated faces".to_string(),
            got: faces.len().to_string(),
        });
    }

    let mut grids = [StickerGrid::monochrome(Color::White); 6];
    for (i, face) in faces.iter().enumerate() {
        grids[i] = parse_face_chunk(face.trim())?;
    }
    Ok(CubeState::from_grids(grids))
}

fn parse_flat(input: &str) -> Result<CubeState, CubeError> {
    let chars: Vec<char> = input.chars().collect();
    if chars.len() != 54 {
        return Err(CubeError::Structure {
            expected: "54 sticker characters".to_string(),
            got: chars.len().to_string(),
        });
    }

    let mut grids = [StickerGrid::monochrome(Color::White); 6];
    for (i, chunk) in chars.chunks(9).enumerate() {
        let face: String = chunk.iter().collect();
        grids[i] = parse_face_chunk(&face)?;
    }
    Ok(CubeState::from_grids(grids))
}

fn parse_face_chunk(chunk: &str) -> Result<StickerGrid, CubeError> {
    let chars: Vec<char> = chunk.chars().collect();
    if chars.len() != 9 {
        return Err(CubeError::Structure {
            expected: "9 stickers per face".to_string(),
            got: chars.len().to_string(),
        });
    }

    let mut colors = [Color::White; 9];
    for (i, &c) in chars.iter().enumerate() {
        colors[i] = Color::from_letter(c).ok_or(CubeError::UnknownColor(c))?;
    }
    Ok(StickerGrid::new(colors))
}
