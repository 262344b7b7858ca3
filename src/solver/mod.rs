use crate::prelude::*;

/// Boundary to an external move-search algorithm (a Kociemba-style
/// two-phase solver, typically). The core's job ends at handing over a
/// valid facelet string and taking back a move sequence; search itself
/// lives on the other side of this trait.
///
/// Implementations that cannot actually search must say so through their
/// error, never return a canned sequence.
pub trait Solver {
    /// Input: exactly 54 characters over {U,R,F,D,L,B}, 9 of each.
    /// Output: a whitespace-separated move sequence in standard notation,
    /// or a descriptive error, propagated to the caller verbatim.
    fn solve(&self, facelets: &str) -> Result<String, CubeError>;
}

/// Defensive re-check of the solver's input contract. The codec already
/// guarantees this for encoded states; callers handing over strings from
/// anywhere else get the same guarantee enforced here.
pub fn check_facelets(facelets: &str) -> Result<(), CubeError> {
    let chars: Vec<char> = facelets.chars().collect();
    if chars.len() != 54 {
        return Err(CubeError::Structure {
            expected: "54 facelet characters".to_string(),
            got: chars.len().to_string(),
        });
    }

    if let Some(&c) = chars.iter().find(|&&c| Face::from_letter(c).is_none()) {
        return Err(CubeError::UnknownFacelet(c));
    }

    for face in Face::all() {
        let count = chars.iter().filter(|&&c| c == face.letter()).count();
        if count != 9 {
            return Err(CubeError::ColorCount {
                color: face.color(),
                count,
            });
        }
    }

    Ok(())
}

/// Validate, encode, hand off to `solver`, and parse its reply. Solver
/// failures come back as [`CubeError::Solver`] with the solver's own
/// message; there are no retries here.
pub fn solve_with<S: Solver>(solver: &S, state: &CubeState) -> Result<Vec<Move>, CubeError> {
    validate(state)?;
    let facelets = encode(state)?;
    check_facelets(&facelets)?;

    log::info!("handing {facelets} to the solver");
    let reply = solver.solve(&facelets)?;

    // An empty reply parses to no moves: the cube was already solved.
    Move::parse_sequence(&reply)
        .map_err(|e| CubeError::Solver(format!("unparseable move sequence {reply:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedReply(&'static str);

    impl Solver for FixedReply {
        fn solve(&self, facelets: &str) -> Result<String, CubeError> {
            check_facelets(facelets)?;
            Ok(self.0.to_string())
        }
    }

    struct AlwaysFails;

    impl Solver for AlwaysFails {
        fn solve(&self, _facelets: &str) -> Result<String, CubeError> {
            Err(CubeError::Solver("unsolvable configuration".to_string()))
        }
    }

    #[test]
    fn accepts_encoded_states() {
        assert_eq!(check_facelets(SOLVED_FACELETS), Ok(()));
        assert_eq!(
            check_facelets(&encode(&cube_with_moves("R U2 F'")).unwrap()),
            Ok(())
        );
    }

    #[test]
    fn rejects_short_input() {
        assert!(matches!(
            check_facelets("URFDLB"),
            Err(CubeError::Structure { .. })
        ));
    }

    #[test]
    fn rejects_unbalanced_letters() {
        let bad = SOLVED_FACELETS.replace("RRRRRRRRR", "RRRRRRRRU");
        assert_eq!(
            check_facelets(&bad),
            Err(CubeError::ColorCount {
                color: Color::White,
                count: 10
            })
        );
    }

    #[test]
    fn names_stray_letters() {
        let bad = format!("{}X", &SOLVED_FACELETS[..53]);
        assert_eq!(check_facelets(&bad), Err(CubeError::UnknownFacelet('X')));
    }

    #[test]
    fn parses_the_solver_reply() {
        let moves = solve_with(&FixedReply("R U R'"), &CubeState::solved()).unwrap();
        assert_eq!(moves.len(), 3);
        assert_eq!(moves[2], "R'".parse().unwrap());
    }

    #[test]
    fn empty_reply_means_already_solved() {
        let moves = solve_with(&FixedReply(""), &CubeState::solved()).unwrap();
        assert!(moves.is_empty());
    }

    #[test]
    fn garbled_reply_is_a_solver_error() {
        let result = solve_with(&FixedReply("R U banana"), &CubeState::solved());
        assert!(matches!(result, Err(CubeError::Solver(_))));
    }

    #[test]
    fn solver_failures_propagate_verbatim() {
        assert_eq!(
            solve_with(&AlwaysFails, &CubeState::solved()),
            Err(CubeError::Solver("unsolvable configuration".to_string()))
        );
    }

    #[test]
    fn invalid_states_never_reach_the_solver() {
        let mut cube = CubeState::solved();
        cube.set_sticker(Face::Down, 0, Color::White).unwrap();
        assert_eq!(
            solve_with(&FixedReply("R"), &cube),
            Err(CubeError::ColorCount {
                color: Color::White,
                count: 10
            })
        );
    }
}
