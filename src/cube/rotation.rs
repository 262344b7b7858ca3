use crate::prelude::*;

/// Three sticker indices on a neighboring face that border the turned face.
type Strip = (Face, [usize; 3]);

/// The four neighbor strips touching each face, in clockwise cycle order:
/// turning the face clockwise moves strip `k`'s stickers into strip `k+1`'s
/// slots, index by index. Strips whose indices run "backwards" encode the
/// axis flip between faces whose reading orders disagree.
fn edge_cycle(face: Face) -> [Strip; 4] {
    use Face::*;

    match face {
        Front => [
            (Up, [6, 7, 8]),
            (Right, [0, 3, 6]),
            (Down, [2, 1, 0]),
            (Left, [8, 5, 2]),
        ],
        Back => [
            (Up, [2, 1, 0]),
            (Left, [0, 3, 6]),
            (Down, [6, 7, 8]),
            (Right, [8, 5, 2]),
        ],
        Up => [
            (Front, [0, 1, 2]),
            (Left, [0, 1, 2]),
            (Back, [0, 1, 2]),
            (Right, [0, 1, 2]),
        ],
        Down => [
            (Front, [6, 7, 8]),
            (Right, [6, 7, 8]),
            (Back, [6, 7, 8]),
            (Left, [6, 7, 8]),
        ],
        Left => [
            (Up, [0, 3, 6]),
            (Front, [0, 3, 6]),
            (Down, [0, 3, 6]),
            (Back, [8, 5, 2]),
        ],
        Right => [
            (Front, [2, 5, 8]),
            (Up, [2, 5, 8]),
            (Back, [6, 3, 0]),
            (Down, [2, 5, 8]),
        ],
    }
}

/// Turn one face of `state` and return the resulting state.
///
/// Total for every face and direction, and pure: the input is never
/// mutated, and the new state is built entirely from the old one's values
/// (the four neighbor strips overlap in their reads, so read-after-write on
/// a single structure would corrupt the hand-off).
pub fn rotate(state: &CubeState, face: Face, direction: Direction) -> CubeState {
    match direction {
        Direction::Single => quarter_turn(state, face, true),
        Direction::Reverse => quarter_turn(state, face, false),
        Direction::Double => {
            let once = quarter_turn(state, face, true);
            quarter_turn(&once, face, true)
        }
    }
}

fn quarter_turn(state: &CubeState, face: Face, clockwise: bool) -> CubeState {
    let mut next = state.clone();

    *next.grid_mut(face) = if clockwise {
        state.grid(face).rotated_cw()
    } else {
        state.grid(face).rotated_ccw()
    };

    let cycle = edge_cycle(face);
    for k in 0..4 {
        let (source, target) = if clockwise {
            (cycle[k], cycle[(k + 1) % 4])
        } else {
            (cycle[(k + 1) % 4], cycle[k])
        };

        for j in 0..3 {
            let color = state.grid(source.0).get(source.1[j]);
            next.grid_mut(target.0).set(target.1[j], color);
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn front_clockwise_hands_left_column_to_up() {
        // The Up face's bottom row receives what was the Left face's right
        // column: orange on a solved cube.
        let cube = CubeState::solved().apply("F".parse().unwrap());

        for index in [6, 7, 8] {
            assert_eq!(cube.sticker(Face::Up, index), Ok(Color::Orange));
        }
        // The rest of Up is untouched.
        for index in [0, 1, 2, 3, 4, 5] {
            assert_eq!(cube.sticker(Face::Up, index), Ok(Color::White));
        }
    }

    #[test]
    fn front_clockwise_full_layout() {
        let cube = CubeState::solved().apply("F".parse().unwrap());

        let letters = |face: Face| -> String {
            cube.grid(face).stickers().iter().map(|c| c.letter()).collect()
        };

        assert_eq!(letters(Face::Up), "WWWWWWOOO");
        assert_eq!(letters(Face::Right), "WRRWRRWRR");
        assert_eq!(letters(Face::Front), "GGGGGGGGG");
        assert_eq!(letters(Face::Down), "RRRYYYYYY");
        assert_eq!(letters(Face::Left), "OOYOOYOOY");
        assert_eq!(letters(Face::Back), "BBBBBBBBB");
    }

    #[test]
    fn clockwise_then_counter_clockwise_is_identity() {
        for face in Face::all() {
            let turned = rotate(&CubeState::solved(), face, Direction::Single);
            let back = rotate(&turned, face, Direction::Reverse);
            assert_eq!(back, CubeState::solved(), "face {face}");
        }
    }

    #[test]
    fn four_quarter_turns_are_identity() {
        for face in Face::all() {
            let mut cube = CubeState::solved();
            for _ in 0..4 {
                cube = rotate(&cube, face, Direction::Single);
            }
            assert_eq!(cube, CubeState::solved(), "face {face}");
        }
    }

    #[test]
    fn double_turn_is_two_singles() {
        let scrambled = cube_with_moves("R U F' D2 L B");
        for face in Face::all() {
            let twice = rotate(
                &rotate(&scrambled, face, Direction::Single),
                face,
                Direction::Single,
            );
            assert_eq!(rotate(&scrambled, face, Direction::Double), twice);
        }
    }

    #[test]
    fn rotation_does_not_mutate_the_input() {
        let cube = CubeState::solved();
        let _ = rotate(&cube, Face::Right, Direction::Single);
        assert_eq!(cube, CubeState::solved());
    }

    #[test]
    fn sexy_move_has_order_six() {
        let mut cube = CubeState::solved();
        for _ in 0..6 {
            cube = cube.apply_all(Move::parse_sequence("R U R' U'").unwrap());
        }
        assert_eq!(cube, CubeState::solved());
    }

    #[quickcheck]
    fn color_counts_are_invariant(moves: Vec<Move>) -> bool {
        let cube = CubeState::solved().apply_all(moves);
        Color::all().all(|color| cube.count_of(color) == 9)
    }

    #[quickcheck]
    fn centers_are_fixed_points(moves: Vec<Move>) -> bool {
        let cube = CubeState::solved().apply_all(moves);
        Face::all().all(|face| cube.grid(face).center() == face.color())
    }

    #[quickcheck]
    fn reversed_sequence_undoes_scramble(moves: Vec<Move>) -> bool {
        let scrambled = CubeState::solved().apply_all(moves.clone());
        let undone = scrambled.apply_all(moves.into_iter().rev().map(Move::reverse));
        undone == CubeState::solved()
    }
}
