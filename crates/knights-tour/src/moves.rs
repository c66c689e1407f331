//! Knight move generation.
//!
//! A move is legal iff it lands on the board and on a square the path has
//! not visited yet. That is the only validity rule in the crate.

use smallvec::SmallVec;

use crate::board::{in_bounds, Coordinate, Path};

/// Squares reachable in one knight move, in offset order
pub type MoveSet = SmallVec<[Coordinate; 8]>;

/// Knight offsets as `(dcol, drow)`.
///
/// The order is fixed: the solver's tie-break between equally constrained
/// squares falls back to it.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

/// All on-board squares a knight on `c` could move to
pub fn destinations(c: Coordinate) -> MoveSet {
    KNIGHT_OFFSETS
        .iter()
        .map(|&delta| c.offset(delta))
        .filter(|&d| in_bounds(d))
        .collect()
}

/// Destinations from `c` that `path` has not visited
pub fn legal_moves(path: &Path, c: Coordinate) -> MoveSet {
    let mut moves = destinations(c);
    moves.retain(|d| !path.contains(*d));
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::all_squares;

    #[test]
    fn test_corner_destinations() {
        let dests = destinations(Coordinate::new(0, 0));
        assert_eq!(dests.as_slice(), &[Coordinate::new(1, 2), Coordinate::new(2, 1)]);
    }

    #[test]
    fn test_center_has_eight_destinations() {
        assert_eq!(destinations(Coordinate::new(3, 3)).len(), 8);
        assert_eq!(destinations(Coordinate::new(4, 4)).len(), 8);
    }

    #[test]
    fn test_destination_counts_sum() {
        // 168 knight edges on 8x8, each counted from both ends
        let total: usize = all_squares().map(|c| destinations(c).len()).sum();
        assert_eq!(total, 336);
    }

    #[test]
    fn test_legal_moves_excludes_visited() {
        let path = Path::from_squares(&[Coordinate::new(1, 2)]).unwrap();
        let moves = legal_moves(&path, Coordinate::new(0, 0));
        assert_eq!(moves.as_slice(), &[Coordinate::new(2, 1)]);
    }

    #[test]
    fn test_legal_moves_on_empty_path() {
        let c = Coordinate::new(5, 6);
        assert_eq!(legal_moves(&Path::default(), c), destinations(c));
    }
}
