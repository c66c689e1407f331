//! Independent checks on a finished tour.
//!
//! These helpers do not trust [`Path`]'s invariants: they take a raw square
//! sequence so that parsed or hand-written tours can be checked too.

use crate::board::{all_squares, in_bounds, Coordinate, Path, SQUARE_COUNT};

/// Outcome of checking a square sequence as a tour
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TourCheck {
    /// Every square visited once, each step a knight move
    Complete,
    /// A square lies off the board
    OffBoard { square: Coordinate },
    /// A square was visited twice
    Duplicate { square: Coordinate },
    /// Two consecutive squares are not a knight move apart
    IllegalStep { from: Coordinate, to: Coordinate },
    /// A valid but partial tour
    Incomplete { missing: Vec<Coordinate> },
}

impl TourCheck {
    pub fn is_complete(&self) -> bool {
        matches!(self, TourCheck::Complete)
    }
}

/// True iff a knight on `a` can reach `b` in one move
pub fn is_knight_move(a: Coordinate, b: Coordinate) -> bool {
    let dc = (a.col - b.col).abs();
    let dr = (a.row - b.row).abs();
    (dc == 1 && dr == 2) || (dc == 2 && dr == 1)
}

/// Squares the path has not visited, column by column
pub fn missing_squares(path: &Path) -> Vec<Coordinate> {
    all_squares().filter(|&c| !path.contains(c)).collect()
}

/// Check `squares` as a knight's tour, reporting the first defect found
pub fn verify_tour(squares: &[Coordinate]) -> TourCheck {
    let mut seen = [false; SQUARE_COUNT];
    let mut previous: Option<Coordinate> = None;

    for &square in squares {
        if !in_bounds(square) {
            return TourCheck::OffBoard { square };
        }
        if seen[square.index()] {
            return TourCheck::Duplicate { square };
        }
        if let Some(from) = previous {
            if !is_knight_move(from, square) {
                return TourCheck::IllegalStep { from, to: square };
            }
        }
        seen[square.index()] = true;
        previous = Some(square);
    }

    if squares.len() == SQUARE_COUNT {
        TourCheck::Complete
    } else {
        TourCheck::Incomplete {
            missing: all_squares().filter(|c| !seen[c.index()]).collect(),
        }
    }
}
