//! Board coordinates and the visited-square path.
//!
//! The board is a fixed 8x8 grid. Coordinates are `(col, row)` pairs; a
//! coordinate may temporarily hold off-board values while move offsets are
//! applied, which is why bounds checking is a separate step.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TourError;

/// Width and height of the board
pub const BOARD_SIZE: i32 = 8;

/// Number of squares a complete tour visits
pub const SQUARE_COUNT: usize = (BOARD_SIZE * BOARD_SIZE) as usize;

/// A square on the board, addressed by column and row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub col: i32,
    pub row: i32,
}

impl Coordinate {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Build a coordinate, rejecting anything off the board
    pub fn on_board(col: i32, row: i32) -> Result<Self, TourError> {
        let coord = Self::new(col, row);
        if in_bounds(coord) {
            Ok(coord)
        } else {
            Err(TourError::InvalidCoordinate { col, row })
        }
    }

    /// Square index in `0..64` (row-major). Only meaningful for on-board coordinates.
    pub fn index(self) -> usize {
        (self.row * BOARD_SIZE + self.col) as usize
    }

    pub fn from_index(index: usize) -> Self {
        let index = index as i32;
        Self::new(index % BOARD_SIZE, index / BOARD_SIZE)
    }

    /// Apply a `(dcol, drow)` offset without checking bounds
    pub fn offset(self, (dcol, drow): (i32, i32)) -> Self {
        Self::new(self.col + dcol, self.row + drow)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.col, self.row)
    }
}

/// True iff both components lie within the board
pub fn in_bounds(c: Coordinate) -> bool {
    (0..BOARD_SIZE).contains(&c.col) && (0..BOARD_SIZE).contains(&c.row)
}

/// Every square of the board, column by column
pub fn all_squares() -> impl Iterator<Item = Coordinate> {
    (0..BOARD_SIZE).flat_map(|col| (0..BOARD_SIZE).map(move |row| Coordinate::new(col, row)))
}

/// Ordered history of visited squares; the last entry is the knight's position.
///
/// A path never contains the same square twice. It only grows through
/// [`Path::extended`], which returns a new path and leaves `self` untouched,
/// so a search frame can hand copies to its children without undo logic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    squares: Vec<Coordinate>,
    /// Bit `i` is set iff the square with index `i` is in `squares`
    visited: u64,
}

impl Path {
    /// A path holding just the starting square, which must be on the board
    pub fn new(start: Coordinate) -> Self {
        debug_assert!(in_bounds(start));
        let mut squares = Vec::with_capacity(SQUARE_COUNT);
        squares.push(start);
        Self {
            squares,
            visited: 1u64 << start.index(),
        }
    }

    /// Build a path from an explicit sequence, validating every square
    pub fn from_squares(squares: &[Coordinate]) -> Result<Self, TourError> {
        let mut path = Self {
            squares: Vec::with_capacity(squares.len().max(1)),
            visited: 0,
        };
        for &square in squares {
            if !in_bounds(square) {
                return Err(TourError::InvalidCoordinate {
                    col: square.col,
                    row: square.row,
                });
            }
            if path.contains(square) {
                return Err(TourError::DuplicateSquare(square));
            }
            path.push_unchecked(square);
        }
        Ok(path)
    }

    /// Copy of this path with `square` appended.
    ///
    /// `square` must be on the board and not yet visited.
    pub fn extended(&self, square: Coordinate) -> Self {
        debug_assert!(in_bounds(square) && !self.contains(square));
        let mut squares = Vec::with_capacity(SQUARE_COUNT);
        squares.extend_from_slice(&self.squares);
        let mut next = Self {
            squares,
            visited: self.visited,
        };
        next.push_unchecked(square);
        next
    }

    fn push_unchecked(&mut self, square: Coordinate) {
        self.visited |= 1u64 << square.index();
        self.squares.push(square);
    }

    pub fn contains(&self, square: Coordinate) -> bool {
        in_bounds(square) && self.visited & (1u64 << square.index()) != 0
    }

    /// The knight's current square
    pub fn current(&self) -> Option<Coordinate> {
        self.squares.last().copied()
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Whether every square on the board has been visited
    pub fn covers_board(&self) -> bool {
        self.squares.len() == SQUARE_COUNT
    }

    pub fn squares(&self) -> &[Coordinate] {
        &self.squares
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds() {
        assert!(in_bounds(Coordinate::new(0, 0)));
        assert!(in_bounds(Coordinate::new(7, 7)));
        assert!(!in_bounds(Coordinate::new(-1, 3)));
        assert!(!in_bounds(Coordinate::new(3, 8)));
        assert!(!in_bounds(Coordinate::new(8, 8)));
    }

    #[test]
    fn test_on_board_rejects_off_board() {
        assert_eq!(Coordinate::on_board(2, 5), Ok(Coordinate::new(2, 5)));
        assert_eq!(
            Coordinate::on_board(8, 8),
            Err(TourError::InvalidCoordinate { col: 8, row: 8 })
        );
    }

    #[test]
    fn test_index_round_trip() {
        for square in all_squares() {
            assert_eq!(Coordinate::from_index(square.index()), square);
        }
        assert_eq!(all_squares().count(), SQUARE_COUNT);
    }

    #[test]
    fn test_extended_leaves_parent_untouched() {
        let parent = Path::new(Coordinate::new(0, 1));
        let child = parent.extended(Coordinate::new(2, 2));

        assert_eq!(parent.len(), 1);
        assert!(!parent.contains(Coordinate::new(2, 2)));
        assert_eq!(child.len(), 2);
        assert_eq!(child.current(), Some(Coordinate::new(2, 2)));
        assert!(child.contains(Coordinate::new(0, 1)));
    }

    #[test]
    fn test_from_squares_rejects_duplicates() {
        let a = Coordinate::new(0, 0);
        let b = Coordinate::new(1, 2);
        assert_eq!(
            Path::from_squares(&[a, b, a]),
            Err(TourError::DuplicateSquare(a))
        );
        assert!(Path::from_squares(&[]).unwrap().is_empty());
    }
}
