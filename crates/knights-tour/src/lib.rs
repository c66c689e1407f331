//! Knight's tour search on an 8x8 board.
//!
//! The search is plain recursive backtracking ordered by Warnsdorff's rule:
//! from each square the knight tries the candidates with the fewest onward
//! moves first and keeps the first branch that covers the board.

pub mod board;
pub mod error;
pub mod logging;
pub mod moves;
pub mod report;
pub mod selftest;
pub mod solver;
pub mod verify;

// Re-export main types
pub use board::{in_bounds, Coordinate, Path, BOARD_SIZE, SQUARE_COUNT};
pub use error::TourError;
pub use moves::{destinations, legal_moves, MoveSet, KNIGHT_OFFSETS};
pub use report::{format_path, format_report, parse_path, summary_line, TourReport};
pub use solver::{
    find_tour, find_tour_with, search, CostModel, SearchResult, TourConfig,
    DEFAULT_START,
};
pub use verify::{is_knight_move, missing_squares, verify_tour, TourCheck};
