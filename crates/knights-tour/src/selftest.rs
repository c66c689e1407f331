//! Built-in checks run by the `--test` flag.
//!
//! These cover the documented behaviour of the installed binary without a
//! Rust toolchain: corner move generation, visited-square filtering, the
//! default tour and start validation.

use log::debug;

use crate::board::{Coordinate, Path};
use crate::error::TourError;
use crate::moves::{destinations, legal_moves};
use crate::report::{format_path, parse_path};
use crate::solver::{find_tour, DEFAULT_START};
use crate::verify::{missing_squares, verify_tour};

/// Result of one built-in check
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub passed: bool,
}

const CHECKS: [(&str, fn() -> bool); 5] = [
    ("corner_destinations", corner_destinations),
    ("visited_squares_excluded", visited_squares_excluded),
    ("default_start_tour", default_start_tour),
    ("path_text_round_trip", path_text_round_trip),
    ("off_board_start_rejected", off_board_start_rejected),
];

/// Run every check, in a fixed order
pub fn run_self_tests() -> Vec<CheckOutcome> {
    CHECKS
        .iter()
        .map(|&(name, check)| {
            let passed = check();
            debug!("self-test {} passed={}", name, passed);
            CheckOutcome { name, passed }
        })
        .collect()
}

fn corner_destinations() -> bool {
    destinations(Coordinate::new(0, 0)).as_slice() == [Coordinate::new(1, 2), Coordinate::new(2, 1)]
}

fn visited_squares_excluded() -> bool {
    let path = Path::new(Coordinate::new(1, 2));
    legal_moves(&path, Coordinate::new(0, 0)).as_slice() == [Coordinate::new(2, 1)]
}

fn default_start_tour() -> bool {
    match find_tour(DEFAULT_START) {
        Ok(result) => {
            result.cost > 0
                && missing_squares(&result.path).is_empty()
                && verify_tour(result.path.squares()).is_complete()
        }
        Err(_) => false,
    }
}

fn path_text_round_trip() -> bool {
    let path = Path::new(Coordinate::new(0, 1))
        .extended(Coordinate::new(2, 2))
        .extended(Coordinate::new(4, 3));
    parse_path(&format_path(&path)).as_ref() == Ok(&path)
}

fn off_board_start_rejected() -> bool {
    matches!(
        find_tour(Coordinate::new(8, 8)),
        Err(TourError::InvalidCoordinate { col: 8, row: 8 })
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_checks_pass() {
        let outcomes = run_self_tests();
        assert_eq!(outcomes.len(), CHECKS.len());
        for outcome in outcomes {
            assert!(outcome.passed, "self-test {} failed", outcome.name);
        }
    }
}
