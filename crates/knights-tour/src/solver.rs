//! Warnsdorff-guided backtracking search for a knight's tour.
//!
//! Each frame ranks its candidate squares by how many onward moves they
//! leave, tries the most constrained one first, and commits to the first
//! branch that completes the board. Frames own their path; children get an
//! extended copy, so returning from a failed branch needs no undo step.

use clap::ValueEnum;
use log::{debug, trace};
use smallvec::SmallVec;

use crate::board::{in_bounds, Coordinate, Path, SQUARE_COUNT};
use crate::error::TourError;
use crate::moves::{legal_moves, MoveSet};
use crate::report::format_path;

/// Start square used when the caller does not pick one
pub const DEFAULT_START: Coordinate = Coordinate::new(0, 1);

/// How the search cost counter is accumulated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CostModel {
    /// Each tried candidate adds its own onward-move count plus whatever the
    /// subtree reported, win or lose
    #[default]
    Reference,
    /// Each tried candidate adds one plus whatever the subtree reported
    Evaluated,
}

/// Configuration for the search
#[derive(Debug, Clone, Default)]
pub struct TourConfig {
    pub cost_model: CostModel,
}

/// Result of a top-level search
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Square the knight started on
    pub start: Coordinate,
    /// Search cost counter; zero means no tour was found
    pub cost: u64,
    /// The complete tour, or a partial path when the search was exhausted
    pub path: Path,
}

impl SearchResult {
    pub fn is_complete(&self) -> bool {
        self.path.covers_board()
    }
}

/// Find a tour from `start` with the default configuration
pub fn find_tour(start: Coordinate) -> Result<SearchResult, TourError> {
    find_tour_with(start, &TourConfig::default())
}

/// Find a tour from `start`.
///
/// An off-board start is rejected before any search happens. A search that
/// runs out of branches is not an error: it comes back with cost 0 and an
/// incomplete path.
pub fn find_tour_with(start: Coordinate, config: &TourConfig) -> Result<SearchResult, TourError> {
    if !in_bounds(start) {
        return Err(TourError::InvalidCoordinate {
            col: start.col,
            row: start.row,
        });
    }

    let path = Path::new(start);
    let candidates = legal_moves(&path, start);
    let (cost, path) = search(path, candidates, config);

    if path.covers_board() {
        debug!("tour from {} found with cost {}", start, cost);
    } else {
        debug!("search from {} exhausted without a tour", start);
    }

    Ok(SearchResult { start, cost, path })
}

/// Extend `path` through `candidates` until the board is covered.
///
/// Returns `(cost, path)`. A zero cost means every branch below this frame
/// dead-ended; the returned path is then just `path` and carries no tour.
pub fn search(path: Path, candidates: MoveSet, config: &TourConfig) -> (u64, Path) {
    if path.covers_board() {
        return (1, path);
    }

    trace!(
        "depth {} candidates {} missing {} path {}",
        path.len(),
        candidates.len(),
        SQUARE_COUNT - path.len(),
        format_path(&path)
    );

    if candidates.is_empty() {
        return (0, path);
    }

    // Warnsdorff: fewest onward moves first. The sort is stable, so ties keep
    // the knight offset order.
    let mut ranked: SmallVec<[(Coordinate, MoveSet); 8]> = candidates
        .iter()
        .map(|&d| (d, legal_moves(&path, d)))
        .collect();
    ranked.sort_by_key(|(_, onward)| onward.len());

    let mut accumulated: u64 = 0;
    for (square, onward) in ranked {
        let onward_count = onward.len() as u64;
        // `square` is not among its own destinations, so `onward` is already
        // the legal move set of the extended path.
        let (options, best) = search(path.extended(square), onward, config);

        accumulated += options;
        accumulated += match config.cost_model {
            CostModel::Reference => onward_count,
            CostModel::Evaluated => 1,
        };

        if options > 0 {
            return (accumulated, best);
        }
    }

    trace!("backtracking from depth {}", path.len());
    (0, path)
}
