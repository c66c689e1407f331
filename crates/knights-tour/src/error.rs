//! Error types for boundary validation.
//!
//! The search itself never fails: an exhausted search is reported through
//! [`crate::SearchResult`]. Only inputs coming from outside the library
//! (start squares, path text) produce a [`TourError`].

use thiserror::Error;

use crate::board::Coordinate;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TourError {
    /// A coordinate component lies outside `0..=7`.
    #[error("invalid coordinate {col},{row}: both components must be in 0..=7")]
    InvalidCoordinate { col: i32, row: i32 },

    /// A path visits the same square twice.
    #[error("square {0} appears more than once in the path")]
    DuplicateSquare(Coordinate),

    /// Path text that does not follow the `[c,r c,r ...]` layout.
    #[error("malformed path: {0}")]
    MalformedPath(String),
}
