//! Text and JSON rendering of search results.
//!
//! Paths print as `[c,r c,r ...]`, one token per visited square in visit
//! order. [`parse_path`] reads the same layout back.

use serde::{Deserialize, Serialize};

use crate::board::{Coordinate, Path};
use crate::error::TourError;
use crate::solver::SearchResult;

/// Render a path as a bracketed, space-separated list of `col,row` tokens
pub fn format_path(path: &Path) -> String {
    let tokens: Vec<String> = path.squares().iter().map(ToString::to_string).collect();
    format!("[{}]", tokens.join(" "))
}

/// Parse text produced by [`format_path`]
pub fn parse_path(text: &str) -> Result<Path, TourError> {
    let inner = text
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| TourError::MalformedPath("path must be enclosed in brackets".to_string()))?;

    let squares = inner
        .split_whitespace()
        .map(parse_token)
        .collect::<Result<Vec<_>, _>>()?;

    Path::from_squares(&squares)
}

fn parse_token(token: &str) -> Result<Coordinate, TourError> {
    let malformed = || TourError::MalformedPath(format!("bad square token {:?}", token));

    let (col, row) = token.split_once(',').ok_or_else(malformed)?;
    let col: i32 = col.parse().map_err(|_| malformed())?;
    let row: i32 = row.parse().map_err(|_| malformed())?;
    Coordinate::on_board(col, row)
}

/// First line of the text report
pub fn summary_line(result: &SearchResult) -> String {
    if result.is_complete() {
        format!(
            "Found tour starting from {} considering {} moves:",
            result.start, result.cost
        )
    } else {
        format!("No tour found starting from {}", result.start)
    }
}

/// Full text report: the summary line, then the tour when one was found
pub fn format_report(result: &SearchResult) -> String {
    if result.is_complete() {
        format!("{}\n{}", summary_line(result), format_path(&result.path))
    } else {
        summary_line(result)
    }
}

/// JSON form of a search result
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourReport {
    pub start: Coordinate,
    pub found: bool,
    pub cost: u64,
    pub path_length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Coordinate>>,
}

impl From<&SearchResult> for TourReport {
    fn from(result: &SearchResult) -> Self {
        let found = result.is_complete();
        Self {
            start: result.start,
            found,
            cost: result.cost,
            path_length: result.path.len(),
            path: found.then(|| result.path.squares().to_vec()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::find_tour;

    #[test]
    fn test_format_path() {
        let path = Path::from_squares(&[Coordinate::new(0, 1), Coordinate::new(2, 2)]).unwrap();
        assert_eq!(format_path(&path), "[0,1 2,2]");
        assert_eq!(format_path(&Path::default()), "[]");
    }

    #[test]
    fn test_parse_path() {
        let path = parse_path("  [0,1 2,2 4,3]\n").unwrap();
        assert_eq!(
            path.squares(),
            &[Coordinate::new(0, 1), Coordinate::new(2, 2), Coordinate::new(4, 3)]
        );
        assert!(parse_path("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_path_errors() {
        assert!(matches!(parse_path("0,1 2,2"), Err(TourError::MalformedPath(_))));
        assert!(matches!(parse_path("[0;1]"), Err(TourError::MalformedPath(_))));
        assert!(matches!(parse_path("[a,1]"), Err(TourError::MalformedPath(_))));
        assert_eq!(
            parse_path("[0,1 9,1]"),
            Err(TourError::InvalidCoordinate { col: 9, row: 1 })
        );
        assert_eq!(
            parse_path("[0,1 0,1]"),
            Err(TourError::DuplicateSquare(Coordinate::new(0, 1)))
        );
    }

    #[test]
    fn test_report_for_found_tour() {
        let result = find_tour(Coordinate::new(0, 1)).unwrap();
        let text = format_report(&result);
        let mut lines = text.lines();

        let summary = lines.next().unwrap();
        assert!(summary.starts_with("Found tour starting from 0,1 considering "));
        assert!(summary.ends_with(" moves:"));
        assert_eq!(parse_path(lines.next().unwrap()).unwrap(), result.path);
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_report_for_exhausted_search() {
        let result = SearchResult {
            start: Coordinate::new(3, 4),
            cost: 0,
            path: Path::new(Coordinate::new(3, 4)),
        };
        assert_eq!(format_report(&result), "No tour found starting from 3,4");

        let report = TourReport::from(&result);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["found"], false);
        assert_eq!(json["pathLength"], 1);
        assert!(json.get("path").is_none());
    }

    #[test]
    fn test_json_report_layout() {
        let result = find_tour(Coordinate::new(0, 1)).unwrap();
        let json = serde_json::to_value(TourReport::from(&result)).unwrap();

        assert_eq!(json["start"]["col"], 0);
        assert_eq!(json["start"]["row"], 1);
        assert_eq!(json["found"], true);
        assert_eq!(json["pathLength"], 64);
        assert_eq!(json["path"].as_array().unwrap().len(), 64);
    }
}
