//! JSON output records.
//!
//! Success is a list with one record per catalog piece, in catalog order:
//! `{"piece": [..], "position": [row, col], "orientation": "h"|"hr"|"v"|"vr"}`.
//! Failures are a single `{"error": "..."}` object, optionally with
//! `"details"`.

use std::io::Write;

use serde::Serialize;

use crate::geometry::{Cell, Orientation};
use crate::pieces::Piece;
use crate::solver::SolutionPath;

pub const NO_SOLUTION: &str = "No valid solution found";
pub const INTERNAL_ERROR: &str = "Internal placement error";

/// One placed piece as consumed by the output validator.
#[derive(Debug, Serialize)]
pub struct PlacementRecord<'a> {
    pub piece: &'a Piece,
    pub position: Cell,
    pub orientation: Orientation,
}

#[derive(Debug, Serialize)]
pub struct ErrorRecord {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorRecord {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }

    pub fn no_solution() -> Self {
        Self::new(NO_SOLUTION)
    }
}

/// Converts a solution path into output records.
pub fn solution_records(path: &SolutionPath) -> Vec<PlacementRecord<'_>> {
    path.iter()
        .map(|placed| PlacementRecord {
            piece: &placed.piece,
            position: placed.placement.anchor,
            orientation: placed.placement.orientation,
        })
        .collect()
}

/// Writes `value` as a single line of JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(mut out: W, value: &T) -> std::io::Result<()> {
    serde_json::to_writer(&mut out, value)?;
    writeln!(out)
}

/// Writes the first solution, or the no-solution error if there is none.
pub fn write_first_solution<W: Write>(out: W, first: Option<&SolutionPath>) -> std::io::Result<()> {
    match first {
        Some(path) => write_json(out, &solution_records(path)),
        None => write_json(out, &ErrorRecord::no_solution()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Placement;
    use crate::solver::PlacedPiece;

    fn render(first: Option<&SolutionPath>) -> String {
        let mut buffer = Vec::new();
        write_first_solution(&mut buffer, first).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_solution_records_json() {
        let path = vec![
            PlacedPiece {
                piece: Piece::new([1, 2, 3]),
                placement: Placement::new((0, 0), Orientation::H),
            },
            PlacedPiece {
                piece: Piece::new([4, 5]),
                placement: Placement::new((1, 3), Orientation::Vr),
            },
        ];
        insta::assert_snapshot!(
            render(Some(&path)).trim_end(),
            @r#"[{"piece":[1,2,3],"position":[0,0],"orientation":"h"},{"piece":[4,5],"position":[1,3],"orientation":"vr"}]"#
        );
    }

    #[test]
    fn test_empty_path_is_empty_list() {
        assert_eq!(render(Some(&Vec::new())), "[]\n");
    }

    #[test]
    fn test_no_solution_record() {
        insta::assert_snapshot!(render(None).trim_end(), @r#"{"error":"No valid solution found"}"#);
    }

    #[test]
    fn test_error_record_with_details() {
        let record = ErrorRecord::with_details("Failed to load input configuration", "EOF");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["error"], "Failed to load input configuration");
        assert_eq!(json["details"], "EOF");
    }
}
