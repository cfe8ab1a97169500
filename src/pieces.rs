//! Piece catalog definitions and input parsing.
//!
//! A piece is a short run of integer labels laid out on consecutive grid
//! cells. The catalog order is the order pieces are placed in.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A cell label. `0` marks an empty cell.
pub type Label = u32;

/// Default board dimensions when the input omits `boardSize`.
pub const DEFAULT_BOARD_SIZE: [usize; 2] = [5, 5];

/// An ordered sequence of labels occupying consecutive cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Piece(pub Vec<Label>);

impl Piece {
    pub fn new(labels: impl Into<Vec<Label>>) -> Self {
        Self(labels.into())
    }

    /// Number of cells this piece spans.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn labels(&self) -> &[Label] {
        &self.0
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Errors raised while reading a puzzle description.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to load input configuration")]
    Malformed(#[from] serde_json::Error),
}

impl InputError {
    /// The parser's own description of what went wrong.
    pub fn source_message(&self) -> String {
        match self {
            InputError::Malformed(e) => e.to_string(),
        }
    }
}

/// Wire shape of the input document.
#[derive(Deserialize)]
struct PuzzleInput {
    pieces: Vec<Piece>,
    #[serde(rename = "boardSize", default = "default_board_size")]
    board_size: [usize; 2],
}

fn default_board_size() -> [usize; 2] {
    DEFAULT_BOARD_SIZE
}

/// A puzzle: the piece catalog plus the board it must be placed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    /// Pieces in placement order.
    pub pieces: Vec<Piece>,
    pub rows: usize,
    pub cols: usize,
}

impl Puzzle {
    pub fn new(pieces: Vec<Piece>, rows: usize, cols: usize) -> Self {
        Self { pieces, rows, cols }
    }

    /// Parses `{"pieces": [[..], ..], "boardSize": [rows, cols]}`.
    pub fn from_json(input: &str) -> Result<Self, InputError> {
        let PuzzleInput { pieces, board_size } = serde_json::from_str(input)?;
        Ok(Self::new(pieces, board_size[0], board_size[1]))
    }

    pub fn num_pieces(&self) -> usize {
        self.pieces.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size_defaults_to_five_by_five() {
        let puzzle = Puzzle::from_json(r#"{"pieces": [[1, 2, 3], [4, 5]]}"#).unwrap();
        assert_eq!((puzzle.rows, puzzle.cols), (5, 5));
        assert_eq!(puzzle.pieces, vec![Piece::new([1, 2, 3]), Piece::new([4, 5])]);
    }

    #[test]
    fn test_explicit_board_size() {
        let puzzle = Puzzle::from_json(r#"{"pieces": [], "boardSize": [3, 4]}"#).unwrap();
        assert_eq!((puzzle.rows, puzzle.cols), (3, 4));
        assert_eq!(puzzle.num_pieces(), 0);
    }

    #[test]
    fn test_missing_pieces_is_malformed() {
        let err = Puzzle::from_json(r#"{"boardSize": [5, 5]}"#).unwrap_err();
        assert!(err.to_string().contains("Failed to load"));
    }

    #[test]
    fn test_unparseable_json_is_malformed() {
        assert!(Puzzle::from_json("{not json").is_err());
        assert!(Puzzle::from_json(r#"{"pieces": [[-1, 2]]}"#).is_err());
    }
}
