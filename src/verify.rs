//! Replays a solution path onto a fresh grid and checks it holds up.

use thiserror::Error;

use crate::grid::{Grid, Line};
use crate::pieces::{Label, Piece, Puzzle};
use crate::placements::{place, PlacementError};
use crate::solver::SolutionPath;

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("path places {placed} pieces, catalog has {expected}")]
    WrongLength { placed: usize, expected: usize },
    #[error("step {step} places {found}, catalog expects {expected}")]
    OutOfOrder {
        step: usize,
        found: Piece,
        expected: Piece,
    },
    #[error(transparent)]
    Placement(#[from] PlacementError),
    #[error("label {label} appears twice in {line}")]
    RepeatedLabel { line: Line, label: Label },
}

/// Rebuilds the grid described by `path` and checks it against `puzzle`.
///
/// Every catalog piece must appear once in catalog order, each placement
/// must land on empty in-bounds cells, and no label may repeat in a line.
pub fn replay(puzzle: &Puzzle, path: &SolutionPath) -> Result<Grid, VerifyError> {
    if path.len() != puzzle.num_pieces() {
        return Err(VerifyError::WrongLength {
            placed: path.len(),
            expected: puzzle.num_pieces(),
        });
    }

    let mut grid = Grid::empty(puzzle.rows, puzzle.cols);
    for (step, (placed, expected)) in path.iter().zip(&puzzle.pieces).enumerate() {
        if placed.piece != *expected {
            return Err(VerifyError::OutOfOrder {
                step,
                found: placed.piece.clone(),
                expected: expected.clone(),
            });
        }
        grid = place(&grid, placed.placement, &placed.piece)?;
    }

    if let Some((line, label)) = grid.duplicate_in_lines() {
        return Err(VerifyError::RepeatedLabel { line, label });
    }
    Ok(grid)
}
