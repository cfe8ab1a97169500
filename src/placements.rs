//! Candidate enumeration and piece placement.
//!
//! A candidate is legal when its segment is empty and none of its labels
//! already appear on any line it touches: the whole line along the piece,
//! and the crossing line at every cell it fills.

use thiserror::Error;

use crate::geometry::{Cell, Orientation, Placement};
use crate::grid::Grid;
use crate::pieces::Piece;

/// Raised when a placement would break the grid's write-once invariant.
///
/// Enumerated candidates never trigger this; seeing it means the
/// enumerator and the placer disagree.
#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("piece {piece} at {placement} leaves the grid at cell {cell:?}\n{grid}")]
    OutOfBounds {
        piece: Piece,
        placement: Placement,
        cell: Cell,
        grid: Grid,
    },
    #[error("piece {piece} at {placement} overwrites occupied cell {cell:?}\n{grid}")]
    Occupied {
        piece: Piece,
        placement: Placement,
        cell: Cell,
        grid: Grid,
    },
}

/// Checks bounds and emptiness of the segment and that no piece label is
/// already on the line the segment lies along.
fn segment_open(grid: &Grid, piece: &Piece, anchor: Cell, orientation: Orientation) -> bool {
    let placement = Placement::new(anchor, orientation);
    if !grid.segment_empty(placement.cells(piece.len())) {
        return false;
    }

    let (row, col) = anchor;
    !piece.labels().iter().any(|&label| {
        if orientation.is_horizontal() {
            grid.row_contains(row, label)
        } else {
            grid.col_contains(col, label)
        }
    })
}

/// Checks every filled cell's crossing line for the label written there.
fn crossing_lines_clear(grid: &Grid, piece: &Piece, placement: Placement) -> bool {
    placement.assignments(piece).all(|((row, col), label)| {
        if placement.orientation.is_horizontal() {
            !grid.col_contains(col, label)
        } else {
            !grid.row_contains(row, label)
        }
    })
}

/// Lists every legal placement of `piece` on `grid`.
///
/// Anchors are scanned row-major and each anchor yields its candidates in
/// `h, hr, v, vr` order. On an entirely empty grid the opening move is
/// restricted to orientation `h` with anchors in rows `0..rows-1` and
/// columns `0..cols-1`; every placement on an empty board is a mirror of
/// one of these, so nothing is lost up to symmetry.
pub fn legal_placements(grid: &Grid, piece: &Piece) -> Vec<Placement> {
    let opening_move = grid.is_empty();
    let (row_limit, col_limit, orientations): (usize, usize, &[Orientation]) = if opening_move {
        (
            grid.rows().saturating_sub(1),
            grid.cols().saturating_sub(1),
            &[Orientation::H],
        )
    } else {
        (grid.rows(), grid.cols(), &Orientation::ALL)
    };

    let mut placements = Vec::new();
    for row in 0..row_limit {
        for col in 0..col_limit {
            let anchor = (row, col);
            let horizontal_open = segment_open(grid, piece, anchor, Orientation::H);
            let vertical_open = segment_open(grid, piece, anchor, Orientation::V);

            for &orientation in orientations {
                let open = if orientation.is_horizontal() {
                    horizontal_open
                } else {
                    vertical_open
                };
                let placement = Placement::new(anchor, orientation);
                if open && crossing_lines_clear(grid, piece, placement) {
                    placements.push(placement);
                }
            }
        }
    }

    placements
}

/// Returns a copy of `grid` with `piece` written at `placement`.
///
/// The input grid is left untouched.
pub fn place(grid: &Grid, placement: Placement, piece: &Piece) -> Result<Grid, PlacementError> {
    let mut placed = grid.clone();
    for (cell, label) in placement.assignments(piece) {
        match grid.get(cell) {
            None => {
                return Err(PlacementError::OutOfBounds {
                    piece: piece.clone(),
                    placement,
                    cell,
                    grid: grid.clone(),
                })
            }
            Some(0) => placed.set(cell, label),
            Some(_) => {
                return Err(PlacementError::Occupied {
                    piece: piece.clone(),
                    placement,
                    cell,
                    grid: grid.clone(),
                })
            }
        }
    }
    Ok(placed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(labels: &[u32]) -> Piece {
        Piece::new(labels)
    }

    #[test]
    fn test_opening_move_is_horizontal_in_reduced_range() {
        let grid = Grid::empty(5, 5);
        let candidates = legal_placements(&grid, &piece(&[1, 2, 3]));

        assert_eq!(candidates.len(), 12);
        assert!(candidates.contains(&Placement::new((0, 0), Orientation::H)));
        assert!(!candidates.contains(&Placement::new((0, 0), Orientation::V)));
        assert!(!candidates.contains(&Placement::new((4, 1), Orientation::H)));
        for candidate in &candidates {
            let (row, col) = candidate.anchor;
            assert_eq!(candidate.orientation, Orientation::H);
            assert!(row <= 3 && col <= 3 && col + 3 <= 5);
        }
    }

    #[test]
    fn test_opening_move_applies_to_short_pieces() {
        let grid = Grid::empty(3, 3);
        let candidates = legal_placements(&grid, &piece(&[4, 5]));
        let expected: Vec<_> = [(0, 0), (0, 1), (1, 0), (1, 1)]
            .into_iter()
            .map(|anchor| Placement::new(anchor, Orientation::H))
            .collect();
        assert_eq!(candidates, expected);
    }

    #[test]
    fn test_candidates_follow_scan_then_orientation_order() {
        let grid = Grid::from_rows(&[[9, 0], [0, 0]]);
        let candidates = legal_placements(&grid, &piece(&[1, 2]));
        assert_eq!(
            candidates,
            vec![
                Placement::new((0, 1), Orientation::V),
                Placement::new((0, 1), Orientation::Vr),
                Placement::new((1, 0), Orientation::H),
                Placement::new((1, 0), Orientation::Hr),
            ]
        );
    }

    #[test]
    fn test_enumeration_is_repeatable() {
        let grid = Grid::from_rows(&[
            [1, 2, 3, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 4, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ]);
        let first = legal_placements(&grid, &piece(&[3, 4, 5]));
        let second = legal_placements(&grid, &piece(&[3, 4, 5]));
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_shared_label_prunes_its_row_and_column() {
        let grid = Grid::empty(5, 5);
        let first = piece(&[1, 2]);
        let opening = Placement::new((0, 0), Orientation::H);
        assert!(legal_placements(&grid, &first).contains(&opening));
        let grid = place(&grid, opening, &first).unwrap();

        let second = piece(&[2, 3]);
        let candidates = legal_placements(&grid, &second);
        assert!(!candidates.is_empty());
        for candidate in candidates {
            for ((row, col), label) in candidate.assignments(&second) {
                if label == 2 {
                    assert_ne!(row, 0, "label 2 reused in row 0 by {candidate}");
                    assert_ne!(col, 1, "label 2 reused in column 1 by {candidate}");
                }
            }
        }
    }

    #[test]
    fn test_no_candidates_is_a_dead_end() {
        let grid = Grid::from_rows(&[[1, 0], [0, 2]]);
        assert!(legal_placements(&grid, &piece(&[1, 2])).is_empty());
    }

    #[test]
    fn test_place_fills_target_cells_without_touching_input() {
        let grid = Grid::from_rows(&[[5, 0, 0], [0, 0, 0], [0, 0, 0]]);
        let placement = Placement::new((0, 1), Orientation::Hr);
        let target: Vec<_> = placement.cells(2).collect();
        assert!(grid.segment_empty(target.iter().copied()));

        let placed = place(&grid, placement, &piece(&[1, 2])).unwrap();
        assert_eq!(placed.get((0, 1)), Some(2));
        assert_eq!(placed.get((0, 2)), Some(1));
        assert_eq!(grid.get((0, 1)), Some(0));

        let mut mutated = placed.clone();
        mutated.set((2, 2), 9);
        assert_eq!(placed.get((2, 2)), Some(0));
    }

    #[test]
    fn test_place_rejects_out_of_bounds() {
        let grid = Grid::empty(2, 2);
        let err = place(&grid, Placement::new((1, 1), Orientation::H), &piece(&[1, 2])).unwrap_err();
        assert!(matches!(err, PlacementError::OutOfBounds { cell: (1, 2), .. }));
    }

    #[test]
    fn test_place_rejects_occupied_cell() {
        let grid = Grid::from_rows(&[[0, 7], [0, 0]]);
        let err = place(&grid, Placement::new((0, 0), Orientation::H), &piece(&[1, 2])).unwrap_err();
        assert!(matches!(err, PlacementError::Occupied { cell: (0, 1), .. }));
        assert!(err.to_string().contains(". 7"));
    }
}
