//! Depth-first backtracking over the piece catalog.
//!
//! - Pieces are placed strictly in catalog order, one per search level
//! - Every branch owns its grid; descending clones it, nothing is undone
//! - Explicit stack instead of recursion, children explored before siblings
//!   so solutions come out in scan/orientation order

use log::{debug, trace};

use crate::geometry::Placement;
use crate::goal::Goal;
use crate::grid::Grid;
use crate::pieces::{Piece, Puzzle};
use crate::placements::{legal_placements, place, PlacementError};

/// A catalog piece together with where it went.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedPiece {
    pub piece: Piece,
    pub placement: Placement,
}

/// One placement per catalog piece, in catalog order.
pub type SolutionPath = Vec<PlacedPiece>;

/// A state in the search tree.
///
/// Holds the grid after `path.len()` pieces, and the candidates for the
/// next piece that have not been explored yet.
struct Branch {
    grid: Grid,
    path: SolutionPath,
    /// Legal placements for the next piece; empty when terminal or dead.
    candidates: Vec<Placement>,
    /// Index of the next candidate to try.
    next_candidate: usize,
}

impl Branch {
    fn new(grid: Grid, path: SolutionPath, pieces: &[Piece]) -> Self {
        let candidates = match pieces.get(path.len()) {
            Some(piece) => legal_placements(&grid, piece),
            None => Vec::new(),
        };
        Self {
            grid,
            path,
            candidates,
            next_candidate: 0,
        }
    }
}

/// Finds complete placements of `puzzle` that satisfy `goal`.
///
/// Explores the whole tree unless `max_solutions` is reached first.
/// Solutions are returned in discovery order; the first one is the one
/// reached earliest in anchor scan and `h, hr, v, vr` order. A placer
/// error means the enumerator produced an illegal candidate and aborts
/// the search.
pub fn solve<G: Goal + ?Sized>(
    puzzle: &Puzzle,
    goal: &G,
    max_solutions: Option<usize>,
) -> Result<Vec<SolutionPath>, PlacementError> {
    let pieces = puzzle.pieces.as_slice();
    let mut solutions = Vec::new();
    let mut branches_explored = 0usize;
    let mut dead_ends = 0usize;

    let root = Grid::empty(puzzle.rows, puzzle.cols);
    let mut search_stack = vec![Branch::new(root, Vec::new(), pieces)];

    while let Some(mut branch) = search_stack.pop() {
        let depth = branch.path.len();

        let Some(piece) = pieces.get(depth) else {
            // every piece placed
            if goal.is_satisfied(&branch.grid) {
                trace!("solution {} found", solutions.len() + 1);
                solutions.push(branch.path);
                if max_solutions.is_some_and(|limit| solutions.len() >= limit) {
                    break;
                }
            }
            continue;
        };

        if branch.next_candidate == 0 {
            branches_explored += 1;
            if branch.candidates.is_empty() {
                dead_ends += 1;
                continue;
            }
        }

        let Some(&placement) = branch.candidates.get(branch.next_candidate) else {
            continue;
        };
        branch.next_candidate += 1;

        let grid = place(&branch.grid, placement, piece)?;
        let mut path = branch.path.clone();
        path.push(PlacedPiece {
            piece: piece.clone(),
            placement,
        });

        // revisit this branch for its remaining candidates after the child
        search_stack.push(branch);
        search_stack.push(Branch::new(grid, path, pieces));
    }

    debug!(
        "search finished: {} branches explored, {} dead ends, {} solutions",
        branches_explored,
        dead_ends,
        solutions.len()
    );

    Ok(solutions)
}
