//! Mauer Placement Solver Library
//!
//! Places an ordered catalog of short labelled pieces onto a grid so that
//! no label repeats along any row or column, then checks a line-sum goal
//! on the finished grid.

pub mod geometry;
pub mod goal;
pub mod grid;
pub mod pieces;
pub mod placements;
pub mod report;
pub mod solver;
pub mod verify;

use goal::Goal;
use pieces::Puzzle;
use placements::PlacementError;
use solver::SolutionPath;

impl Puzzle {
    /// Searches for placements satisfying `goal`, in discovery order.
    pub fn solve(
        &self,
        goal: &dyn Goal,
        max_solutions: Option<usize>,
    ) -> Result<Vec<SolutionPath>, PlacementError> {
        solver::solve(self, goal, max_solutions)
    }

    /// The solution reached first by the depth-first search, if any.
    ///
    /// The whole tree is still explored.
    pub fn first_solution(&self, goal: &dyn Goal) -> Result<Option<SolutionPath>, PlacementError> {
        Ok(self.solve(goal, None)?.into_iter().next())
    }

    /// Number of complete placements satisfying `goal`.
    pub fn count_solutions(&self, goal: &dyn Goal) -> Result<usize, PlacementError> {
        Ok(self.solve(goal, None)?.len())
    }
}
