//! Grid representation and line queries.
//!
//! The grid is a flat row-major array where each cell holds a label, or 0
//! for empty. Grids are plain values: cloning gives an independent copy,
//! which is how the search keeps sibling branches apart.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::geometry::Cell;
use crate::pieces::Label;

/// A full row or column of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Col(usize),
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Row(row) => write!(f, "row {row}"),
            Line::Col(col) => write!(f, "column {col}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Label>,
}

impl Grid {
    /// Creates an all-empty `rows` x `cols` grid.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Builds a grid from explicit rows.
    pub fn from_rows<const COLS: usize>(rows: &[[Label; COLS]]) -> Self {
        Self {
            rows: rows.len(),
            cols: COLS,
            cells: rows.iter().flatten().copied().collect(),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn contains_cell(&self, (row, col): Cell) -> bool {
        row < self.rows && col < self.cols
    }

    /// Converts `(row, col)` to a linear cell index.
    #[inline(always)]
    fn cell_index(&self, (row, col): Cell) -> usize {
        row * self.cols + col
    }

    /// Label at `cell`, or `None` when outside the grid.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<Label> {
        self.contains_cell(cell)
            .then(|| self.cells[self.cell_index(cell)])
    }

    /// Writes a label. Callers are responsible for bounds.
    #[inline]
    pub(crate) fn set(&mut self, cell: Cell, label: Label) {
        let idx = self.cell_index(cell);
        self.cells[idx] = label;
    }

    /// True when every cell of the segment is inside the grid and empty.
    pub fn segment_empty(&self, mut cells: impl Iterator<Item = Cell>) -> bool {
        cells.all(|cell| self.get(cell) == Some(0))
    }

    fn row(&self, row: usize) -> &[Label] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    fn col(&self, col: usize) -> impl Iterator<Item = Label> + '_ {
        self.cells.iter().skip(col).step_by(self.cols.max(1)).copied()
    }

    /// Whether `label` appears anywhere in row `row`.
    pub fn row_contains(&self, row: usize, label: Label) -> bool {
        row < self.rows && self.row(row).contains(&label)
    }

    /// Whether `label` appears anywhere in column `col`.
    pub fn col_contains(&self, col: usize, label: Label) -> bool {
        col < self.cols && self.col(col).any(|cell| cell == label)
    }

    /// True when no cell holds a label yet.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == 0)
    }

    pub fn total(&self) -> u64 {
        self.cells.iter().map(|&cell| u64::from(cell)).sum()
    }

    pub fn row_sums(&self) -> Vec<u64> {
        (0..self.rows)
            .map(|row| self.row(row).iter().map(|&cell| u64::from(cell)).sum())
            .collect()
    }

    pub fn col_sums(&self) -> Vec<u64> {
        (0..self.cols)
            .map(|col| self.col(col).map(u64::from).sum())
            .collect()
    }

    /// Finds the first non-empty label repeated within a row or column.
    ///
    /// Rows are scanned before columns.
    pub fn duplicate_in_lines(&self) -> Option<(Line, Label)> {
        fn first_repeat(labels: impl Iterator<Item = Label>) -> Option<Label> {
            let mut seen = FxHashSet::default();
            labels.filter(|&label| label != 0).find(|&label| !seen.insert(label))
        }

        (0..self.rows)
            .find_map(|row| first_repeat(self.row(row).iter().copied()).map(|l| (Line::Row(row), l)))
            .or_else(|| {
                (0..self.cols)
                    .find_map(|col| first_repeat(self.col(col)).map(|l| (Line::Col(col), l)))
            })
    }
}

/// Renders one row per line, `.` for empty cells.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .map(|cell| cell.to_string().len())
            .max()
            .unwrap_or(1);

        for row in 0..self.rows {
            for (col, &cell) in self.row(row).iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                if cell == 0 {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{cell:>width$}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
