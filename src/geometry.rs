//! Orientations and the cell layout of a placed piece.
//!
//! A piece always occupies a straight run of cells starting at its anchor.
//! There are four orientations: two axes times forward/reversed label order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pieces::{Label, Piece};

/// A `(row, col)` grid position.
pub type Cell = (usize, usize);

/// How a piece's labels are laid out from its anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Rightward, labels in catalog order.
    H,
    /// Rightward, labels reversed.
    Hr,
    /// Downward, labels in catalog order.
    V,
    /// Downward, labels reversed.
    Vr,
}

impl Orientation {
    /// All orientations in enumeration order.
    ///
    /// Ordering note: the enumerator relies on this order (h < hr < v < vr)
    /// to decide which solution is found first.
    pub const ALL: [Orientation; 4] = [Self::H, Self::Hr, Self::V, Self::Vr];

    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::H | Self::Hr)
    }

    #[inline]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Self::Hr | Self::Vr)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::H => "h",
            Self::Hr => "hr",
            Self::V => "v",
            Self::Vr => "vr",
        }
    }

    /// The cell `offset` steps from `anchor` along this orientation's axis.
    #[inline]
    pub const fn step(self, (row, col): Cell, offset: usize) -> Cell {
        if self.is_horizontal() {
            (row, col + offset)
        } else {
            (row + offset, col)
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An anchor cell plus an orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub anchor: Cell,
    pub orientation: Orientation,
}

impl Placement {
    pub const fn new(anchor: Cell, orientation: Orientation) -> Self {
        Self {
            anchor,
            orientation,
        }
    }

    /// Cells covered by a piece of length `len`, from the anchor outward.
    pub fn cells(self, len: usize) -> impl Iterator<Item = Cell> {
        (0..len).map(move |offset| self.orientation.step(self.anchor, offset))
    }

    /// Pairs each covered cell with the label written into it.
    ///
    /// Reversed orientations write the last label at the anchor.
    pub fn assignments(self, piece: &Piece) -> impl Iterator<Item = (Cell, Label)> + '_ {
        let labels = piece.labels();
        let len = labels.len();
        self.cells(len).enumerate().map(move |(offset, cell)| {
            let label = if self.orientation.is_reversed() {
                labels[len - 1 - offset]
            } else {
                labels[offset]
            };
            (cell, label)
        })
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "([{}, {}], {})",
            self.anchor.0, self.anchor.1, self.orientation
        )
    }
}
