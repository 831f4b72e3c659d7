//! Grid coordinates shared by the hidden board, the knowledge base and the
//! tic-tac-toe grid.

use core::fmt;

use crate::common::BoardError;

/// Zero-indexed `(row, col)` position on a grid.
///
/// Ordering is row-major, which fixes the enumeration order of every
/// `BTreeSet<Cell>` in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns `true` if the cell lies inside a `height` x `width` grid.
    pub fn in_bounds(&self, height: usize, width: usize) -> bool {
        self.row < height && self.col < width
    }

    /// Error unless the cell lies inside a `height` x `width` grid.
    pub fn check_bounds(&self, height: usize, width: usize) -> Result<(), BoardError> {
        if self.in_bounds(height, width) {
            Ok(())
        } else {
            Err(BoardError::out_of_bounds(*self))
        }
    }

    /// The 8-neighbourhood of this cell clipped to a `height` x `width` grid,
    /// in row-major order. The cell itself is never yielded.
    pub fn neighbors(self, height: usize, width: usize) -> impl Iterator<Item = Cell> {
        let rows = self.row.saturating_sub(1)..(self.row + 2).min(height);
        rows.flat_map(move |r| {
            let cols = self.col.saturating_sub(1)..(self.col + 2).min(width);
            cols.map(move |c| Cell::new(r, c))
        })
        .filter(move |&n| n != self)
    }

    /// Every cell of a `height` x `width` grid in row-major order.
    pub fn all(height: usize, width: usize) -> impl Iterator<Item = Cell> {
        (0..height).flat_map(move |r| (0..width).map(move |c| Cell::new(r, c)))
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
