//! Logical sentences over board cells: "exactly `count` of these cells are
//! mines".

use alloc::collections::BTreeSet;
use core::fmt;

use crate::cell::Cell;

/// A constraint stating that exactly `count` of `cells` are mines.
///
/// `count` never exceeds `cells.len()` for sentences built from a consistent
/// board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Sentence {
    cells: BTreeSet<Cell>,
    count: usize,
}

impl Sentence {
    pub fn new<I>(cells: I, count: usize) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        Self {
            cells: cells.into_iter().collect(),
            count,
        }
    }

    pub fn cells(&self) -> &BTreeSet<Cell> {
        &self.cells
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells are mines when the set is exactly as large as the count.
    pub fn known_mines(&self) -> BTreeSet<Cell> {
        if self.cells.len() == self.count {
            self.cells.clone()
        } else {
            BTreeSet::new()
        }
    }

    /// All cells are safe when the count is zero.
    pub fn known_safes(&self) -> BTreeSet<Cell> {
        if self.count == 0 {
            self.cells.clone()
        } else {
            BTreeSet::new()
        }
    }

    /// Drop a cell known to be a mine, decrementing the count.
    pub fn mark_mine(&mut self, cell: Cell) {
        if self.cells.remove(&cell) {
            self.count = self.count.saturating_sub(1);
        }
    }

    /// Drop a cell known to be safe.
    pub fn mark_safe(&mut self, cell: Cell) {
        self.cells.remove(&cell);
    }

    /// `true` if `self.cells` is a strict subset of `other.cells`.
    pub fn is_strict_subset_of(&self, other: &Sentence) -> bool {
        self.cells.len() < other.cells.len() && self.cells.is_subset(&other.cells)
    }

    /// Subset elimination: `self` must be a strict superset of `subset`.
    /// The cells unique to `self` hold exactly `self.count - subset.count`
    /// mines.
    pub(crate) fn subtract(&mut self, subset: &Sentence) {
        debug_assert!(subset.is_strict_subset_of(self));
        for cell in &subset.cells {
            self.cells.remove(cell);
        }
        self.count = self.count.saturating_sub(subset.count);
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", cell)?;
        }
        write!(f, "}} = {}", self.count)
    }
}
