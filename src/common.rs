//! Common types shared by the sweeper engine and the tic-tac-toe search:
//! errors and the cell-level outcome of a reveal.

use crate::cell::Cell;

/// Result of revealing a single cell on the hidden board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealResult {
    /// The cell was safe and carries the number of neighbouring mines.
    Safe(u8),
    /// The cell held a mine.
    Mine,
}

/// Errors returned by board, knowledge base and grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column lies outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Target cell of a grid move is already occupied.
    IllegalMove { row: usize, col: usize },
    /// More mines requested than the board has cells.
    TooManyMines { mines: usize, cells: usize },
    /// Reported neighbour count exceeds the neighbours the cell has.
    InvalidCount { count: u8, neighbors: usize },
}

impl BoardError {
    pub(crate) fn out_of_bounds(cell: Cell) -> Self {
        BoardError::OutOfBounds {
            row: cell.row,
            col: cell.col,
        }
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Cell ({}, {}) is out of bounds", row, col)
            }
            BoardError::IllegalMove { row, col } => {
                write!(f, "({}, {}) is an illegal move", row, col)
            }
            BoardError::TooManyMines { mines, cells } => {
                write!(f, "Cannot place {} mines on a board of {} cells", mines, cells)
            }
            BoardError::InvalidCount { count, neighbors } => write!(
                f,
                "Neighbour count {} exceeds the {} neighbouring cells",
                count, neighbors
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
