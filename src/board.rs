//! Hidden board: ground-truth mine placement and the queries a player may
//! make against it.

use alloc::collections::BTreeSet;
use core::fmt;

use log::debug;
use rand::Rng;

use crate::cell::Cell;
use crate::common::{BoardError, RevealResult};

/// Ground truth for a single game. Mines are fixed at construction.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    mines: BTreeSet<Cell>,
    flags: BTreeSet<Cell>,
}

impl Board {
    /// Place `mines` mines on distinct, uniformly random cells.
    pub fn new<R: Rng + ?Sized>(
        height: usize,
        width: usize,
        mines: usize,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let cells = height * width;
        if mines > cells {
            return Err(BoardError::TooManyMines { mines, cells });
        }
        let mut placed = BTreeSet::new();
        // rejection sampling: redraw until an unmined cell comes up
        while placed.len() < mines {
            let cell = Cell::new(rng.random_range(0..height), rng.random_range(0..width));
            placed.insert(cell);
        }
        debug!("placed {} mines on a {}x{} board", mines, height, width);
        Ok(Self {
            height,
            width,
            mines: placed,
            flags: BTreeSet::new(),
        })
    }

    /// Build a board with mines at exactly the given cells.
    pub fn with_mines<I>(height: usize, width: usize, mines: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut placed = BTreeSet::new();
        for cell in mines {
            cell.check_bounds(height, width)?;
            placed.insert(cell);
        }
        Ok(Self {
            height,
            width,
            mines: placed,
            flags: BTreeSet::new(),
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of mines on the board.
    pub fn mine_count(&self) -> usize {
        self.mines.len()
    }

    /// Cells the player has flagged as mines.
    pub fn flags(&self) -> &BTreeSet<Cell> {
        &self.flags
    }

    /// Cells outside the board are never mines.
    pub fn is_mine(&self, cell: Cell) -> bool {
        self.mines.contains(&cell)
    }

    /// Mines among the clipped 8-neighbourhood of `cell`.
    pub fn neighbor_mine_count(&self, cell: Cell) -> u8 {
        cell.neighbors(self.height, self.width)
            .filter(|n| self.mines.contains(n))
            .count() as u8
    }

    /// Reveal `cell`: either a mine or its neighbour count.
    pub fn reveal(&self, cell: Cell) -> Result<RevealResult, BoardError> {
        cell.check_bounds(self.height, self.width)?;
        if self.is_mine(cell) {
            Ok(RevealResult::Mine)
        } else {
            Ok(RevealResult::Safe(self.neighbor_mine_count(cell)))
        }
    }

    /// Flag `cell` as a suspected mine.
    pub fn flag(&mut self, cell: Cell) -> Result<(), BoardError> {
        cell.check_bounds(self.height, self.width)?;
        self.flags.insert(cell);
        Ok(())
    }

    /// Remove a flag; returns whether one was present.
    pub fn unflag(&mut self, cell: Cell) -> bool {
        self.flags.remove(&cell)
    }

    /// `true` iff the flagged cells are exactly the mines.
    pub fn is_won(&self) -> bool {
        self.flags == self.mines
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = |f: &mut fmt::Formatter<'_>| -> fmt::Result {
            for _ in 0..self.width {
                write!(f, "--")?;
            }
            writeln!(f, "-")
        };
        for r in 0..self.height {
            rule(f)?;
            for c in 0..self.width {
                let ch = if self.is_mine(Cell::new(r, c)) { 'X' } else { ' ' };
                write!(f, "|{}", ch)?;
            }
            writeln!(f, "|")?;
        }
        rule(f)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{ {}x{}, mines: {:?}, flags: {:?} }}",
            self.height, self.width, self.mines, self.flags
        )
    }
}
