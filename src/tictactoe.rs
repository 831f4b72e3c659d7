//! Tic-tac-toe grid and rules.
//!
//! [`GameGrid`] is a `Copy` value: applying a move returns a new grid and
//! never touches the original, so search branches cannot alias.

use alloc::vec::Vec;
use core::fmt;

use crate::cell::Cell;
use crate::common::BoardError;
use crate::config::GRID_SIZE;

/// A player's mark. `X` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

type Rows = [[Option<Mark>; GRID_SIZE]; GRID_SIZE];

/// Every row, column and diagonal.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// A 3x3 grid of optional marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameGrid {
    cells: Rows,
}

impl GameGrid {
    /// The empty starting grid.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: Rows) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &Rows {
        &self.cells
    }

    /// Mark at `cell`, or `None` if empty or off the grid.
    pub fn get(&self, cell: Cell) -> Option<Mark> {
        self.cells.get(cell.row)?.get(cell.col).copied().flatten()
    }

    fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|m| m.is_some()).count()
    }

    /// `X` moves on an even number of occupied cells, `O` on an odd number.
    pub fn current_player(&self) -> Mark {
        if self.occupied() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Empty cells in row-major order.
    pub fn legal_moves(&self) -> Vec<Cell> {
        Cell::all(GRID_SIZE, GRID_SIZE)
            .filter(|&c| self.cells[c.row][c.col].is_none())
            .collect()
    }

    /// The grid after the current player marks `cell`. `self` is unchanged.
    pub fn apply_move(&self, cell: Cell) -> Result<GameGrid, BoardError> {
        cell.check_bounds(GRID_SIZE, GRID_SIZE)?;
        if self.cells[cell.row][cell.col].is_some() {
            return Err(BoardError::IllegalMove {
                row: cell.row,
                col: cell.col,
            });
        }
        let mut next = *self;
        next.cells[cell.row][cell.col] = Some(self.current_player());
        Ok(next)
    }

    /// The player holding three in a row, if any.
    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|&line| {
            let [a, b, c] = line.map(|(r, c)| self.cells[r][c]);
            match a {
                Some(m) if b == Some(m) && c == Some(m) => Some(m),
                _ => None,
            }
        })
    }

    /// Over when someone has won or the grid is full.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.occupied() == GRID_SIZE * GRID_SIZE
    }

    /// `1` if `X` has won, `-1` if `O` has won, `0` otherwise.
    pub fn score(&self) -> i8 {
        match self.winner() {
            Some(Mark::X) => 1,
            Some(Mark::O) => -1,
            None => 0,
        }
    }
}

impl fmt::Display for GameGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f, "---+---+---")?;
            }
            for (c, mark) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, "|")?;
                }
                match mark {
                    Some(m) => write!(f, " {} ", m)?,
                    None => write!(f, "   ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
