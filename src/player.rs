use crate::{cell::Cell, tictactoe::GameGrid};

/// Interface implemented by the different tic-tac-toe player types.
pub trait Player {
    /// Choose the next cell to mark on `grid`, or `None` if there is none.
    fn select_move(&mut self, grid: &GameGrid) -> Option<Cell>;

    /// Inform the player of a move made by either side.
    fn handle_move(&mut self, _cell: Cell, _grid: &GameGrid) {}
}
