//! Exhaustive minimax over the tic-tac-toe grid.
//!
//! No pruning and no memoisation: the full tree from the empty grid is a
//! little over half a million nodes.

use crate::cell::Cell;
use crate::tictactoe::{GameGrid, Mark};

/// Optimal move for the player to move, or `None` on a terminal grid.
///
/// `X` maximises the score and `O` minimises it. Ties go to the first move
/// in row-major order.
pub fn best_move(grid: &GameGrid) -> Option<Cell> {
    if grid.is_terminal() {
        return None;
    }
    let mover = grid.current_player();
    let mut best: Option<(Cell, i8)> = None;
    for cell in grid.legal_moves() {
        let child = grid.apply_move(cell).ok()?;
        let value = match mover {
            Mark::X => min_value(&child),
            Mark::O => max_value(&child),
        };
        let better = match (best, mover) {
            (None, _) => true,
            (Some((_, v)), Mark::X) => value > v,
            (Some((_, v)), Mark::O) => value < v,
        };
        if better {
            best = Some((cell, value));
        }
    }
    best.map(|(cell, _)| cell)
}

/// Score of `grid` under optimal play from both sides.
pub fn minimax_value(grid: &GameGrid) -> i8 {
    match grid.current_player() {
        Mark::X => max_value(grid),
        Mark::O => min_value(grid),
    }
}

fn max_value(grid: &GameGrid) -> i8 {
    if grid.is_terminal() {
        return grid.score();
    }
    grid.legal_moves()
        .into_iter()
        .filter_map(|cell| grid.apply_move(cell).ok())
        .map(|child| min_value(&child))
        .max()
        .unwrap_or(0)
}

fn min_value(grid: &GameGrid) -> i8 {
    if grid.is_terminal() {
        return grid.score();
    }
    grid.legal_moves()
        .into_iter()
        .filter_map(|cell| grid.apply_move(cell).ok())
        .map(|child| max_value(&child))
        .min()
        .unwrap_or(0)
}
