use crate::{cell::Cell, minimax, tictactoe::GameGrid};

use crate::player::Player;

/// Player that always picks the minimax-optimal move.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn select_move(&mut self, grid: &GameGrid) -> Option<Cell> {
        minimax::best_move(grid)
    }
}
