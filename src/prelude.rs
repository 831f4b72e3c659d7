//! Commonly used types and utilities for ease of import.

pub use crate::{
    best_move, minimax_value, AiPlayer, Board, BoardError, Cell, Deductions, GameGrid,
    GameStatus, KnowledgeBase, Mark, Player, RevealResult, Sentence, SweepGame,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_knowledge, print_player_view, CliPlayer};
