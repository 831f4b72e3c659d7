//! Driver that lets the knowledge base play a full game against a hidden
//! board.

use alloc::collections::BTreeSet;

use log::info;
use rand::Rng;

use crate::{
    board::Board,
    cell::Cell,
    common::{BoardError, RevealResult},
    knowledge::{Deductions, KnowledgeBase},
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// How the engine chose a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// The cell was deduced to be safe.
    Safe,
    /// No safe cell was known; the cell was picked at random.
    Random,
}

/// Outcome of a single [`SweepGame::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub cell: Cell,
    pub kind: MoveKind,
    pub result: RevealResult,
    pub deductions: Deductions,
}

/// A hidden board paired with the knowledge base playing it.
pub struct SweepGame {
    board: Board,
    knowledge: KnowledgeBase,
    revealed: BTreeSet<Cell>,
    random_moves: usize,
    status: GameStatus,
}

impl SweepGame {
    pub fn new(board: Board) -> Self {
        let knowledge = KnowledgeBase::new(board.height(), board.width());
        Self {
            board,
            knowledge,
            revealed: BTreeSet::new(),
            random_moves: 0,
            status: GameStatus::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Cells revealed so far, including a detonated mine.
    pub fn revealed(&self) -> &BTreeSet<Cell> {
        &self.revealed
    }

    /// Number of moves that were random guesses.
    pub fn random_moves(&self) -> usize {
        self.random_moves
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Reveal a chosen cell and feed the result into the knowledge base.
    ///
    /// Revealing the same cell twice is an [`BoardError::IllegalMove`].
    pub fn reveal(&mut self, cell: Cell) -> Result<(RevealResult, Deductions), BoardError> {
        if self.revealed.contains(&cell) {
            return Err(BoardError::IllegalMove {
                row: cell.row,
                col: cell.col,
            });
        }
        let result = self.board.reveal(cell)?;
        let deductions = match result {
            RevealResult::Mine => {
                info!("revealed a mine at {}", cell);
                self.revealed.insert(cell);
                self.status = GameStatus::Lost;
                Deductions::default()
            }
            RevealResult::Safe(count) => {
                let deductions = self.knowledge.add_knowledge(cell, count)?;
                self.revealed.insert(cell);
                self.sync_flags()?;
                self.update_status();
                deductions
            }
        };
        Ok((result, deductions))
    }

    /// Let the engine pick and play one move: a known-safe cell if there is
    /// one, otherwise a random cell that is not a known mine.
    ///
    /// Returns `None` once the game is over or no move is left.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Option<Step>, BoardError> {
        if self.status != GameStatus::InProgress {
            return Ok(None);
        }
        let (cell, kind) = match self.knowledge.make_safe_move() {
            Some(cell) => (cell, MoveKind::Safe),
            None => match self.knowledge.make_random_move(rng) {
                Some(cell) => (cell, MoveKind::Random),
                None => return Ok(None),
            },
        };
        if kind == MoveKind::Random {
            self.random_moves += 1;
        }
        let (result, deductions) = self.reveal(cell)?;
        Ok(Some(Step {
            cell,
            kind,
            result,
            deductions,
        }))
    }

    /// Step until the game ends or the engine runs out of moves.
    pub fn play<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<GameStatus, BoardError> {
        while self.step(rng)?.is_some() {}
        Ok(self.status)
    }

    fn sync_flags(&mut self) -> Result<(), BoardError> {
        for &mine in self.knowledge.mines() {
            self.board.flag(mine)?;
        }
        Ok(())
    }

    fn update_status(&mut self) {
        let safe_cells = self.board.height() * self.board.width() - self.board.mine_count();
        if self.board.is_won() || self.knowledge.moves_made().len() == safe_cells {
            info!(
                "board cleared after {} moves ({} random)",
                self.revealed.len(),
                self.random_moves
            );
            self.status = GameStatus::Won;
        }
    }
}
