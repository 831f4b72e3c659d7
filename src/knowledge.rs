//! Knowledge base and forward-chaining inference for the hidden board.
//!
//! Each revealed cell contributes one [`Sentence`] over its still-unknown
//! neighbours. Known cells are propagated into every sentence, and a single
//! pass of pairwise subset elimination runs after each new sentence. Repeated
//! reveals drive the base towards a fixed point.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use log::{debug, trace};
use rand::Rng;

use crate::cell::Cell;
use crate::common::BoardError;
use crate::sentence::Sentence;

/// Cells newly classified by a single update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deductions {
    pub safes: BTreeSet<Cell>,
    pub mines: BTreeSet<Cell>,
}

impl Deductions {
    pub fn is_empty(&self) -> bool {
        self.safes.is_empty() && self.mines.is_empty()
    }
}

/// Accumulated facts about a `height` x `width` board.
///
/// `safes` and `mines` are always disjoint. Counts from an inconsistent board
/// can leave cells undecided but never put a cell in both sets.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    height: usize,
    width: usize,
    moves_made: BTreeSet<Cell>,
    safes: BTreeSet<Cell>,
    mines: BTreeSet<Cell>,
    sentences: Vec<Sentence>,
}

impl KnowledgeBase {
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            moves_made: BTreeSet::new(),
            safes: BTreeSet::new(),
            mines: BTreeSet::new(),
            sentences: Vec::new(),
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn moves_made(&self) -> &BTreeSet<Cell> {
        &self.moves_made
    }

    pub fn safes(&self) -> &BTreeSet<Cell> {
        &self.safes
    }

    pub fn mines(&self) -> &BTreeSet<Cell> {
        &self.mines
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Record `cell` as a mine and remove it from every sentence.
    fn mark_mine(&mut self, cell: Cell) {
        debug_assert!(!self.safes.contains(&cell), "{} is already safe", cell);
        if self.mines.insert(cell) {
            debug!("deduced mine at {}", cell);
        }
        for sentence in &mut self.sentences {
            sentence.mark_mine(cell);
        }
    }

    /// Record `cell` as safe and remove it from every sentence.
    fn mark_safe(&mut self, cell: Cell) {
        debug_assert!(!self.mines.contains(&cell), "{} is already a mine", cell);
        if self.safes.insert(cell) {
            debug!("deduced safe cell at {}", cell);
        }
        for sentence in &mut self.sentences {
            sentence.mark_safe(cell);
        }
    }

    /// Learn that the revealed, safe `cell` has `count` mines among its
    /// neighbours.
    ///
    /// Each cell must be passed at most once. Returns the cells, other than
    /// `cell` itself, that became known by this call. A cell already deduced
    /// to be a mine is an [`BoardError::IllegalMove`].
    pub fn add_knowledge(&mut self, cell: Cell, count: u8) -> Result<Deductions, BoardError> {
        cell.check_bounds(self.height, self.width)?;
        if self.mines.contains(&cell) {
            return Err(BoardError::IllegalMove {
                row: cell.row,
                col: cell.col,
            });
        }
        let neighbors: Vec<Cell> = cell.neighbors(self.height, self.width).collect();
        if count as usize > neighbors.len() {
            return Err(BoardError::InvalidCount {
                count,
                neighbors: neighbors.len(),
            });
        }

        let (safes_before, mines_before) = (self.safes.clone(), self.mines.clone());

        self.moves_made.insert(cell);
        self.mark_safe(cell);
        self.learn(Sentence::new(neighbors, count as usize));

        let mut safes: BTreeSet<Cell> = self.safes.difference(&safes_before).copied().collect();
        safes.remove(&cell);
        Ok(Deductions {
            safes,
            mines: self.mines.difference(&mines_before).copied().collect(),
        })
    }

    /// Add an arbitrary sentence to the base and run inference over it.
    ///
    /// Cells outside the board are ignored.
    pub fn add_sentence(&mut self, sentence: Sentence) -> Deductions {
        let (safes_before, mines_before) = (self.safes.clone(), self.mines.clone());
        let (height, width) = (self.height, self.width);
        let cells = sentence
            .cells()
            .iter()
            .copied()
            .filter(|c| c.in_bounds(height, width));
        self.learn(Sentence::new(cells, sentence.count()));
        Deductions {
            safes: self.safes.difference(&safes_before).copied().collect(),
            mines: self.mines.difference(&mines_before).copied().collect(),
        }
    }

    fn learn(&mut self, raw: Sentence) {
        // Known mines leave the sentence and lower its count; known safes just leave.
        let mut count = raw.count();
        let mut unknown = BTreeSet::new();
        for &cell in raw.cells() {
            if self.mines.contains(&cell) {
                count = count.saturating_sub(1);
            } else if !self.safes.contains(&cell) {
                unknown.insert(cell);
            }
        }

        if !unknown.is_empty() {
            let sentence = Sentence::new(unknown, count);
            trace!("adding sentence {}", sentence);
            self.sentences.push(sentence.clone());
            for mine in sentence.known_mines() {
                self.mark_mine(mine);
            }
            for safe in sentence.known_safes() {
                self.mark_safe(safe);
            }
        }

        self.resolve_pairs();
        self.sentences.retain(|s| !s.is_empty());
    }

    /// One pass of subset elimination over every ordered pair of sentences.
    ///
    /// Not iterated to a fixed point: later calls pick up what this pass
    /// leaves behind.
    fn resolve_pairs(&mut self) {
        let n = self.sentences.len();
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    if self.sentences[i].is_strict_subset_of(&self.sentences[j]) {
                        self.reduce(j, i);
                    } else if self.sentences[j].is_strict_subset_of(&self.sentences[i]) {
                        self.reduce(i, j);
                    }
                }
                self.apply_conclusions(i, j);
            }
        }
    }

    fn reduce(&mut self, superset: usize, subset: usize) {
        let sub = self.sentences[subset].clone();
        if sub.is_empty() {
            return;
        }
        self.sentences[superset].subtract(&sub);
        trace!("reduced sentence by {} to {}", sub, self.sentences[superset]);
    }

    fn apply_conclusions(&mut self, i: usize, j: usize) {
        for idx in [i, j] {
            for mine in self.sentences[idx].known_mines() {
                self.mark_mine(mine);
            }
        }
        for idx in [i, j] {
            for safe in self.sentences[idx].known_safes() {
                self.mark_safe(safe);
            }
        }
    }

    /// A known-safe cell that has not been played yet, or `None`.
    ///
    /// Returns the smallest such cell in row-major order.
    pub fn make_safe_move(&self) -> Option<Cell> {
        self.safes.difference(&self.moves_made).next().copied()
    }

    /// A uniformly random cell that has not been played and is not a known
    /// mine, or `None` if no such cell exists.
    pub fn make_random_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Cell> {
        let candidates: Vec<Cell> = Cell::all(self.height, self.width)
            .filter(|c| !self.moves_made.contains(c) && !self.mines.contains(c))
            .collect();
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[rng.random_range(0..candidates.len())])
    }
}
