#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    cell::Cell,
    minimax,
    tictactoe::GameGrid,
    ui::{column_label, parse_column_label},
};

use crate::player::Player;

/// Human player reading moves from stdin, with the minimax move offered as
/// the default.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a cell as column letters plus 1-based row, e.g. `B3` or `AB12`.
pub fn coord_to_string(cell: Cell) -> String {
    std::format!("{}{}", column_label(cell.col), cell.row + 1)
}

/// Parse `B3`-style input into a cell.
pub fn parse_coord(input: &str) -> Option<Cell> {
    let split = input.find(|c: char| !c.is_ascii_alphabetic())?;
    let (letters, digits) = input.split_at(split);
    let col = parse_column_label(letters)?;
    let row: usize = digits.parse().ok()?;
    if row == 0 {
        return None;
    }
    Some(Cell::new(row - 1, col))
}

impl Player for CliPlayer {
    fn select_move(&mut self, grid: &GameGrid) -> Option<Cell> {
        let suggestion = minimax::best_move(grid)?;
        let stdin = io::stdin();
        loop {
            std::print!("{}\nEnter move [{}]: ", grid, coord_to_string(suggestion));
            io::stdout().flush().ok()?;
            let mut line = String::new();
            if stdin.lock().read_line(&mut line).ok()? == 0 {
                return None;
            }
            let line = line.trim();
            if line.is_empty() {
                return Some(suggestion);
            }
            match parse_coord(line) {
                Some(cell) if grid.legal_moves().contains(&cell) => return Some(cell),
                Some(cell) => std::println!("{} is not an empty cell", coord_to_string(cell)),
                None => std::println!("Invalid coordinate"),
            }
        }
    }

    fn handle_move(&mut self, cell: Cell, grid: &GameGrid) {
        if let Some(mark) = grid.get(cell) {
            std::println!("{} played {}", mark, coord_to_string(cell));
        }
    }
}
