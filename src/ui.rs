#![cfg(feature = "std")]

use std::fmt::Write;
use std::string::String;
use std::vec::Vec;

use crate::{
    cell::Cell,
    game::SweepGame,
    knowledge::KnowledgeBase,
};

const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Spreadsheet-style column label: `A` to `Z`, then `AA`, `AB` and so on.
pub fn column_label(col: usize) -> String {
    let mut label = Vec::new();
    let mut n = col + 1;
    while n > 0 {
        n -= 1;
        label.push(char::from(LETTERS[n % 26]));
        n /= 26;
    }
    label.iter().rev().collect()
}

/// Inverse of [`column_label`], case-insensitive.
pub fn parse_column_label(label: &str) -> Option<usize> {
    if label.is_empty() {
        return None;
    }
    let mut n: usize = 0;
    for ch in label.chars() {
        let ch = ch.to_ascii_uppercase();
        let digit = LETTERS.iter().position(|&l| char::from(l) == ch)?;
        n = n.checked_mul(26)?.checked_add(digit + 1)?;
    }
    Some(n - 1)
}

fn digits(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

fn header(out: &mut String, width: usize, row_width: usize, col_width: usize) {
    let _ = write!(out, "{:row_width$} ", "");
    for c in 0..width {
        let _ = write!(out, " {:>col_width$}", column_label(c));
    }
    out.push('\n');
}

/// Render the board as the engine sees it.
///
/// Revealed cells show their neighbour count, flagged cells `F`, known-safe
/// unplayed cells `s` and a detonated mine `*`. With `reveal` set, unflagged
/// mines show as `X`.
pub fn render_player_view(game: &SweepGame, reveal: bool) -> String {
    let board = game.board();
    let kb = game.knowledge();
    let mut out = String::new();
    let row_width = digits(board.height()).max(2);
    let col_width = column_label(board.width().saturating_sub(1)).len();
    header(&mut out, board.width(), row_width, col_width);
    for r in 0..board.height() {
        let _ = write!(out, "{:>row_width$} ", r + 1);
        for c in 0..board.width() {
            let cell = Cell::new(r, c);
            let ch = if game.revealed().contains(&cell) {
                if board.is_mine(cell) {
                    '*'
                } else {
                    char::from_digit(u32::from(board.neighbor_mine_count(cell)), 10)
                        .unwrap_or('?')
                }
            } else if board.flags().contains(&cell) {
                'F'
            } else if reveal && board.is_mine(cell) {
                'X'
            } else if kb.safes().contains(&cell) {
                's'
            } else {
                '.'
            };
            let _ = write!(out, " {:>col_width$}", ch);
        }
        out.push('\n');
    }
    out
}

/// Display the engine's view of the board.
pub fn print_player_view(game: &SweepGame, reveal: bool) {
    std::print!("{}", render_player_view(game, reveal));
}

/// Print the sentences currently held by the knowledge base.
pub fn print_knowledge(kb: &KnowledgeBase) {
    std::println!(
        "\nKnowledge: {} safe, {} mines, {} sentences",
        kb.safes().len(),
        kb.mines().len(),
        kb.sentences().len()
    );
    for sentence in kb.sentences() {
        std::println!("  {}", sentence);
    }
}
