#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod cell;
mod common;
mod config;
mod game;
mod knowledge;
pub mod minimax;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
mod sentence;
mod tictactoe;
#[cfg(feature = "std")]
mod ui;

pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use knowledge::*;
pub use minimax::{best_move, minimax_value};
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use player_cli::*;
pub use sentence::*;
pub use tictactoe::*;
#[cfg(feature = "std")]
pub use ui::*;
