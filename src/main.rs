#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use sweeper::{
    init_logging, print_knowledge, print_player_view, AiPlayer, Board, CliPlayer, GameGrid,
    GameStatus, Mark, MoveKind, Player, SweepGame, DEFAULT_HEIGHT, DEFAULT_MINES, DEFAULT_WIDTH,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg(feature = "std")]
enum Side {
    X,
    O,
    None,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Let the inference engine play one game of minesweeper.
    Sweep {
        #[arg(long, default_value_t = DEFAULT_HEIGHT)]
        height: usize,
        #[arg(long, default_value_t = DEFAULT_WIDTH)]
        width: usize,
        #[arg(long, default_value_t = DEFAULT_MINES)]
        mines: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Show mine locations on the final board")]
        reveal: bool,
        #[arg(long, help = "Print the knowledge base after every move")]
        knowledge: bool,
    },
    /// Play tic-tac-toe against the minimax player.
    Tictactoe {
        #[arg(long, value_enum, default_value_t = Side::X, help = "Side played by a human; `none` watches two AIs")]
        human: Side,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sweep {
            height,
            width,
            mines,
            seed,
            reveal,
            knowledge,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = match seed {
                Some(s) => SmallRng::seed_from_u64(s),
                None => {
                    let mut seed_rng = rand::rng();
                    SmallRng::from_rng(&mut seed_rng)
                }
            };
            let board =
                Board::new(height, width, mines, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
            let mut game = SweepGame::new(board);
            while let Some(step) = game.step(&mut rng).map_err(|e| anyhow::anyhow!(e))? {
                let how = match step.kind {
                    MoveKind::Safe => "safe",
                    MoveKind::Random => "random",
                };
                println!("AI made {} move {}", how, step.cell);
                if knowledge {
                    print_knowledge(game.knowledge());
                }
            }
            print_player_view(&game, reveal);
            match game.status() {
                GameStatus::Won => println!("\nBoard cleared in {} moves.", game.revealed().len()),
                GameStatus::Lost => println!("\nHit a mine after {} moves.", game.revealed().len()),
                GameStatus::InProgress => println!("\nNo moves left to make."),
            }
        }
        Commands::Tictactoe { human } => {
            let mut x: Box<dyn Player> = match human {
                Side::X => Box::new(CliPlayer::new()),
                _ => Box::new(AiPlayer::new()),
            };
            let mut o: Box<dyn Player> = match human {
                Side::O => Box::new(CliPlayer::new()),
                _ => Box::new(AiPlayer::new()),
            };
            let mut grid = GameGrid::new();
            while !grid.is_terminal() {
                let mover = grid.current_player();
                let player = match mover {
                    Mark::X => &mut x,
                    Mark::O => &mut o,
                };
                let Some(cell) = player.select_move(&grid) else {
                    println!("{} left the game.", mover);
                    return Ok(());
                };
                grid = grid.apply_move(cell).map_err(|e| anyhow::anyhow!(e))?;
                x.handle_move(cell, &grid);
                o.handle_move(cell, &grid);
            }
            println!("\n{}", grid);
            match grid.winner() {
                Some(mark) => println!("Game over: {} wins. {} loses.", mark, mark.opponent()),
                None => println!("Game over: tie."),
            }
        }
    }
    Ok(())
}
