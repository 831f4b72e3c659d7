use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use sweeper::{Board, SweepGame, DEFAULT_HEIGHT, DEFAULT_MINES, DEFAULT_WIDTH};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 && args.len() != 5 {
        eprintln!("Usage: {} <seed> [<height> <width> <mines>]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let (height, width, mines) = if args.len() == 5 {
        (
            args[2].parse::<usize>()?,
            args[3].parse::<usize>()?,
            args[4].parse::<usize>()?,
        )
    } else {
        (DEFAULT_HEIGHT, DEFAULT_WIDTH, DEFAULT_MINES)
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let board = Board::new(height, width, mines, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
    let mut game = SweepGame::new(board);
    let status = game.play(&mut rng).map_err(|e| anyhow::anyhow!(e))?;

    let result = json!({
        "status": status,
        "moves": game.revealed().len(),
        "random_moves": game.random_moves(),
        "flags": game.board().flags(),
        "safes_known": game.knowledge().safes().len(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
