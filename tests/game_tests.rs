use std::collections::BTreeSet;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use sweeper::{Board, BoardError, Cell, GameStatus, MoveKind, RevealResult, SweepGame};

#[test]
fn test_deduces_lone_mine_without_guessing() {
    let board = Board::with_mines(3, 3, [Cell::new(2, 2)]).unwrap();
    let mut game = SweepGame::new(board);
    let (result, deductions) = game.reveal(Cell::new(0, 0)).unwrap();
    assert_eq!(result, RevealResult::Safe(0));
    assert_eq!(deductions.safes.len(), 3);

    let mut rng = SmallRng::seed_from_u64(1);
    while let Some(step) = game.step(&mut rng).unwrap() {
        assert_eq!(step.kind, MoveKind::Safe);
    }
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.random_moves(), 0);
    assert_eq!(game.board().flags(), &BTreeSet::from([Cell::new(2, 2)]));
}

#[test]
fn test_revealing_mine_loses() {
    let board = Board::with_mines(1, 2, [Cell::new(0, 1)]).unwrap();
    let mut game = SweepGame::new(board);
    let (result, _) = game.reveal(Cell::new(0, 1)).unwrap();
    assert_eq!(result, RevealResult::Mine);
    assert_eq!(game.status(), GameStatus::Lost);

    let mut rng = SmallRng::seed_from_u64(1);
    assert!(game.step(&mut rng).unwrap().is_none());
}

#[test]
fn test_reveal_twice_is_illegal() {
    let board = Board::with_mines(3, 3, [Cell::new(2, 2)]).unwrap();
    let mut game = SweepGame::new(board);
    game.reveal(Cell::new(1, 1)).unwrap();
    assert_eq!(
        game.reveal(Cell::new(1, 1)).unwrap_err(),
        BoardError::IllegalMove { row: 1, col: 1 }
    );
}

#[test]
fn test_mine_free_board_is_won_on_first_move() {
    let mut rng = SmallRng::seed_from_u64(5);
    let board = Board::new(5, 5, 0, &mut rng).unwrap();
    let mut game = SweepGame::new(board);
    assert_eq!(game.play(&mut rng).unwrap(), GameStatus::Won);
    // Nothing to flag, so the first safe reveal already wins.
    assert_eq!(game.revealed().len(), 1);
    assert_eq!(game.random_moves(), 1);
}

#[test]
fn test_seeded_games_are_reproducible() {
    let run = |seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::new(8, 8, 8, &mut rng).unwrap();
        let mut game = SweepGame::new(board);
        let status = game.play(&mut rng).unwrap();
        (status, game.revealed().clone(), game.random_moves())
    };
    assert_eq!(run(11), run(11));
}

#[test]
fn test_ai_games_finish_soundly() {
    for seed in 0..40 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::new(8, 8, 8, &mut rng).unwrap();
        let mut game = SweepGame::new(board);
        let status = game.play(&mut rng).unwrap();
        assert_ne!(status, GameStatus::InProgress, "seed {}", seed);

        let kb = game.knowledge();
        assert!(kb.safes().is_disjoint(kb.mines()));
        assert!(kb.mines().iter().all(|&c| game.board().is_mine(c)));
        assert!(kb.safes().iter().all(|&c| !game.board().is_mine(c)));
        if status == GameStatus::Lost {
            assert!(game.random_moves() > 0, "only a guess can hit a mine");
        }
    }
}
