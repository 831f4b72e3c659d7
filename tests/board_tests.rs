use sweeper::{Board, BoardError, Cell, RevealResult};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_random_placement_has_requested_mines() {
    let mut rng = SmallRng::seed_from_u64(42);
    let board = Board::new(8, 8, 8, &mut rng).unwrap();
    assert_eq!(board.mine_count(), 8);
    let mines = Cell::all(8, 8).filter(|&c| board.is_mine(c)).count();
    assert_eq!(mines, 8);
}

#[test]
fn test_placement_can_fill_board() {
    let mut rng = SmallRng::seed_from_u64(3);
    let board = Board::new(3, 4, 12, &mut rng).unwrap();
    assert!(Cell::all(3, 4).all(|c| board.is_mine(c)));
}

#[test]
fn test_too_many_mines() {
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(
        Board::new(2, 2, 5, &mut rng).unwrap_err(),
        BoardError::TooManyMines { mines: 5, cells: 4 }
    );
}

#[test]
fn test_same_seed_same_board() {
    let a = Board::new(8, 8, 10, &mut SmallRng::seed_from_u64(9)).unwrap();
    let b = Board::new(8, 8, 10, &mut SmallRng::seed_from_u64(9)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_neighbor_counts() {
    let board = Board::with_mines(3, 3, [Cell::new(0, 0), Cell::new(2, 2)]).unwrap();
    assert_eq!(board.neighbor_mine_count(Cell::new(1, 1)), 2);
    assert_eq!(board.neighbor_mine_count(Cell::new(0, 1)), 1);
    assert_eq!(board.neighbor_mine_count(Cell::new(2, 0)), 0);
    // a mine does not count itself
    assert_eq!(board.neighbor_mine_count(Cell::new(0, 0)), 0);
}

#[test]
fn test_reveal() {
    let board = Board::with_mines(2, 2, [Cell::new(1, 1)]).unwrap();
    assert_eq!(board.reveal(Cell::new(1, 1)).unwrap(), RevealResult::Mine);
    assert_eq!(board.reveal(Cell::new(0, 0)).unwrap(), RevealResult::Safe(1));
    assert_eq!(
        board.reveal(Cell::new(0, 2)).unwrap_err(),
        BoardError::OutOfBounds { row: 0, col: 2 }
    );
    assert!(!board.is_mine(Cell::new(9, 9)));
}

#[test]
fn test_with_mines_rejects_out_of_range() {
    assert_eq!(
        Board::with_mines(2, 2, [Cell::new(2, 0)]).unwrap_err(),
        BoardError::OutOfBounds { row: 2, col: 0 }
    );
}

#[test]
fn test_won_when_flags_match_mines() {
    let mut board = Board::with_mines(3, 3, [Cell::new(0, 0), Cell::new(1, 2)]).unwrap();
    assert!(!board.is_won());
    board.flag(Cell::new(0, 0)).unwrap();
    assert!(!board.is_won());
    board.flag(Cell::new(2, 2)).unwrap();
    board.flag(Cell::new(1, 2)).unwrap();
    assert!(!board.is_won(), "a wrong flag spoils the win");
    assert!(board.unflag(Cell::new(2, 2)));
    assert!(board.is_won());
    assert!(board.flag(Cell::new(3, 3)).is_err());
}

#[test]
fn test_display_marks_mines() {
    let board = Board::with_mines(2, 2, [Cell::new(0, 1)]).unwrap();
    assert_eq!(board.to_string(), "-----\n| |X|\n-----\n| | |\n-----\n");
}
