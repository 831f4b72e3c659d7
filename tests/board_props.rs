use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use sweeper::{Board, Cell, MAX_NEIGHBORS};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placement_is_exact(seed in any::<u64>(), height in 1usize..12, width in 1usize..12, fill in 0usize..=100) {
        let mines = height * width * fill / 100;
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::new(height, width, mines, &mut rng).unwrap();
        let placed = Cell::all(height, width).filter(|&c| board.is_mine(c)).count();
        prop_assert_eq!(placed, mines);
    }

    #[test]
    fn neighbor_count_matches_brute_force(seed in any::<u64>(), row in 0usize..6, col in 0usize..6) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::new(6, 6, 12, &mut rng).unwrap();
        let cell = Cell::new(row, col);
        let mut expected = 0;
        for r in row.saturating_sub(1)..=row + 1 {
            for c in col.saturating_sub(1)..=col + 1 {
                let n = Cell::new(r, c);
                if n != cell && r < 6 && c < 6 && board.is_mine(n) {
                    expected += 1;
                }
            }
        }
        let count = board.neighbor_mine_count(cell);
        prop_assert_eq!(count as usize, expected);
        prop_assert!(count as usize <= MAX_NEIGHBORS);
    }
}
