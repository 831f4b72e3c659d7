use sweeper::{
    render_player_view, AiPlayer, Board, Cell, GameGrid, Mark, Player, SweepGame,
};

#[test]
fn test_ai_vs_ai_game() {
    let mut x = AiPlayer::new();
    let mut o = AiPlayer::new();
    let mut grid = GameGrid::new();
    let mut turns = 0;
    while !grid.is_terminal() {
        turns += 1;
        let player: &mut dyn Player = match grid.current_player() {
            Mark::X => &mut x,
            Mark::O => &mut o,
        };
        let cell = player.select_move(&grid).unwrap();
        grid = grid.apply_move(cell).unwrap();
        assert!(turns <= 9, "game took too many turns");
    }
    assert_eq!(turns, 9);
    assert_eq!(grid.winner(), None);
    assert_eq!(x.select_move(&grid), None);
}

#[test]
fn test_player_view_rendering() {
    let board = Board::with_mines(2, 3, [Cell::new(1, 2)]).unwrap();
    let mut game = SweepGame::new(board);
    game.reveal(Cell::new(0, 0)).unwrap();
    assert_eq!(
        render_player_view(&game, false),
        "    A B C\n 1  0 s .\n 2  s s .\n"
    );
    assert_eq!(
        render_player_view(&game, true),
        "    A B C\n 1  0 s .\n 2  s s X\n"
    );
}

#[test]
fn test_wide_board_header_uses_letter_labels() {
    let board = Board::with_mines(1, 30, [Cell::new(0, 29)]).unwrap();
    let game = SweepGame::new(board);
    let view = render_player_view(&game, false);
    let header = view.lines().next().unwrap();
    let labels: Vec<&str> = header.split_whitespace().collect();
    assert_eq!(labels.len(), 30);
    assert!(labels.iter().all(|l| l.chars().all(|c| c.is_ascii_uppercase())));
    assert_eq!(labels[25], "Z");
    assert_eq!(labels[26], "AA");
    assert_eq!(labels[29], "AD");
}

#[test]
fn test_very_wide_board_renders() {
    let board = Board::with_mines(2, 200, [Cell::new(1, 199)]).unwrap();
    let mut game = SweepGame::new(board);
    game.reveal(Cell::new(0, 0)).unwrap();
    let view = render_player_view(&game, true);
    let lines: Vec<&str> = view.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].split_whitespace().last(), Some("GR"));
    assert_eq!(lines[0].len(), lines[1].len());
    assert_eq!(lines[2].split_whitespace().last(), Some("X"));
}
