/// Default hidden board height.
pub const DEFAULT_HEIGHT: usize = 8;
/// Default hidden board width.
pub const DEFAULT_WIDTH: usize = 8;
/// Default number of mines placed on a new board.
pub const DEFAULT_MINES: usize = 8;
/// Side length of the tic-tac-toe grid.
pub const GRID_SIZE: usize = 3;
/// Most neighbours a cell can have.
pub const MAX_NEIGHBORS: usize = 8;
