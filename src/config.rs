/// Side length of the square grid.
pub const BOARD_SIZE: u8 = 10;

/// Shortest ship the board accepts.
pub const MIN_SHIP_LENGTH: usize = 2;
/// Longest ship the board accepts.
pub const MAX_SHIP_LENGTH: usize = BOARD_SIZE as usize;

/// Attempts made by `Board::random_placement` before giving up.
pub const PLACEMENT_ATTEMPTS: usize = 100;

/// Classic fleet lengths. Only the playout driver uses this; the board
/// accepts any number of ships of any legal length.
pub const CLASSIC_FLEET: [usize; 5] = [5, 4, 3, 3, 2];
