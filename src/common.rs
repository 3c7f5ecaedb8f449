//! Common types for the rules engine: shot reports and error enums.

use crate::config::{BOARD_SIZE, MAX_SHIP_LENGTH, MIN_SHIP_LENGTH};
use crate::game::{Outcome, Player};

/// Result of an attack resolved against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Shot {
    /// Target cell held no unhit ship segment.
    Miss,
    /// Target cell held a ship segment; the ship still has unhit cells.
    Hit,
    /// Target cell held the last unhit segment of a ship of `length`.
    Sunk { length: usize },
}

impl Shot {
    /// `true` for `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, Shot::Miss)
    }
}

impl core::fmt::Display for Shot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Shot::Miss => write!(f, "miss"),
            Shot::Hit => write!(f, "hit"),
            Shot::Sunk { length } => write!(f, "sunk a ship of length {}", length),
        }
    }
}

/// Errors returned when a coordinate cannot be built or parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordError {
    /// Input was empty.
    Empty,
    /// First character is not a row letter A-J.
    InvalidRow(char),
    /// Column part is missing, not a plain decimal, or has a leading zero.
    MalformedColumn,
    /// Column number outside 1-10.
    ColumnOutOfRange(u32),
    /// Zero-based index outside the grid.
    IndexOutOfBounds { row: usize, col: usize },
}

impl core::fmt::Display for CoordError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CoordError::Empty => write!(f, "Empty coordinate"),
            CoordError::InvalidRow(ch) => {
                write!(f, "Invalid row '{}' - must be a letter A-J", ch)
            }
            CoordError::MalformedColumn => {
                write!(f, "Malformed column - must be a number 1-{}", BOARD_SIZE)
            }
            CoordError::ColumnOutOfRange(n) => {
                write!(f, "Column {} out of bounds - must be 1-{}", n, BOARD_SIZE)
            }
            CoordError::IndexOutOfBounds { row, col } => {
                write!(f, "Index out of bounds: row={}, col={}", row, col)
            }
        }
    }
}

/// Errors returned when a player or orientation label is not recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelError {
    UnknownPlayer,
    UnknownOrientation,
}

impl core::fmt::Display for LabelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LabelError::UnknownPlayer => write!(f, "Unknown player - use 'first' or 'second'"),
            LabelError::UnknownOrientation => {
                write!(f, "Unknown orientation - use 'R' (row) or 'C' (column)")
            }
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Ship length outside the accepted range.
    InvalidLength(usize),
    /// Ship would extend past the edge of the grid.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Random placement found no free run of cells.
    UnableToPlaceShip,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidLength(len) => write!(
                f,
                "Ship length {} is invalid - must be {}-{}",
                len, MIN_SHIP_LENGTH, MAX_SHIP_LENGTH
            ),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

/// Errors returned by Match operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    /// The match already has a winner.
    MatchOver(Outcome),
    /// Attack issued by the player who does not hold the turn.
    NotYourTurn { attacker: Player, expected: Player },
}

impl core::fmt::Display for MatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatchError::MatchOver(outcome) => write!(f, "Match is over: {}", outcome),
            MatchError::NotYourTurn { attacker, expected } => {
                write!(f, "Not {}'s turn - {} to move", attacker, expected)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoordError {}
#[cfg(feature = "std")]
impl std::error::Error for LabelError {}
#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for MatchError {}
