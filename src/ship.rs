//! Ship placement geometry and per-ship damage tracking.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::common::{BoardError, LabelError};
use crate::config::{BOARD_SIZE, MAX_SHIP_LENGTH, MIN_SHIP_LENGTH};
use crate::coord::Coord;

/// Direction a ship grows from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Along a row, increasing column number.
    Row,
    /// Down a column, increasing row letter.
    Column,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Row => write!(f, "R"),
            Orientation::Column => write!(f, "C"),
        }
    }
}

impl FromStr for Orientation {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("r") || s.eq_ignore_ascii_case("row") {
            Ok(Orientation::Row)
        } else if s.eq_ignore_ascii_case("c") || s.eq_ignore_ascii_case("column") {
            Ok(Orientation::Column)
        } else {
            Err(LabelError::UnknownOrientation)
        }
    }
}

/// A placed ship: its footprint and the cells not yet hit.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    anchor: Coord,
    orientation: Orientation,
    length: usize,
    afloat: Vec<Coord>,
}

impl Ship {
    /// Lay out a ship of `length` from `anchor` in `orientation`.
    /// Fails if the length is out of range or the run leaves the grid.
    pub fn new(length: usize, anchor: Coord, orientation: Orientation) -> Result<Self, BoardError> {
        if !(MIN_SHIP_LENGTH..=MAX_SHIP_LENGTH).contains(&length) {
            return Err(BoardError::InvalidLength(length));
        }
        let (row, col) = (anchor.row(), anchor.col());
        let end = match orientation {
            Orientation::Row => col + length,
            Orientation::Column => row + length,
        };
        if end > BOARD_SIZE as usize {
            return Err(BoardError::ShipOutOfBounds);
        }

        let mut afloat = Vec::with_capacity(length);
        for i in 0..length {
            let (r, c) = match orientation {
                Orientation::Row => (row, col + i),
                Orientation::Column => (row + i, col),
            };
            afloat.push(Coord::new(r, c).map_err(|_| BoardError::ShipOutOfBounds)?);
        }
        Ok(Ship {
            anchor,
            orientation,
            length,
            afloat,
        })
    }

    /// Cell closest to `A1`.
    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Length as placed, independent of damage.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Unhit cells in growth order.
    pub fn afloat(&self) -> &[Coord] {
        &self.afloat
    }

    /// Whether `target` is one of the unhit cells.
    pub fn contains(&self, target: Coord) -> bool {
        self.afloat.contains(&target)
    }

    /// Remove `target` from the unhit cells. Returns `true` if it was there.
    pub fn strike(&mut self, target: Coord) -> bool {
        match self.afloat.iter().position(|&c| c == target) {
            Some(idx) => {
                self.afloat.remove(idx);
                true
            }
            None => false,
        }
    }

    /// A ship is sunk once every cell has been struck.
    pub fn is_sunk(&self) -> bool {
        self.afloat.is_empty()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ anchor: {}, orientation: {:?}, length: {}, afloat: {} }}",
            self.anchor,
            self.orientation,
            self.length,
            self.afloat.len(),
        )
    }
}
