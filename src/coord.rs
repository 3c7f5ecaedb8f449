//! Grid coordinates and their `"B7"` text form.
//!
//! Rows are lettered `A`..`J` top to bottom and columns numbered `1`..`10`
//! left to right. Internally both are zero-based indices, and a `Coord`
//! can only be constructed inside the grid.

use core::fmt;
use core::str::FromStr;

use crate::common::CoordError;
use crate::config::BOARD_SIZE;

/// A validated cell position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Build a coordinate from zero-based row and column indices.
    pub fn new(row: usize, col: usize) -> Result<Self, CoordError> {
        if row >= BOARD_SIZE as usize || col >= BOARD_SIZE as usize {
            return Err(CoordError::IndexOutOfBounds { row, col });
        }
        Ok(Coord {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Zero-based row index (`A` is 0).
    pub fn row(&self) -> usize {
        self.row as usize
    }

    /// Zero-based column index (`1` is 0).
    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Row letter, `A`..`J`.
    pub fn row_letter(&self) -> char {
        (b'A' + self.row) as char
    }

    /// One-based column number, `1`..`10`.
    pub fn column_number(&self) -> u8 {
        self.col + 1
    }

    /// Every cell of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord { row, col }))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.column_number())
    }
}

impl FromStr for Coord {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let row_ch = chars.next().ok_or(CoordError::Empty)?;
        let upper = row_ch.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return Err(CoordError::InvalidRow(row_ch));
        }
        let row = upper as u8 - b'A';
        if row >= BOARD_SIZE {
            return Err(CoordError::InvalidRow(row_ch));
        }

        let digits = chars.as_str();
        if digits.is_empty()
            || !digits.bytes().all(|b| b.is_ascii_digit())
            || (digits.len() > 1 && digits.starts_with('0'))
        {
            return Err(CoordError::MalformedColumn);
        }
        let number: u32 = digits.parse().map_err(|_| CoordError::MalformedColumn)?;
        if number == 0 || number > BOARD_SIZE as u32 {
            return Err(CoordError::ColumnOutOfRange(number));
        }
        Ok(Coord {
            row,
            col: number as u8 - 1,
        })
    }
}

impl TryFrom<&str> for Coord {
    type Error = CoordError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(feature = "std")]
impl serde::Serialize for Coord {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "std")]
impl<'de> serde::Deserialize<'de> for Coord {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
