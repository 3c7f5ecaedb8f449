//! One player's grid and ship bookkeeping.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{BoardError, Shot};
use crate::config::{BOARD_SIZE, MAX_SHIP_LENGTH, MIN_SHIP_LENGTH, PLACEMENT_ATTEMPTS};
use crate::coord::Coord;
use crate::ship::{Orientation, Ship};

const N: usize = BOARD_SIZE as usize;

/// State of a single grid cell. A struck segment reverts to `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Occupied,
}

/// Grid plus the list of ships that still have unhit cells.
///
/// Every `Occupied` cell belongs to exactly one ship in `ships`, and every
/// unhit cell of every ship is `Occupied`. Sunk ships are dropped, so the
/// number of ships afloat is the length of `ships`.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Board {
    grid: [[Cell; N]; N],
    ships: Vec<Ship>,
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new() -> Self {
        Self::default()
    }

    /// State of the cell at `at`.
    pub fn cell(&self, at: Coord) -> Cell {
        self.grid[at.row()][at.col()]
    }

    /// Ships with at least one unhit cell, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships still afloat; zero means this player is eliminated.
    pub fn ships_afloat(&self) -> usize {
        self.ships.len()
    }

    fn fits(&self, ship: &Ship) -> bool {
        ship.afloat().iter().all(|&c| self.cell(c) == Cell::Empty)
    }

    /// Place a ship of `length` starting at `anchor`.
    ///
    /// The whole run is validated before anything is written, so a rejected
    /// placement leaves the board untouched.
    pub fn place(
        &mut self,
        length: usize,
        anchor: Coord,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let ship = Ship::new(length, anchor, orientation)?;
        if !self.fits(&ship) {
            return Err(BoardError::ShipOverlaps);
        }
        for &c in ship.afloat() {
            self.grid[c.row()][c.col()] = Cell::Occupied;
        }
        log::debug!("placed {:?}", ship);
        self.ships.push(ship);
        Ok(())
    }

    /// Find a legal anchor and orientation for a ship of `length` without
    /// placing it.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<(Coord, Orientation), BoardError> {
        if !(MIN_SHIP_LENGTH..=MAX_SHIP_LENGTH).contains(&length) {
            return Err(BoardError::InvalidLength(length));
        }
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Row
            } else {
                Orientation::Column
            };
            let (max_r, max_c) = match orientation {
                Orientation::Row => (N - 1, N - length),
                Orientation::Column => (N - length, N - 1),
            };
            let r = rng.random_range(0..=max_r);
            let c = rng.random_range(0..=max_c);
            let anchor = Coord::new(r, c).map_err(|_| BoardError::ShipOutOfBounds)?;
            let ship = Ship::new(length, anchor, orientation)?;
            if self.fits(&ship) {
                return Ok((anchor, orientation));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Resolve an incoming attack at `target`.
    ///
    /// Only an `Occupied` cell changes state; misses and repeat shots at an
    /// already struck cell leave the board as it was.
    pub fn resolve_attack(&mut self, target: Coord) -> Shot {
        if self.cell(target) != Cell::Occupied {
            return Shot::Miss;
        }
        self.grid[target.row()][target.col()] = Cell::Empty;

        let idx = self.ships.iter().position(|s| s.contains(target));
        debug_assert!(idx.is_some(), "occupied cell {} belongs to no ship", target);
        let Some(idx) = idx else {
            return Shot::Hit;
        };
        self.ships[idx].strike(target);
        if self.ships[idx].is_sunk() {
            let ship = self.ships.remove(idx);
            log::debug!("sank ship anchored at {}", ship.anchor());
            Shot::Sunk {
                length: ship.length(),
            }
        } else {
            Shot::Hit
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{ occupied: {}, ships: {:?} }}",
            self.grid.iter().flatten().filter(|&&c| c == Cell::Occupied).count(),
            self.ships
        )
    }
}
