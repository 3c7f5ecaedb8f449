//! Match orchestration: two boards, turn order and the win latch.

use core::fmt;
use core::str::FromStr;

use crate::board::Board;
use crate::common::{BoardError, LabelError, MatchError, Shot};
use crate::coord::Coord;
use crate::ship::Orientation;

/// One of the two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// The other side.
    pub fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::First => write!(f, "first"),
            Player::Second => write!(f, "second"),
        }
    }
}

impl FromStr for Player {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("first") {
            Ok(Player::First)
        } else if s.eq_ignore_ascii_case("second") {
            Ok(Player::Second)
        } else {
            Err(LabelError::UnknownPlayer)
        }
    }
}

/// Overall state of a match. Both won states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Outcome {
    #[default]
    InProgress,
    FirstWon,
    SecondWon,
}

impl Outcome {
    /// Winning outcome for `player`.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::First => Outcome::FirstWon,
            Player::Second => Outcome::SecondWon,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::InProgress => None,
            Outcome::FirstWon => Some(Player::First),
            Outcome::SecondWon => Some(Player::Second),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "IN_PROGRESS"),
            Outcome::FirstWon => write!(f, "FIRST_WON"),
            Outcome::SecondWon => write!(f, "SECOND_WON"),
        }
    }
}

/// A two-player match.
///
/// Placement is accepted at any time, including after attacks have started.
/// A player with no ships afloat loses on the next accepted attack against
/// them, even if they never placed a ship.
///
/// `attack` is a multi-step update; share a `Match` across threads only
/// behind a lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    boards: [Board; 2],
    turn: Player,
    outcome: Outcome,
    shots: usize,
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}

impl Match {
    /// Create a match with two empty boards and `first` to move.
    pub fn new() -> Self {
        Self {
            boards: [Board::new(), Board::new()],
            turn: Player::First,
            outcome: Outcome::InProgress,
            shots: 0,
        }
    }

    /// Read-only view of `player`'s board.
    pub fn board(&self, player: Player) -> &Board {
        &self.boards[player.index()]
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn winner(&self) -> Option<Player> {
        self.outcome.winner()
    }

    /// Player allowed to make the next attack.
    pub fn current_turn(&self) -> Player {
        self.turn
    }

    /// Ships `player` still has afloat.
    pub fn ships_remaining(&self, player: Player) -> usize {
        self.board(player).ships_afloat()
    }

    /// Number of attacks accepted so far.
    pub fn shots_taken(&self) -> usize {
        self.shots
    }

    /// Place a ship on `player`'s board.
    pub fn place_ship(
        &mut self,
        player: Player,
        length: usize,
        anchor: Coord,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        self.boards[player.index()].place(length, anchor, orientation)
    }

    /// Fire at `target` on the opponent's board.
    ///
    /// On success the turn passes to the opponent, and if the opponent has no
    /// ships left the attacker wins. Rejected attacks change nothing.
    pub fn attack(&mut self, attacker: Player, target: Coord) -> Result<Shot, MatchError> {
        if self.outcome.is_terminal() {
            return Err(MatchError::MatchOver(self.outcome));
        }
        if attacker != self.turn {
            return Err(MatchError::NotYourTurn {
                attacker,
                expected: self.turn,
            });
        }

        let defender = attacker.opponent();
        let shot = self.boards[defender.index()].resolve_attack(target);
        self.shots += 1;
        self.turn = defender;
        log::debug!("{} fired at {}: {}", attacker, target, shot);

        if self.boards[defender.index()].ships_afloat() == 0 {
            self.outcome = Outcome::won_by(attacker);
            log::info!("{} wins after {} shots", attacker, self.shots);
        }
        Ok(shot)
    }
}
