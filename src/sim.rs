#![cfg(feature = "std")]
//! Random playout: both sides place a fleet at random and fire through a
//! shuffled list of every cell until the match ends.

use rand::seq::SliceRandom;
use rand::Rng;
use std::vec::Vec;

use crate::common::BoardError;
use crate::coord::Coord;
use crate::game::{Match, Outcome, Player};

/// Summary of a finished playout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutReport {
    pub outcome: Outcome,
    pub shots: usize,
}

/// Place every length in `fleet` on `player`'s board at random.
pub fn place_fleet<R: Rng>(
    game: &mut Match,
    player: Player,
    fleet: &[usize],
    rng: &mut R,
) -> Result<(), BoardError> {
    for &length in fleet {
        let (anchor, orientation) = game.board(player).random_placement(rng, length)?;
        game.place_ship(player, length, anchor, orientation)?;
    }
    Ok(())
}

/// Play a full match with `fleet` on both sides.
pub fn simulate<R: Rng>(rng: &mut R, fleet: &[usize]) -> Result<PlayoutReport, BoardError> {
    let mut game = Match::new();
    place_fleet(&mut game, Player::First, fleet, rng)?;
    place_fleet(&mut game, Player::Second, fleet, rng)?;

    let mut targets: [Vec<Coord>; 2] = [Coord::all().collect(), Coord::all().collect()];
    for order in targets.iter_mut() {
        order.shuffle(rng);
    }

    while !game.outcome().is_terminal() {
        let attacker = game.current_turn();
        let queue = match attacker {
            Player::First => &mut targets[0],
            Player::Second => &mut targets[1],
        };
        // Each side runs out of cells only after sinking everything.
        let Some(target) = queue.pop() else {
            break;
        };
        if let Err(e) = game.attack(attacker, target) {
            log::warn!("playout attack rejected: {}", e);
            break;
        }
    }

    Ok(PlayoutReport {
        outcome: game.outcome(),
        shots: game.shots_taken(),
    })
}
