#![cfg(feature = "std")]
//! Line-oriented command scripts for driving a match without a UI.
//!
//! ```text
//! # comments and blank lines are skipped
//! place first 3 C3 C
//! attack second C3
//! ```

use anyhow::{bail, Context};
use std::fmt;
use std::vec::Vec;

use crate::common::{BoardError, MatchError, Shot};
use crate::coord::Coord;
use crate::game::{Match, Player};
use crate::ship::Orientation;

/// A single parsed script line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place {
        player: Player,
        length: usize,
        anchor: Coord,
        orientation: Orientation,
    },
    Attack {
        player: Player,
        target: Coord,
    },
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Place {
                player,
                length,
                anchor,
                orientation,
            } => write!(f, "place {} {} {} {}", player, length, anchor, orientation),
            Command::Attack { player, target } => write!(f, "attack {} {}", player, target),
        }
    }
}

/// What applying a command did to the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Placed,
    PlacementRejected(BoardError),
    Attacked(Shot),
    AttackRejected(MatchError),
}

impl Step {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Step::Placed | Step::Attacked(_))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Placed => write!(f, "placed"),
            Step::PlacementRejected(e) => write!(f, "rejected: {}", e),
            Step::Attacked(shot) => write!(f, "{}", shot),
            Step::AttackRejected(e) => write!(f, "rejected: {}", e),
        }
    }
}

/// A command together with its source line and result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub line: usize,
    pub command: Command,
    pub step: Step,
}

fn parse_player(token: &str) -> anyhow::Result<Player> {
    token
        .parse()
        .with_context(|| format!("bad player '{}'", token))
}

fn parse_coord(token: &str) -> anyhow::Result<Coord> {
    token
        .parse()
        .with_context(|| format!("bad coordinate '{}'", token))
}

/// Parse one line. Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_command(line: &str) -> anyhow::Result<Option<Command>> {
    let line = line.split('#').next().unwrap_or_default().trim();
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((verb, args)) = parts.split_first() else {
        return Ok(None);
    };

    let verb = verb.to_ascii_lowercase();
    let command = match (verb.as_str(), args) {
        ("place", [player, length, anchor, orientation]) => Command::Place {
            player: parse_player(player)?,
            length: length
                .parse::<usize>()
                .with_context(|| format!("bad ship length '{}'", length))?,
            anchor: parse_coord(anchor)?,
            orientation: orientation
                .parse::<Orientation>()
                .with_context(|| format!("bad orientation '{}'", orientation))?,
        },
        ("attack" | "fire", [player, target]) => Command::Attack {
            player: parse_player(player)?,
            target: parse_coord(target)?,
        },
        ("place", _) => bail!(
            "'place' expects <player> <length> <anchor> <orientation>, got {} arguments",
            args.len()
        ),
        ("attack" | "fire", _) => {
            bail!("'{}' expects <player> <target>, got {} arguments", verb, args.len())
        }
        _ => bail!("unknown command '{}'", verb),
    };
    Ok(Some(command))
}

/// Apply a parsed command to `game`.
pub fn apply(game: &mut Match, command: Command) -> Step {
    match command {
        Command::Place {
            player,
            length,
            anchor,
            orientation,
        } => match game.place_ship(player, length, anchor, orientation) {
            Ok(()) => Step::Placed,
            Err(e) => Step::PlacementRejected(e),
        },
        Command::Attack { player, target } => match game.attack(player, target) {
            Ok(shot) => Step::Attacked(shot),
            Err(e) => Step::AttackRejected(e),
        },
    }
}

/// Run every command in `text` against `game`.
///
/// Rule violations are reported as rejected steps. A malformed line stops
/// the run with an error naming the line; commands before it stay applied.
pub fn run_script(game: &mut Match, text: &str) -> anyhow::Result<Vec<StepReport>> {
    let mut reports = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let Some(command) = parse_command(raw).with_context(|| format!("line {}", line))? else {
            continue;
        };
        let step = apply(game, command);
        log::debug!("line {}: {} -> {}", line, command, step);
        reports.push(StepReport {
            line,
            command,
            step,
        });
    }
    Ok(reports)
}
