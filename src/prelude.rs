//! Commonly used types for ease of import.

pub use crate::{Board, Coord, Match, Orientation, Outcome, Player, Shot};

#[cfg(feature = "std")]
pub use crate::script::{run_script, Step, StepReport};
#[cfg(feature = "std")]
pub use crate::sim::{simulate, PlayoutReport};
