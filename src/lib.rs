#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod coord;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
#[cfg(feature = "std")]
pub mod script;
mod ship;
#[cfg(feature = "std")]
pub mod sim;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use ship::*;
