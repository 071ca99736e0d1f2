//! Tower of Hanoi game logic.
//!
//! [`Tower`] holds the three pegs and enforces the move rules through a
//! pick-up/drop interaction: lift the top disk of a peg, then drop it on
//! another. [`HanoiGame`] wraps a tower in the start/playing/menu/won state
//! machine, including level progression between 3 and 10 disks.
//!
//! This crate is pure logic with no rendering dependency.

#![warn(missing_docs)]

mod game;
mod tower;
mod types;

pub use game::{Command, GameState, HanoiGame};
pub use tower::{DropOutcome, HeldDisk, Tower};
pub use types::{Disk, DiskCount, Peg};
