//! Fading tic-tac-toe game logic.
//!
//! A 3x3 tic-tac-toe variant where each player keeps at most three marks.
//! When a player places a fourth, their oldest mark vanishes first, so the
//! board never fills up and the game only ends with a win.
//!
//! This crate is pure logic with no rendering dependency.

#![warn(missing_docs)]

mod action;
mod game;
pub mod invariants;
mod position;
mod queue;
mod rules;
mod types;

pub use action::{MoveError, Placement};
pub use game::FadingGame;
pub use position::Position;
pub use queue::MoveQueue;
pub use rules::{LINES, LineKind, Win, WinLine, check_winner};
pub use types::{Board, Player, Square};
