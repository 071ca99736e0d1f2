//! Outcome and error types for placing marks.

use super::{Player, Position, Win};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// What happened when a mark was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Placement {
    /// The player who placed the mark.
    player: Player,
    /// Where the mark went.
    position: Position,
    /// The player's oldest mark, removed to make room.
    evicted: Option<Position>,
    /// Set when this placement completed a line.
    win: Option<Win>,
}

impl Placement {
    pub(crate) fn new(
        player: Player,
        position: Position,
        evicted: Option<Position>,
        win: Option<Win>,
    ) -> Self {
        Self {
            player,
            position,
            evicted,
            win,
        }
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)?;
        if let Some(evicted) = self.evicted {
            write!(f, " (faded {})", evicted)?;
        }
        Ok(())
    }
}

/// Why a placement was rejected. The game state is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The coordinates lie outside the 3x3 board.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
