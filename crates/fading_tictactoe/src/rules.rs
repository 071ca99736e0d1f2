//! Win detection for fading tic-tac-toe.

use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Orientation of a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum LineKind {
    /// Horizontal line.
    #[display("row")]
    Row,
    /// Vertical line.
    #[display("column")]
    Column,
    /// Diagonal line; index 0 runs top-left to bottom-right, 1 top-right to bottom-left.
    #[display("diagonal")]
    Diagonal,
}

/// Which of the eight lines completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{kind} {index}")]
pub struct WinLine {
    /// Orientation.
    pub kind: LineKind,
    /// Row, column or diagonal number.
    pub index: usize,
}

impl WinLine {
    /// Creates a win line descriptor.
    pub fn new(kind: LineKind, index: usize) -> Self {
        Self { kind, index }
    }

    /// The three cells covered by this line.
    pub fn positions(&self) -> [Position; 3] {
        let at = |row: usize, col: usize| Position::ALL[row * 3 + col];
        match (self.kind, self.index) {
            (LineKind::Row, r) => [at(r, 0), at(r, 1), at(r, 2)],
            (LineKind::Column, c) => [at(0, c), at(1, c), at(2, c)],
            (LineKind::Diagonal, 0) => [at(0, 0), at(1, 1), at(2, 2)],
            (LineKind::Diagonal, _) => [at(0, 2), at(1, 1), at(2, 0)],
        }
    }
}

/// A completed line and its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    /// The player with three in a line.
    pub player: Player,
    /// The line itself.
    pub line: WinLine,
}

/// The eight lines in scan order: rows, columns, then both diagonals.
pub const LINES: [WinLine; 8] = [
    WinLine { kind: LineKind::Row, index: 0 },
    WinLine { kind: LineKind::Row, index: 1 },
    WinLine { kind: LineKind::Row, index: 2 },
    WinLine { kind: LineKind::Column, index: 0 },
    WinLine { kind: LineKind::Column, index: 1 },
    WinLine { kind: LineKind::Column, index: 2 },
    WinLine { kind: LineKind::Diagonal, index: 0 },
    WinLine { kind: LineKind::Diagonal, index: 1 },
];

/// Checks if there is a winner on the board.
///
/// Returns the first complete line in [`LINES`] order.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Win> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Square::Occupied(player)
                if board.get(b) == Square::Occupied(player)
                    && board.get(c) == Square::Occupied(player) =>
            {
                Some(Win { player, line })
            }
            _ => None,
        }
    })
}
