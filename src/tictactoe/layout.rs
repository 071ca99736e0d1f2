//! Screen geometry and hit-testing for the tic-tac-toe board.

use crate::widgets::{center_rect, hit};
use fading_tictactoe::Position;
use ratatui::layout::{Constraint, Layout, Rect};

/// Areas of the tic-tac-toe screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Status bar at the top.
    pub header: Rect,
    /// The 3x3 board.
    pub board: Rect,
    /// Key help at the bottom.
    pub footer: Rect,
    /// "Play again" button, shown once the game is over.
    pub restart_button: Rect,
}

impl BoardLayout {
    /// Splits the full terminal area.
    ///
    /// The board is twice as wide as it is tall so that cells look roughly
    /// square in a terminal font.
    pub fn new(area: Rect) -> Self {
        let [header, middle, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let side = middle.height.min(middle.width / 2);
        let board = center_rect(middle, side * 2, side);
        let restart_button = center_rect(board, 20, 3);

        Self {
            header,
            board,
            footer,
            restart_button,
        }
    }

    /// Board cell under the terminal cell at (`column`, `row`).
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        if !hit(self.board, column, row) {
            return None;
        }
        let col = usize::from(column - self.board.x) * 3 / usize::from(self.board.width);
        let row = usize::from(row - self.board.y) * 3 / usize::from(self.board.height);
        Position::from_row_col(row.min(2), col.min(2))
    }
}
