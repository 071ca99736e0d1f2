//! Stateless rendering for fading tic-tac-toe.

use super::layout::BoardLayout;
use crate::widgets::{button, centered_text, fill};
use fading_tictactoe::{FadingGame, LineKind, Player, Position, Square, WinLine};
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    symbols::Marker,
    widgets::canvas::{Canvas, Circle, Context, Line, Rectangle},
};
use std::time::Duration;

const BG_COLOR: Color = Color::Rgb(28, 170, 156);
const LINE_COLOR: Color = Color::Rgb(23, 145, 135);
const X_COLOR: Color = Color::Rgb(84, 84, 84);
const O_COLOR: Color = Color::Rgb(242, 235, 211);
const CURSOR_COLOR: Color = Color::Yellow;

/// Margin between a mark and its cell edge, in cell units.
const MARK_MARGIN: f64 = 0.2;

/// What the board should show this frame.
pub struct BoardView<'a> {
    /// Game to draw.
    pub game: &'a FadingGame,
    /// Keyboard cursor.
    pub cursor: Position,
    /// Whether the fading mark is in its hidden blink phase.
    pub fading_hidden: bool,
}

/// Whether the fading mark is hidden at `elapsed`, alternating every `interval`.
pub fn blink_hidden(elapsed: Duration, interval: Duration) -> bool {
    let interval = interval.as_millis().max(1);
    (elapsed.as_millis() / interval) % 2 == 0
}

/// Draws the whole tic-tac-toe screen.
pub fn draw(frame: &mut Frame, view: &BoardView<'_>) {
    let layout = BoardLayout::new(frame.area());

    fill(frame, layout.header, LINE_COLOR);
    let status_row = ratatui::layout::Rect {
        y: layout.header.y + layout.header.height / 2,
        height: 1,
        ..layout.header
    };
    centered_text(
        frame,
        status_row,
        &view.game.status_text(),
        Style::new()
            .fg(Color::White)
            .bg(LINE_COLOR)
            .add_modifier(Modifier::BOLD),
    );

    if !layout.board.is_empty() {
        let canvas = Canvas::default()
            .background_color(BG_COLOR)
            .marker(Marker::Braille)
            .x_bounds([0.0, 3.0])
            .y_bounds([0.0, 3.0])
            .paint(|ctx| paint_board(ctx, view));
        frame.render_widget(canvas, layout.board);
    }

    if view.game.is_over() {
        button(frame, layout.restart_button, "Play again", false);
    }

    centered_text(
        frame,
        layout.footer,
        "Click or arrows+Enter to place | R: Restart | Esc/Q: Quit",
        Style::new().fg(Color::DarkGray),
    );
}

fn paint_board(ctx: &mut Context<'_>, view: &BoardView<'_>) {
    for i in 1..3 {
        let at = f64::from(i);
        ctx.draw(&Line::new(at, 0.0, at, 3.0, LINE_COLOR));
        ctx.draw(&Line::new(0.0, at, 3.0, at, LINE_COLOR));
    }
    ctx.layer();

    let fading = view.game.fading_position();
    for pos in Position::ALL {
        if view.fading_hidden && fading == Some(pos) {
            continue;
        }
        match view.game.board().get(pos) {
            Square::Occupied(Player::X) => draw_x(ctx, pos),
            Square::Occupied(Player::O) => draw_o(ctx, pos),
            Square::Empty => {}
        }
    }

    if !view.game.is_over() {
        let (x, y) = cell_origin(view.cursor);
        ctx.draw(&Rectangle {
            x: x + 0.05,
            y: y + 0.05,
            width: 0.9,
            height: 0.9,
            color: CURSOR_COLOR,
        });
    }

    if let Some(win) = view.game.win() {
        ctx.layer();
        let color = match win.player {
            Player::X => X_COLOR,
            Player::O => O_COLOR,
        };
        let (x1, y1, x2, y2) = win_line_ends(win.line);
        ctx.draw(&Line::new(x1, y1, x2, y2, color));
    }
}

/// Lower-left corner of a cell in canvas units (y grows upward).
fn cell_origin(pos: Position) -> (f64, f64) {
    (pos.col() as f64, (2 - pos.row()) as f64)
}

fn draw_x(ctx: &mut Context<'_>, pos: Position) {
    let (x, y) = cell_origin(pos);
    let (lo, hi) = (MARK_MARGIN, 1.0 - MARK_MARGIN);
    ctx.draw(&Line::new(x + lo, y + hi, x + hi, y + lo, X_COLOR));
    ctx.draw(&Line::new(x + lo, y + lo, x + hi, y + hi, X_COLOR));
}

fn draw_o(ctx: &mut Context<'_>, pos: Position) {
    let (x, y) = cell_origin(pos);
    ctx.draw(&Circle {
        x: x + 0.5,
        y: y + 0.5,
        radius: 0.5 - MARK_MARGIN,
        color: O_COLOR,
    });
}

/// End points of the stroke drawn through a winning line.
fn win_line_ends(line: WinLine) -> (f64, f64, f64, f64) {
    let (lo, hi) = (0.05, 2.95);
    match (line.kind, line.index) {
        (LineKind::Row, r) => {
            let y = 2.5 - r as f64;
            (lo, y, hi, y)
        }
        (LineKind::Column, c) => {
            let x = c as f64 + 0.5;
            (x, lo, x, hi)
        }
        (LineKind::Diagonal, 0) => (lo, hi, hi, lo),
        (LineKind::Diagonal, _) => (hi, hi, lo, lo),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blink_phases() {
        let interval = Duration::from_millis(400);
        assert!(blink_hidden(Duration::from_millis(0), interval));
        assert!(blink_hidden(Duration::from_millis(399), interval));
        assert!(!blink_hidden(Duration::from_millis(400), interval));
        assert!(blink_hidden(Duration::from_millis(800), interval));
    }

    #[test]
    fn test_win_line_ends() {
        let row0 = win_line_ends(WinLine::new(LineKind::Row, 0));
        assert_eq!(row0.1, 2.5);
        let col2 = win_line_ends(WinLine::new(LineKind::Column, 2));
        assert_eq!(col2.0, 2.5);
    }
}
