//! Terminal front end for fading tic-tac-toe.

mod layout;
mod ui;

pub use layout::BoardLayout;
pub use ui::blink_hidden;

use crate::input::{GameKey, InputEvent};
use crate::screen::{Flow, Screen};
use fading_tictactoe::{FadingGame, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Frame, layout::Rect};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Fading tic-tac-toe screen: the game, a keyboard cursor and the RNG that
/// picks who starts after each reset.
#[derive(Debug)]
pub struct TicTacToeScreen {
    game: FadingGame,
    cursor: Position,
    blink_interval: Duration,
    rng: StdRng,
}

impl TicTacToeScreen {
    /// Creates a screen with an entropy-seeded RNG.
    pub fn new(blink_interval: Duration) -> Self {
        Self::with_rng(blink_interval, StdRng::from_entropy())
    }

    /// Creates a screen with the given RNG, for reproducible starts.
    #[instrument(skip(rng))]
    pub fn with_rng(blink_interval: Duration, mut rng: StdRng) -> Self {
        let game = FadingGame::random(&mut rng);
        info!(starter = %game.to_move(), "New game");
        Self {
            game,
            cursor: Position::Center,
            blink_interval,
            rng,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &FadingGame {
        &self.game
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    fn place(&mut self, pos: Position) {
        match self.game.place(pos) {
            Ok(placement) => {
                debug!(%placement, "Mark placed");
                self.cursor = pos;
            }
            Err(e) => debug!(error = %e, "Placement rejected"),
        }
    }

    fn restart(&mut self) {
        self.game.reset(&mut self.rng);
        info!(starter = %self.game.to_move(), "Game restarted");
    }

    fn handle_key(&mut self, key: GameKey) -> Flow {
        match key {
            GameKey::Quit | GameKey::Escape => return Flow::Quit,
            GameKey::Restart => self.restart(),
            GameKey::Confirm if self.game.is_over() => self.restart(),
            GameKey::Confirm => self.place(self.cursor),
            GameKey::Up => self.cursor = self.cursor.offset(-1, 0),
            GameKey::Down => self.cursor = self.cursor.offset(1, 0),
            GameKey::Left => self.cursor = self.cursor.offset(0, -1),
            GameKey::Right => self.cursor = self.cursor.offset(0, 1),
            GameKey::Digit(d) => {
                if let Some(pos) = usize::from(d).checked_sub(1).and_then(Position::from_index) {
                    self.place(pos);
                }
            }
        }
        Flow::Continue
    }

    fn handle_pointer(&mut self, area: Rect, column: u16, row: u16) {
        let layout = BoardLayout::new(area);
        if self.game.is_over() {
            if crate::widgets::hit(layout.restart_button, column, row) {
                self.restart();
            }
        } else if let Some(pos) = layout.cell_at(column, row) {
            self.place(pos);
        }
    }
}

impl Screen for TicTacToeScreen {
    fn handle(&mut self, event: InputEvent, area: Rect) -> Flow {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::PointerDown { column, row } => {
                self.handle_pointer(area, column, row);
                Flow::Continue
            }
            InputEvent::PointerMoved { .. } | InputEvent::Scroll(_) | InputEvent::Resize => {
                Flow::Continue
            }
        }
    }

    fn render(&self, frame: &mut Frame, elapsed: Duration) {
        ui::draw(
            frame,
            &ui::BoardView {
                game: &self.game,
                cursor: self.cursor,
                fading_hidden: blink_hidden(elapsed, self.blink_interval),
            },
        );
    }
}
