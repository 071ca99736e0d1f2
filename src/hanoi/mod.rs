//! Terminal front end for Tower of Hanoi.

mod layout;
mod ui;

pub use layout::HanoiLayout;
pub use ui::disk_color;

use crate::input::{GameKey, InputEvent, ScrollDirection};
use crate::screen::{Flow, Screen};
use crate::widgets::hit;
use ratatui::{Frame, layout::Rect};
use std::time::Duration;
use tower_of_hanoi::{Command, DiskCount, GameState, HanoiGame, Peg};
use tracing::{debug, instrument};

/// Tower of Hanoi screen.
#[derive(Debug, Default)]
pub struct HanoiScreen {
    game: HanoiGame,
    pointer: Option<(u16, u16)>,
}

impl HanoiScreen {
    /// Creates a screen on the start page with `selection` preselected.
    #[instrument]
    pub fn new(selection: DiskCount) -> Self {
        Self {
            game: HanoiGame::with_selection(selection),
            pointer: None,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &HanoiGame {
        &self.game
    }

    /// Maps an input event to a command for the current state.
    pub fn command_for(&self, event: InputEvent, area: Rect) -> Option<Command> {
        match self.game.state() {
            GameState::Start => match event {
                InputEvent::Key(GameKey::Up) | InputEvent::Scroll(ScrollDirection::Up) => {
                    Some(Command::IncreaseDisks)
                }
                InputEvent::Key(GameKey::Down) | InputEvent::Scroll(ScrollDirection::Down) => {
                    Some(Command::DecreaseDisks)
                }
                InputEvent::Key(GameKey::Confirm) => Some(Command::Confirm),
                _ => None,
            },
            GameState::Playing => match event {
                InputEvent::Key(GameKey::Escape) => Some(Command::ToggleMenu),
                InputEvent::Key(GameKey::Digit(d)) => {
                    usize::from(d)
                        .checked_sub(1)
                        .and_then(Peg::from_index)
                        .map(Command::SelectPeg)
                }
                InputEvent::PointerDown { column, row } => {
                    let layout = HanoiLayout::new(area);
                    if layout.on_menu_button(column, row) {
                        Some(Command::ToggleMenu)
                    } else {
                        layout.peg_at(column).map(Command::SelectPeg)
                    }
                }
                _ => None,
            },
            GameState::Menu => match event {
                InputEvent::Key(GameKey::Escape) => Some(Command::ToggleMenu),
                InputEvent::Key(GameKey::Restart) => Some(Command::Restart),
                InputEvent::PointerDown { column, row } => {
                    let layout = HanoiLayout::new(area);
                    if hit(layout.restart_button, column, row) {
                        Some(Command::Restart)
                    } else if hit(layout.previous_button, column, row) {
                        Some(Command::PreviousLevel)
                    } else if hit(layout.resume_button, column, row) {
                        Some(Command::Resume)
                    } else {
                        None
                    }
                }
                _ => None,
            },
            GameState::Won => match event {
                InputEvent::Key(GameKey::Confirm) => Some(Command::NextLevel),
                InputEvent::PointerDown { column, row }
                    if hit(HanoiLayout::new(area).next_button, column, row) =>
                {
                    Some(Command::NextLevel)
                }
                _ => None,
            },
        }
    }
}

impl Screen for HanoiScreen {
    fn handle(&mut self, event: InputEvent, area: Rect) -> Flow {
        match event {
            InputEvent::Key(GameKey::Quit) => return Flow::Quit,
            InputEvent::PointerDown { column, row } | InputEvent::PointerMoved { column, row } => {
                self.pointer = Some((column, row));
            }
            _ => {}
        }
        if let Some(command) = self.command_for(event, area) {
            let changed = self.game.handle(command);
            debug!(?command, changed, state = %self.game.state(), "Command applied");
        }
        Flow::Continue
    }

    fn render(&self, frame: &mut Frame, _elapsed: Duration) {
        ui::draw(frame, &self.game, self.pointer);
    }
}
