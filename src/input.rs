//! Input events the games react to.
//!
//! Raw crossterm events are translated into a small tagged union so screens
//! match on game-level intent instead of terminal details.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Keys with a meaning in at least one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Enter or space.
    Confirm,
    /// Escape.
    Escape,
    /// `r`.
    Restart,
    /// `q` or Ctrl-C.
    Quit,
    /// A digit 1-9.
    Digit(u8),
}

/// Scroll wheel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Wheel moved away from the user.
    Up,
    /// Wheel moved towards the user.
    Down,
}

/// An input event, already filtered to what the games care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Left button pressed at a terminal cell.
    PointerDown {
        /// Terminal column.
        column: u16,
        /// Terminal row.
        row: u16,
    },
    /// The pointer moved to a terminal cell, no button held.
    PointerMoved {
        /// Terminal column.
        column: u16,
        /// Terminal row.
        row: u16,
    },
    /// A key was pressed.
    Key(GameKey),
    /// The wheel scrolled.
    Scroll(ScrollDirection),
    /// The terminal changed size.
    Resize,
}

impl InputEvent {
    /// Translates a crossterm event, dropping anything the games ignore.
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) => Self::from_key(key),
            Event::Mouse(mouse) => Self::from_mouse(mouse),
            Event::Resize(..) => Some(Self::Resize),
            _ => None,
        }
    }

    fn from_key(key: KeyEvent) -> Option<Self> {
        // Skip key release events (crossterm fires both press and release).
        if key.kind == KeyEventKind::Release {
            return None;
        }
        let game_key = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => GameKey::Quit,
            KeyCode::Up => GameKey::Up,
            KeyCode::Down => GameKey::Down,
            KeyCode::Left => GameKey::Left,
            KeyCode::Right => GameKey::Right,
            KeyCode::Enter | KeyCode::Char(' ') => GameKey::Confirm,
            KeyCode::Esc => GameKey::Escape,
            KeyCode::Char('r') | KeyCode::Char('R') => GameKey::Restart,
            KeyCode::Char('q') | KeyCode::Char('Q') => GameKey::Quit,
            KeyCode::Char(c @ '1'..='9') => GameKey::Digit(c as u8 - b'0'),
            _ => return None,
        };
        Some(Self::Key(game_key))
    }

    fn from_mouse(mouse: MouseEvent) -> Option<Self> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Self::PointerDown {
                column: mouse.column,
                row: mouse.row,
            }),
            MouseEventKind::Moved => Some(Self::PointerMoved {
                column: mouse.column,
                row: mouse.row,
            }),
            MouseEventKind::ScrollUp => Some(Self::Scroll(ScrollDirection::Up)),
            MouseEventKind::ScrollDown => Some(Self::Scroll(ScrollDirection::Down)),
            _ => None,
        }
    }
}
