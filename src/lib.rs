//! Parlor games - terminal front ends for small puzzle games
//!
//! This library hosts the shared terminal plumbing and one screen per game.
//! Game rules live in their own crates and know nothing about the terminal.
//!
//! # Architecture
//!
//! - **Screen**: a game's state, its renderer and its input handling
//! - **Input**: crossterm events narrowed to what the games react to
//! - **Settings**: frame rate, blink interval and log location from TOML
//! - **Games**: fading tic-tac-toe and Tower of Hanoi
//!
//! # Example
//!
//! ```no_run
//! use parlor_games::{Settings, hanoi::HanoiScreen, logging, screen, terminal::TerminalSession};
//! use tower_of_hanoi::DiskCount;
//!
//! # fn example() -> anyhow::Result<()> {
//! let settings = Settings::load()?;
//! logging::init("hanoi", &settings)?;
//! let mut session = TerminalSession::enter()?;
//! let mut game = HanoiScreen::new(DiskCount::new(*settings.initial_disk_count()));
//! screen::run(&mut session, &mut game, &settings)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hanoi;
pub mod input;
pub mod logging;
pub mod screen;
pub mod settings;
pub mod terminal;
pub mod tictactoe;
pub mod widgets;

pub use error::ConfigError;
pub use input::{GameKey, InputEvent, ScrollDirection};
pub use screen::{Flow, Screen};
pub use settings::Settings;
