//! Fading tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use parlor_games::{Settings, logging, screen, terminal::TerminalSession, tictactoe::TicTacToeScreen};
use tracing::info;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    let log_file = logging::init("tictactoe", &settings)?;
    info!(log_file = %log_file.display(), ?settings, "Starting fading tic-tac-toe");

    let mut session = TerminalSession::enter()?;
    let mut game = TicTacToeScreen::new(settings.blink_interval());
    screen::run(&mut session, &mut game, &settings)?;

    info!("Goodbye");
    Ok(())
}
