//! Tower of Hanoi in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use parlor_games::{Settings, hanoi::HanoiScreen, logging, screen, terminal::TerminalSession};
use tower_of_hanoi::DiskCount;
use tracing::info;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    let log_file = logging::init("hanoi", &settings)?;
    info!(log_file = %log_file.display(), ?settings, "Starting Tower of Hanoi");

    let mut session = TerminalSession::enter()?;
    let mut game = HanoiScreen::new(DiskCount::new(*settings.initial_disk_count()));
    screen::run(&mut session, &mut game, &settings)?;

    info!(moves = game.game().tower().move_count(), "Goodbye");
    Ok(())
}
