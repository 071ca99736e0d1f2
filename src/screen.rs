//! Screen trait and the frame loop that drives it.

use crate::input::InputEvent;
use crate::settings::Settings;
use crate::terminal::TerminalSession;
use anyhow::Result;
use crossterm::event;
use ratatui::{Frame, layout::Rect};
use std::time::{Duration, Instant};
use tracing::{info, instrument, trace};

/// Whether the frame loop keeps going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// A game screen: owns its state, renders it and reacts to input.
pub trait Screen {
    /// Handles one input event. `area` is the full terminal area, the same
    /// rectangle [`Screen::render`] last drew into.
    fn handle(&mut self, event: InputEvent, area: Rect) -> Flow;

    /// Draws the current state. `elapsed` is the time since the loop started
    /// and drives animations.
    fn render(&self, frame: &mut Frame, elapsed: Duration);
}

/// Runs draw, poll and dispatch at the configured frame rate until the
/// screen asks to quit.
#[instrument(skip_all)]
pub fn run<S: Screen>(session: &mut TerminalSession, screen: &mut S, settings: &Settings) -> Result<()> {
    let started = Instant::now();
    let frame_budget = settings.frame_duration();
    info!(frame_ms = frame_budget.as_millis() as u64, "Starting frame loop");

    loop {
        let terminal = session.terminal();
        terminal.draw(|f| screen.render(f, started.elapsed()))?;
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);

        let deadline = Instant::now() + frame_budget;
        while let Some(timeout) = deadline.checked_duration_since(Instant::now()) {
            if !event::poll(timeout)? {
                break;
            }
            let Some(input) = InputEvent::from_crossterm(event::read()?) else {
                continue;
            };
            trace!(?input, "Input");
            if screen.handle(input, area) == Flow::Quit {
                info!("Quit requested");
                return Ok(());
            }
        }
    }
}
