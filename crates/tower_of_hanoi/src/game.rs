//! View-state machine wrapping a [`Tower`].
//!
//! ```text
//! Start --Confirm--> Playing --ToggleMenu--> Menu --Resume/ToggleMenu--> Playing
//!                       |                      |--Restart------------> Playing (same level)
//!                       |                      `--PreviousLevel------> Playing (one disk fewer)
//!                       `--solved--> Won --NextLevel--> Playing (one disk more)
//! ```

use super::{DiskCount, DropOutcome, Peg, Tower};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Which screen the game is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameState {
    /// Choosing the number of disks.
    Start,
    /// Moving disks.
    Playing,
    /// Pause menu over the board.
    Menu,
    /// Success overlay over the solved board.
    Won,
}

/// A request from the player.
///
/// Commands that make no sense in the current state are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Add a disk to the start-screen selection.
    IncreaseDisks,
    /// Remove a disk from the start-screen selection.
    DecreaseDisks,
    /// Start playing with the selected disk count.
    Confirm,
    /// Open the menu while playing, close it while in the menu.
    ToggleMenu,
    /// Close the menu.
    Resume,
    /// Start the current level over.
    Restart,
    /// Drop to a level with one fewer disk.
    PreviousLevel,
    /// Advance to a level with one more disk.
    NextLevel,
    /// Pick up from or drop onto a peg.
    SelectPeg(Peg),
}

/// Tower of Hanoi session: start screen, levels, menu and success screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HanoiGame {
    state: GameState,
    selection: DiskCount,
    tower: Tower,
}

impl HanoiGame {
    /// Creates a session on the start screen with the default selection.
    pub fn new() -> Self {
        Self::with_selection(DiskCount::DEFAULT)
    }

    /// Creates a session on the start screen with `selection` preselected.
    #[instrument]
    pub fn with_selection(selection: DiskCount) -> Self {
        Self {
            state: GameState::Start,
            selection,
            tower: Tower::new(selection),
        }
    }

    /// Applies a command, returning whether anything changed.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn handle(&mut self, command: Command) -> bool {
        let changed = match self.state {
            GameState::Start => self.handle_start(command),
            GameState::Playing => self.handle_playing(command),
            GameState::Menu => self.handle_menu(command),
            GameState::Won => self.handle_won(command),
        };
        if !changed {
            debug!(?command, "Command ignored");
        }
        changed
    }

    fn handle_start(&mut self, command: Command) -> bool {
        match command {
            Command::IncreaseDisks => self.set_selection(self.selection.saturating_next()),
            Command::DecreaseDisks => self.set_selection(self.selection.saturating_previous()),
            Command::Confirm => {
                self.start_level(self.selection);
                true
            }
            _ => false,
        }
    }

    fn handle_playing(&mut self, command: Command) -> bool {
        match command {
            Command::ToggleMenu => {
                self.state = GameState::Menu;
                true
            }
            Command::SelectPeg(peg) => {
                let before = self.tower.held();
                let outcome = self.tower.select(peg);
                if matches!(outcome, Some(DropOutcome::Moved { .. })) && self.tower.is_solved() {
                    info!(
                        moves = self.tower.move_count(),
                        min_moves = self.tower.min_moves(),
                        "Level solved"
                    );
                    self.state = GameState::Won;
                }
                outcome.is_some() || before != self.tower.held()
            }
            _ => false,
        }
    }

    fn handle_menu(&mut self, command: Command) -> bool {
        match command {
            Command::Resume | Command::ToggleMenu => {
                self.state = GameState::Playing;
                true
            }
            Command::Restart => {
                self.start_level(self.tower.disk_count());
                true
            }
            Command::PreviousLevel => match self.tower.disk_count().previous() {
                Some(fewer) => {
                    self.start_level(fewer);
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    fn handle_won(&mut self, command: Command) -> bool {
        match command {
            Command::NextLevel => match self.tower.disk_count().next() {
                Some(more) => {
                    self.start_level(more);
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    fn set_selection(&mut self, selection: DiskCount) -> bool {
        let changed = selection != self.selection;
        self.selection = selection;
        changed
    }

    fn start_level(&mut self, disks: DiskCount) {
        info!(disks = disks.get(), "Starting level");
        self.selection = disks;
        self.tower = Tower::new(disks);
        self.state = GameState::Playing;
    }

    /// Current screen.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Disk count shown on the start screen.
    pub fn selection(&self) -> DiskCount {
        self.selection
    }

    /// The board of the current level.
    pub fn tower(&self) -> &Tower {
        &self.tower
    }
}

impl Default for HanoiGame {
    fn default() -> Self {
        Self::new()
    }
}
