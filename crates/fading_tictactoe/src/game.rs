//! Game engine for fading tic-tac-toe.
//!
//! Each player keeps at most three marks on the board. Placing a fourth
//! removes that player's oldest mark first, so the board never fills and the
//! game only ends with a win.

use super::{Board, MoveError, MoveQueue, Placement, Player, Position, Square, Win, check_winner};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FadingGame {
    board: Board,
    queues: [MoveQueue; 2],
    to_move: Player,
    win: Option<Win>,
}

impl FadingGame {
    /// Creates a game where `starter` moves first.
    #[instrument]
    pub fn new(starter: Player) -> Self {
        Self {
            board: Board::new(),
            queues: [MoveQueue::new(), MoveQueue::new()],
            to_move: starter,
            win: None,
        }
    }

    /// Creates a game with a randomly chosen starting player.
    #[instrument(skip(rng))]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(random_player(rng))
    }

    /// Places the current player's mark.
    ///
    /// If the player already has three marks, the oldest one is cleared
    /// before the new one is placed. The turn passes to the opponent unless
    /// the placement wins.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once a line is complete and
    /// [`MoveError::SquareOccupied`] for an occupied cell; neither changes
    /// the game.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<Placement, MoveError> {
        if self.win.is_some() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.to_move;
        let evicted = self.queues[player.slot()].push(pos);
        if let Some(old) = evicted {
            debug!(faded = %old, "Oldest mark removed");
            self.board.clear(old);
        }
        self.board.set(pos, Square::Occupied(player));
        debug!(board = %self.board.display(), "Board after placement");

        self.win = check_winner(&self.board);
        match self.win {
            Some(win) => info!(winner = %win.player, line = %win.line, "Game won"),
            None => self.to_move = player.opponent(),
        }

        debug_assert!(
            crate::invariants::check_all(self).is_ok(),
            "fading tic-tac-toe invariants violated after placement"
        );

        Ok(Placement::new(player, pos, evicted, self.win))
    }

    /// Same as [`FadingGame::place`], addressed by row and column.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for coordinates outside the board,
    /// otherwise the same errors as [`FadingGame::place`].
    pub fn place_at(&mut self, row: usize, col: usize) -> Result<Placement, MoveError> {
        let pos = Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.place(pos)
    }

    /// Clears everything and picks a random starting player.
    #[instrument(skip(self, rng))]
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.reset_with(random_player(rng));
    }

    /// Clears everything with `starter` to move first.
    #[instrument(skip(self))]
    pub fn reset_with(&mut self, starter: Player) {
        info!("Resetting game");
        *self = Self::new(starter);
    }

    /// Cell that will vanish on the current player's next placement.
    ///
    /// Only set while the game is running and the current player's queue is
    /// full; front ends use it to blink the mark.
    pub fn fading_position(&self) -> Option<Position> {
        let queue = self.queue(self.to_move);
        if self.win.is_none() && queue.is_full() {
            queue.front()
        } else {
            None
        }
    }

    /// Status line shown above the board.
    pub fn status_text(&self) -> String {
        match self.win {
            Some(win) => format!("Player {} wins!", win.player),
            None => format!(
                "Player {}'s turn (marks {}/{})",
                self.to_move,
                self.queue(self.to_move).len(),
                MoveQueue::CAPACITY
            ),
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the given player's move queue.
    pub fn queue(&self, player: Player) -> &MoveQueue {
        &self.queues[player.slot()]
    }

    /// Returns the player to move (the winner once the game is over).
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The completed line, if any.
    pub fn win(&self) -> Option<Win> {
        self.win
    }

    /// The winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        self.win.map(|w| w.player)
    }

    /// True once a line is complete.
    pub fn is_over(&self) -> bool {
        self.win.is_some()
    }
}

fn random_player<R: Rng + ?Sized>(rng: &mut R) -> Player {
    if rng.gen_bool(0.5) { Player::X } else { Player::O }
}
