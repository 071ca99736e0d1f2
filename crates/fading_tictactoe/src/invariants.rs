//! Invariants of the fading rule.
//!
//! These hold after every placement and are checked by tests and by a debug
//! assertion inside [`FadingGame::place`](crate::FadingGame::place).

use super::{FadingGame, MoveQueue, Player, Square};
use strum::IntoEnumIterator;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariant: no player has more than three queued marks.
pub struct QueueBoundedInvariant;

impl Invariant<FadingGame> for QueueBoundedInvariant {
    fn holds(game: &FadingGame) -> bool {
        Player::iter().all(|p| game.queue(p).len() <= MoveQueue::CAPACITY)
    }

    fn description() -> &'static str {
        "Each move queue holds at most three marks"
    }
}

/// Invariant: the board holds exactly the queued marks.
///
/// Every queued cell carries its owner's mark and every other cell is empty.
pub struct BoardMatchesQueuesInvariant;

impl Invariant<FadingGame> for BoardMatchesQueuesInvariant {
    fn holds(game: &FadingGame) -> bool {
        let board = game.board();
        Player::iter().all(|player| {
            let queue = game.queue(player);
            queue
                .iter()
                .all(|pos| board.get(pos) == Square::Occupied(player))
                && board.marks_of(player).all(|pos| queue.contains(pos))
        })
    }

    fn description() -> &'static str {
        "Board cells match the union of both move queues"
    }
}

/// Checks every fading tic-tac-toe invariant.
pub fn check_all(game: &FadingGame) -> Result<(), Vec<InvariantViolation>> {
    let mut violations = Vec::new();

    if !QueueBoundedInvariant::holds(game) {
        violations.push(InvariantViolation::new(QueueBoundedInvariant::description()));
    }

    if !BoardMatchesQueuesInvariant::holds(game) {
        violations.push(InvariantViolation::new(
            BoardMatchesQueuesInvariant::description(),
        ));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
