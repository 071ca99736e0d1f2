//! Bounded move history that drives the fading rule.

use super::Position;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{instrument, trace};

/// FIFO of one player's marks, holding at most [`MoveQueue::CAPACITY`] entries.
///
/// Pushing onto a full queue evicts the oldest entry and hands it back so the
/// caller can clear that cell from the board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveQueue {
    entries: VecDeque<Position>,
}

impl MoveQueue {
    /// Maximum number of marks a player keeps on the board.
    pub const CAPACITY: usize = 3;

    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(Self::CAPACITY),
        }
    }

    /// Appends a position, returning the evicted oldest entry if the queue was full.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub fn push(&mut self, pos: Position) -> Option<Position> {
        let evicted = if self.is_full() {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(pos);
        trace!(?evicted, "Queued mark");
        evicted
    }

    /// Oldest entry, the next one to vanish.
    pub fn front(&self) -> Option<Position> {
        self.entries.front().copied()
    }

    /// True when the next push will evict.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= Self::CAPACITY
    }

    /// Number of queued marks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no marks are queued.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the position is queued.
    pub fn contains(&self, pos: Position) -> bool {
        self.entries.contains(&pos)
    }

    /// Iterates oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.entries.iter().copied()
    }
}
