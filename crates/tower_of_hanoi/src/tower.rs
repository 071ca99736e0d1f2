//! Pegs, the held disk and the move rules.

use super::{Disk, DiskCount, Peg};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// A disk lifted off a peg and not yet placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct HeldDisk {
    /// The disk.
    disk: Disk,
    /// Peg it was lifted from; illegal drops return it here.
    source: Peg,
}

/// Result of dropping the held disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Nothing was held.
    NothingHeld,
    /// The disk moved to another peg and the move counted.
    Moved {
        /// The disk that moved.
        disk: Disk,
        /// Where it came from.
        from: Peg,
        /// Where it landed.
        to: Peg,
    },
    /// Same-peg or illegal drop; the disk went back to its source.
    Returned {
        /// The disk that went back.
        disk: Disk,
        /// The peg it returned to.
        to: Peg,
    },
}

/// The three pegs of one level, plus the held disk and move counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tower {
    disk_count: DiskCount,
    pegs: [Vec<Disk>; 3],
    held: Option<HeldDisk>,
    move_count: u32,
}

impl Tower {
    /// Creates a level with every disk stacked on the left peg.
    #[instrument]
    pub fn new(disk_count: DiskCount) -> Self {
        let start = (1..=disk_count.get()).rev().map(Disk::new).collect();
        Self {
            disk_count,
            pegs: [start, Vec::new(), Vec::new()],
            held: None,
            move_count: 0,
        }
    }

    /// Lifts the top disk of `peg`.
    ///
    /// Returns the lifted disk, or `None` when a disk is already held or the
    /// peg is empty; nothing changes in that case.
    #[instrument(skip(self))]
    pub fn pick_up(&mut self, peg: Peg) -> Option<Disk> {
        if self.held.is_some() {
            return None;
        }
        let disk = self.pegs[peg.index()].pop()?;
        trace!(%disk, "Picked up");
        self.held = Some(HeldDisk { disk, source: peg });
        Some(disk)
    }

    /// Drops the held disk on `peg`.
    ///
    /// The move is legal when `peg` differs from the source peg and is either
    /// empty or topped by a larger disk. Legal moves count; anything else puts
    /// the disk back on its source peg without counting.
    #[instrument(skip(self))]
    pub fn drop_on(&mut self, peg: Peg) -> DropOutcome {
        let Some(HeldDisk { disk, source }) = self.held.take() else {
            return DropOutcome::NothingHeld;
        };

        let fits = self.top(peg).is_none_or(|top| disk < top);
        if peg != source && fits {
            self.pegs[peg.index()].push(disk);
            self.move_count += 1;
            debug!(%disk, from = %source, to = %peg, moves = self.move_count, "Disk moved");
            DropOutcome::Moved {
                disk,
                from: source,
                to: peg,
            }
        } else {
            self.pegs[source.index()].push(disk);
            debug!(%disk, to = %source, "Disk returned");
            DropOutcome::Returned { disk, to: source }
        }
    }

    /// Picks up from `peg` when nothing is held, otherwise drops onto it.
    #[instrument(skip(self))]
    pub fn select(&mut self, peg: Peg) -> Option<DropOutcome> {
        if self.held.is_some() {
            Some(self.drop_on(peg))
        } else {
            self.pick_up(peg);
            None
        }
    }

    /// Moves the top disk of `from` onto `to` as one pick/drop pair.
    pub fn move_disk(&mut self, from: Peg, to: Peg) -> DropOutcome {
        if self.pick_up(from).is_none() {
            return DropOutcome::NothingHeld;
        }
        self.drop_on(to)
    }

    /// True when the middle or right peg holds every disk.
    pub fn is_solved(&self) -> bool {
        let n = usize::from(self.disk_count.get());
        self.pegs[Peg::Middle.index()].len() == n || self.pegs[Peg::Right.index()].len() == n
    }

    /// Every peg is strictly decreasing bottom-to-top.
    pub fn is_well_ordered(&self) -> bool {
        self.pegs
            .iter()
            .all(|peg| peg.windows(2).all(|pair| pair[0] > pair[1]))
    }

    /// Disks on `peg`, bottom first.
    pub fn disks(&self, peg: Peg) -> &[Disk] {
        &self.pegs[peg.index()]
    }

    /// Top disk of `peg`.
    pub fn top(&self, peg: Peg) -> Option<Disk> {
        self.pegs[peg.index()].last().copied()
    }

    /// The held disk, if any.
    pub fn held(&self) -> Option<HeldDisk> {
        self.held
    }

    /// Legal moves made so far.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Disks in this level.
    pub fn disk_count(&self) -> DiskCount {
        self.disk_count
    }

    /// Fewest moves that solve this level.
    pub fn min_moves(&self) -> u32 {
        self.disk_count.min_moves()
    }
}
