//! Core domain types for Tower of Hanoi.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the three pegs. Disks start on [`Peg::Left`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Peg {
    /// Peg 0, where every game starts.
    #[display("left peg")]
    Left,
    /// Peg 1.
    #[display("middle peg")]
    Middle,
    /// Peg 2.
    #[display("right peg")]
    Right,
}

impl Peg {
    /// All pegs, left to right.
    pub const ALL: [Peg; 3] = [Peg::Left, Peg::Middle, Peg::Right];

    /// Index 0-2.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Peg at index 0-2.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// A disk, identified by its size (1 is the smallest).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("disk {}", _0)]
pub struct Disk(u8);

impl Disk {
    /// Creates a disk of the given size.
    pub fn new(size: u8) -> Self {
        Self(size)
    }

    /// Size of the disk.
    pub fn size(self) -> u8 {
        self.0
    }
}

/// Number of disks in play, always within [`DiskCount::MIN`]..=[`DiskCount::MAX`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(from = "u8", into = "u8")]
pub struct DiskCount(u8);

impl DiskCount {
    /// Fewest disks a level can have.
    pub const MIN: u8 = 3;
    /// Most disks a level can have.
    pub const MAX: u8 = 10;
    /// Selection shown on the start screen.
    pub const DEFAULT: DiskCount = DiskCount(4);

    /// Creates a disk count, clamped to the allowed range.
    #[instrument]
    pub fn new(count: u8) -> Self {
        Self(count.clamp(Self::MIN, Self::MAX))
    }

    /// The count as a number.
    pub fn get(self) -> u8 {
        self.0
    }

    /// One more disk, or `None` at the maximum.
    pub fn next(self) -> Option<Self> {
        (self.0 < Self::MAX).then(|| Self(self.0 + 1))
    }

    /// One fewer disk, or `None` at the minimum.
    pub fn previous(self) -> Option<Self> {
        (self.0 > Self::MIN).then(|| Self(self.0 - 1))
    }

    /// One more disk, saturating at the maximum.
    pub fn saturating_next(self) -> Self {
        self.next().unwrap_or(self)
    }

    /// One fewer disk, saturating at the minimum.
    pub fn saturating_previous(self) -> Self {
        self.previous().unwrap_or(self)
    }

    /// Fewest moves that solve this level, `2^n - 1`.
    pub fn min_moves(self) -> u32 {
        (1u32 << self.0) - 1
    }
}

impl Default for DiskCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u8> for DiskCount {
    fn from(count: u8) -> Self {
        Self::new(count)
    }
}

impl From<DiskCount> for u8 {
    fn from(count: DiskCount) -> Self {
        count.0
    }
}
