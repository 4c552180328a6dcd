//! Valid grid sizes.

use crate::constants::GRID_COLUMNS;
use crate::error::{GraphicError, Result};

/// The fixed set of grid sizes a container can take, one to six rows of nine slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rows {
    Minimal,
    Small,
    Medium,
    Large,
    ExtraLarge,
    Full,
}

impl Rows {
    /// Every valid size, smallest first.
    pub const ALL: [Rows; 6] = [
        Rows::Minimal,
        Rows::Small,
        Rows::Medium,
        Rows::Large,
        Rows::ExtraLarge,
        Rows::Full,
    ];

    /// Number of rows in the grid
    #[must_use]
    pub fn count(self) -> usize {
        match self {
            Self::Minimal => 1,
            Self::Small => 2,
            Self::Medium => 3,
            Self::Large => 4,
            Self::ExtraLarge => 5,
            Self::Full => 6,
        }
    }

    /// Number of slots in the grid
    #[must_use]
    pub fn slots(self) -> usize {
        self.count() * GRID_COLUMNS
    }

    /// Look up the size holding exactly `slots` slots.
    pub fn from_slots(slots: usize) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|rows| rows.slots() == slots)
            .ok_or(GraphicError::InvalidSize(slots))
    }

    /// The next larger size, if any
    #[must_use]
    pub fn grow(self) -> Option<Self> {
        Self::ALL.get(self.count()).copied()
    }

    /// The next smaller size, if any
    #[must_use]
    pub fn shrink(self) -> Option<Self> {
        self.count().checked_sub(2).map(|index| Self::ALL[index])
    }
}

impl Default for Rows {
    fn default() -> Self {
        Self::Medium
    }
}
