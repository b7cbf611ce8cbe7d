//! Positional handles into an ordered container.

use serde::{Deserialize, Serialize};

/// Index of a record inside a catalog.
///
/// Records are identified by where they sit, not by value. A `Position` is
/// only meaningful against the catalog state it was obtained from: reordering
/// or removing records makes previously returned positions stale.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(usize);

impl Position {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl core::fmt::Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<usize> for Position {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl From<Position> for usize {
    fn from(value: Position) -> Self {
        value.0
    }
}
