//! Common types: coordinates, shot outcomes and the errors raised before
//! anything reaches the wire.

use core::fmt;

/// Zero-indexed board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// `true` if both components are below `size`.
    pub fn in_bounds(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row, col)
    }
}

/// Result of a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Outcome {
    Hit,
    Miss,
}

/// Errors returned by `Board::place`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// Some covered cell lies outside the grid.
    #[error("ship placement is out of bounds")]
    OutOfBounds,
    /// Some covered cell is already occupied.
    #[error("ship placement overlaps with another ship")]
    Overlap,
}

/// Local input rejected before any network effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("it is not the local side's turn")]
    NotYourTurn,
    #[error("target {0} is outside the board")]
    OutOfBounds(Coord),
    #[error("already fired at {0}")]
    AlreadyFired(Coord),
}
