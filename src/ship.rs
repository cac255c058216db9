//! Ship footprints: which cells a ship covers for a given origin and orientation.

use core::fmt;

use crate::common::{Coord, PlacementError};
use crate::config::ShipType;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Contiguous run of cells covered by one ship on an N×N board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Footprint<const N: usize> {
    ship_type: ShipType,
    origin: Coord,
    orientation: Orientation,
}

impl<const N: usize> Footprint<N> {
    /// Lay `ship_type` out from `origin` towards increasing column
    /// (horizontal) or increasing row (vertical).
    pub fn new(
        ship_type: ShipType,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<Self, PlacementError> {
        let len = ship_type.length();
        if len == 0 || !origin.in_bounds(N) {
            return Err(PlacementError::OutOfBounds);
        }
        let last = match orientation {
            Orientation::Horizontal => origin.col.checked_add(len - 1),
            Orientation::Vertical => origin.row.checked_add(len - 1),
        };
        match last {
            Some(last) if last < N => Ok(Self {
                ship_type,
                origin,
                orientation,
            }),
            _ => Err(PlacementError::OutOfBounds),
        }
    }

    /// Every covered cell, starting at the origin.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.ship_type.length()).map(move |i| match self.orientation {
            Orientation::Horizontal => Coord::new(self.origin.row, self.origin.col + i),
            Orientation::Vertical => Coord::new(self.origin.row + i, self.origin.col),
        })
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl<const N: usize> fmt::Debug for Footprint<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Footprint {{ name: \"{}\", origin: {}, orientation: {:?}, length: {} }}",
            self.ship_type.name(),
            self.origin,
            self.orientation,
            self.ship_type.length(),
        )
    }
}
