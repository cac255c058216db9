//! Board state: fixed-size cell grids for a side's own ships and for the
//! shots it has fired.

use core::fmt;

use crate::common::{Coord, Outcome, PlacementError, TurnError};
use crate::config::ShipType;
use crate::ship::{Footprint, Orientation};

/// State of a single cell.
///
/// Transitions only move forward: `Empty -> Occupied` during placement,
/// `Occupied -> Hit` and `Empty -> Miss` during play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Empty,
    Occupied,
    Hit,
    Miss,
}

/// Owned N×N matrix of cell states, indexed by row then column.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid<const N: usize> {
    cells: [[CellState; N]; N],
}

impl<const N: usize> Grid<N> {
    pub fn new() -> Self {
        Self {
            cells: [[CellState::Empty; N]; N],
        }
    }

    /// Cell at `at`, or `None` when out of bounds.
    pub fn get(&self, at: Coord) -> Option<CellState> {
        self.cells.get(at.row)?.get(at.col).copied()
    }

    fn set(&mut self, at: Coord, state: CellState) {
        self.cells[at.row][at.col] = state;
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == state)
            .count()
    }

    /// All coordinates in row-major order.
    pub fn coords() -> impl Iterator<Item = Coord> {
        (0..N).flat_map(|row| (0..N).map(move |col| Coord::new(row, col)))
    }
}

impl<const N: usize> Default for Grid<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for Grid<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let ch = match cell {
                    CellState::Empty => '.',
                    CellState::Occupied => 'S',
                    CellState::Hit => 'X',
                    CellState::Miss => 'o',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// One side's own ship layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Board<const N: usize> {
    grid: Grid<N>,
}

impl<const N: usize> Board<N> {
    /// Create an empty board (no ships placed).
    pub fn new() -> Self {
        Self { grid: Grid::new() }
    }

    /// Read-only view of the cells.
    pub fn grid(&self) -> &Grid<N> {
        &self.grid
    }

    pub fn cell(&self, at: Coord) -> Option<CellState> {
        self.grid.get(at)
    }

    /// Place `ship` from `origin` in `orientation`. The board is untouched on failure.
    pub fn place(
        &mut self,
        ship: ShipType,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<(), PlacementError> {
        let footprint = Footprint::<N>::new(ship, origin, orientation)?;
        if footprint
            .cells()
            .any(|c| self.grid.get(c) != Some(CellState::Empty))
        {
            return Err(PlacementError::Overlap);
        }
        for c in footprint.cells() {
            self.grid.set(c, CellState::Occupied);
        }
        Ok(())
    }

    /// Resolve a shot fired by the opponent.
    ///
    /// The caller guarantees `at` is in bounds. A cell that is already `Hit`
    /// stays `Hit` and reports a miss.
    pub fn apply_incoming_shot(&mut self, at: Coord) -> Outcome {
        match self.grid.get(at) {
            Some(CellState::Occupied) => {
                self.grid.set(at, CellState::Hit);
                Outcome::Hit
            }
            Some(CellState::Empty) => {
                self.grid.set(at, CellState::Miss);
                Outcome::Miss
            }
            _ => Outcome::Miss,
        }
    }

    /// `true` when no cell is still `Occupied`.
    pub fn all_destroyed(&self) -> bool {
        self.grid.count(CellState::Occupied) == 0
    }

    /// Cells still holding an undamaged ship segment.
    pub fn occupied_cells(&self) -> usize {
        self.grid.count(CellState::Occupied)
    }
}

/// Outcomes of the shots this side has fired at the opponent.
///
/// Never contains `Occupied`; each coordinate is recorded at most once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShotRecord<const N: usize> {
    grid: Grid<N>,
}

impl<const N: usize> ShotRecord<N> {
    pub fn new() -> Self {
        Self { grid: Grid::new() }
    }

    pub fn grid(&self) -> &Grid<N> {
        &self.grid
    }

    pub fn get(&self, at: Coord) -> Option<CellState> {
        self.grid.get(at)
    }

    /// Check that `at` is a legal new target.
    pub fn check(&self, at: Coord) -> Result<(), TurnError> {
        match self.grid.get(at) {
            None => Err(TurnError::OutOfBounds(at)),
            Some(CellState::Empty) => Ok(()),
            Some(_) => Err(TurnError::AlreadyFired(at)),
        }
    }

    /// Record the outcome of a shot at a previously untried coordinate.
    pub fn record(&mut self, at: Coord, outcome: Outcome) -> Result<(), TurnError> {
        self.check(at)?;
        let state = match outcome {
            Outcome::Hit => CellState::Hit,
            Outcome::Miss => CellState::Miss,
        };
        self.grid.set(at, state);
        Ok(())
    }

    pub fn hits(&self) -> usize {
        self.grid.count(CellState::Hit)
    }

    pub fn misses(&self) -> usize {
        self.grid.count(CellState::Miss)
    }

    /// Total shots recorded.
    pub fn fired(&self) -> usize {
        self.hits() + self.misses()
    }

    /// Coordinates not yet fired at, in row-major order.
    pub fn untried(&self) -> impl Iterator<Item = Coord> + '_ {
        Grid::<N>::coords().filter(move |&c| self.grid.get(c) == Some(CellState::Empty))
    }
}
