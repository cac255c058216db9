use core::fmt;

use crate::engine::Role;

pub const BOARD_SIZE: usize = 10;

/// Longest protocol line accepted before the delimiter, in bytes.
pub const DEFAULT_MAX_LINE: usize = 128;

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

pub const STANDARD_SHIPS: [ShipType; 5] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Reasons a fleet cannot be used on a given board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FleetError {
    #[error("fleet has no ships")]
    Empty,
    #[error("{name} has length {length}, which does not fit a {size}x{size} board")]
    ShipTooLong {
        name: &'static str,
        length: usize,
        size: usize,
    },
    #[error("fleet covers {cells} cells, more than half of a {size}x{size} board")]
    TooDense { cells: usize, size: usize },
}

/// Ordered ship list shared by placement and win detection.
///
/// Built once at session setup and handed to whoever needs it; there is no
/// process-wide ship table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<ShipType>,
}

impl Fleet {
    pub fn new(ships: Vec<ShipType>) -> Self {
        Self { ships }
    }

    /// Carrier, Battleship, Cruiser, Submarine, Destroyer.
    pub fn standard() -> Self {
        Self::new(STANDARD_SHIPS.to_vec())
    }

    pub fn ships(&self) -> &[ShipType] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Sum of all ship lengths; the number of hits needed to win.
    pub fn total_cells(&self) -> usize {
        self.ships.iter().map(ShipType::length).sum()
    }

    /// Check that the fleet can be placed on an `N`×`N` board.
    pub fn validate<const N: usize>(&self) -> Result<(), FleetError> {
        if self.ships.is_empty() {
            return Err(FleetError::Empty);
        }
        for ship in &self.ships {
            if ship.length() == 0 || ship.length() > N {
                return Err(FleetError::ShipTooLong {
                    name: ship.name(),
                    length: ship.length(),
                    size: N,
                });
            }
        }
        let cells = self.total_cells();
        if cells * 2 > N * N {
            return Err(FleetError::TooDense { cells, size: N });
        }
        Ok(())
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::standard()
    }
}

/// How the process runs, resolved from its positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// No arguments: single player against the computer.
    Local,
    /// One argument: accept exactly one peer on this port.
    Listen { port: u16 },
    /// Two arguments: connect to a listening peer.
    Connect { address: String, port: u16 },
}

impl Mode {
    pub fn from_args(target: Option<&str>, port: Option<&str>) -> anyhow::Result<Self> {
        match (target, port) {
            (None, None) => Ok(Mode::Local),
            (Some(port), None) => Ok(Mode::Listen {
                port: parse_port(port)?,
            }),
            (Some(address), Some(port)) => Ok(Mode::Connect {
                address: address.to_string(),
                port: parse_port(port)?,
            }),
            (None, Some(_)) => Err(anyhow::anyhow!("a port was given without an address")),
        }
    }

    /// The role this mode plays in a networked session. The accepting side
    /// always fires first.
    pub fn role(&self) -> Option<Role> {
        match self {
            Mode::Local => None,
            Mode::Listen { .. } => Some(Role::Initiator),
            Mode::Connect { .. } => Some(Role::Responder),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Local => write!(f, "single-player"),
            Mode::Listen { port } => write!(f, "listening on port {}", port),
            Mode::Connect { address, port } => write!(f, "connecting to {}:{}", address, port),
        }
    }
}

fn parse_port(raw: &str) -> anyhow::Result<u16> {
    match raw.parse::<u16>() {
        Ok(0) | Err(_) => Err(anyhow::anyhow!("Invalid port: {}", raw)),
        Ok(port) => Ok(port),
    }
}

/// Everything a networked session needs besides its transport and board.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub role: Role,
    pub fleet: Fleet,
}

impl SessionConfig {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            fleet: Fleet::standard(),
        }
    }

    pub fn with_fleet(mut self, fleet: Fleet) -> Self {
        self.fleet = fleet;
        self
    }
}
