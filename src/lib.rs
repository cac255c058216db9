mod board;
mod common;
mod config;
pub mod engine;
pub mod local;
mod logging;
mod placer;
pub mod player;
pub mod protocol;
pub mod session;
mod ship;
pub mod transport;

pub use board::*;
pub use common::*;
pub use config::*;
pub use engine::{
    EndReason, Exchange, LocalAction, Role, SessionState, StandardEngine, Turn, TurnEngine,
};
pub use local::LocalGame;
pub use logging::{init_logging, parse_level, LOG_ENV};
pub use placer::place_fleet;
pub use player::{CliPlayer, Player, RandomPlayer};
pub use protocol::{decode, encode, DecodeError, Message};
pub use session::Session;
pub use ship::*;
pub use transport::in_memory::InMemoryTransport;
pub use transport::tcp::TcpTransport;
pub use transport::{ChannelError, LineChannel, Transport, TransportError};
