//! Player trait and implementations
//!
//! A player decides what the local side does; the engine decides whether it
//! is allowed and talks to the opponent.
//! - RandomPlayer: fires at uniformly random untried cells
//! - CliPlayer: reads targets from a line-oriented input such as stdin

use rand::rngs::SmallRng;

use crate::board::{Board, ShotRecord};
use crate::common::TurnError;
use crate::config::{Fleet, BOARD_SIZE};
use crate::engine::{EndReason, Exchange, LocalAction};
use crate::placer;

/// Interface implemented by different player types.
pub trait Player: Send {
    /// Lay out the fleet on an empty board. Random by default.
    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board<BOARD_SIZE>, fleet: &Fleet) {
        placer::place_fleet(board, fleet, rng);
    }

    /// Choose what to do on our turn, given the shots fired so far.
    fn next_action(&mut self, rng: &mut SmallRng, shots: &ShotRecord<BOARD_SIZE>) -> LocalAction;

    /// The last action was refused locally; `next_action` will be asked again.
    fn rejected(&mut self, _err: TurnError) {}

    /// A shot and its answer went through.
    fn on_exchange(&mut self, _exchange: Exchange) {}

    /// The game is over.
    fn on_end(&mut self, _reason: EndReason) {}
}

pub mod cli;
pub mod random;

pub use cli::CliPlayer;
pub use random::RandomPlayer;
