//! Single-player game against a computer that fires at random.
//!
//! No transport is involved: the computer's board sits next to the player's
//! and the loser is found by inspecting the grids directly.

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::seq::IteratorRandom;

use crate::board::{Board, CellState, Grid, ShotRecord};
use crate::common::Coord;
use crate::config::{Fleet, FleetError, BOARD_SIZE};
use crate::engine::{EndReason, Exchange, LocalAction};
use crate::placer;
use crate::player::Player;

pub struct LocalGame {
    fleet: Fleet,
    player_board: Board<BOARD_SIZE>,
    player_shots: ShotRecord<BOARD_SIZE>,
    computer_board: Board<BOARD_SIZE>,
}

impl LocalGame {
    /// Place the player's fleet through `player` and the computer's at random.
    pub fn setup(
        player: &mut dyn Player,
        fleet: Fleet,
        rng: &mut SmallRng,
    ) -> Result<Self, FleetError> {
        fleet.validate::<BOARD_SIZE>()?;
        let mut player_board = Board::new();
        player.place_fleet(rng, &mut player_board, &fleet);
        let mut computer_board = Board::new();
        placer::place_fleet(&mut computer_board, &fleet, rng);
        Ok(Self {
            fleet,
            player_board,
            player_shots: ShotRecord::new(),
            computer_board,
        })
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn player_board(&self) -> &Board<BOARD_SIZE> {
        &self.player_board
    }

    pub fn player_shots(&self) -> &ShotRecord<BOARD_SIZE> {
        &self.player_shots
    }

    pub fn computer_board(&self) -> &Board<BOARD_SIZE> {
        &self.computer_board
    }

    /// Alternate player and computer shots until one fleet is gone or the
    /// player quits. The player always shoots first.
    pub fn run(&mut self, player: &mut dyn Player, rng: &mut SmallRng) -> EndReason {
        let reason = loop {
            let at = match player.next_action(rng, &self.player_shots) {
                LocalAction::Quit => break EndReason::LocalQuit,
                LocalAction::Fire(at) => at,
            };
            if let Err(e) = self.player_shots.check(at) {
                player.rejected(e);
                continue;
            }
            let outcome = self.computer_board.apply_incoming_shot(at);
            // Checked above; cannot fail.
            let _ = self.player_shots.record(at, outcome);
            player.on_exchange(Exchange::Fired { at, outcome });
            if self.computer_board.all_destroyed() {
                break EndReason::LocalWin;
            }

            let Some(target) = self.computer_target(rng) else {
                break EndReason::LocalWin;
            };
            let outcome = self.player_board.apply_incoming_shot(target);
            debug!("computer fired at {}: {:?}", target, outcome);
            player.on_exchange(Exchange::Received { at: target, outcome });
            if self.player_board.all_destroyed() {
                break EndReason::LocalLoss;
            }
        };
        info!("single-player game ended: {}", reason);
        player.on_end(reason);
        reason
    }

    /// A cell of the player's board the computer has not fired at yet.
    fn computer_target(&self, rng: &mut SmallRng) -> Option<Coord> {
        Grid::<BOARD_SIZE>::coords()
            .filter(|&c| {
                !matches!(
                    self.player_board.cell(c),
                    Some(CellState::Hit) | Some(CellState::Miss)
                )
            })
            .choose(rng)
    }
}
