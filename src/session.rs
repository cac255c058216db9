use log::debug;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::config::{FleetError, SessionConfig, BOARD_SIZE};
use crate::engine::{EndReason, SessionState, StandardEngine};
use crate::player::Player;
use crate::transport::Transport;

/// One side of a networked game: a player choosing moves and an engine
/// carrying them out.
pub struct Session<T> {
    player: Box<dyn Player>,
    engine: StandardEngine<T>,
}

impl<T: Transport> Session<T> {
    pub fn new(player: Box<dyn Player>, engine: StandardEngine<T>) -> Self {
        Self { player, engine }
    }

    /// Let `player` lay out the fleet, then bind the board to `transport`.
    pub fn setup(
        mut player: Box<dyn Player>,
        config: SessionConfig,
        transport: T,
        rng: &mut SmallRng,
    ) -> Result<Self, FleetError> {
        config.fleet.validate::<BOARD_SIZE>()?;
        let mut board = Board::<BOARD_SIZE>::new();
        player.place_fleet(rng, &mut board, &config.fleet);
        let engine = StandardEngine::new(config.role, board, config.fleet, transport);
        Ok(Self::new(player, engine))
    }

    /// Drive the game until it ends.
    pub async fn run(&mut self, rng: &mut SmallRng) -> EndReason {
        loop {
            let turn = match self.engine.state() {
                SessionState::Ended(reason) => {
                    self.player.on_end(reason);
                    return reason;
                }
                SessionState::AwaitingLocalShot => {
                    let action = self.player.next_action(rng, self.engine.shot_record());
                    match self.engine.take_local_turn(action).await {
                        Ok(turn) => turn,
                        Err(e) => {
                            debug!("local action {:?} refused: {}", action, e);
                            self.player.rejected(e);
                            continue;
                        }
                    }
                }
                SessionState::AwaitingRemoteShot => match self.engine.await_remote_turn().await {
                    Ok(turn) => turn,
                    Err(e) => {
                        debug!("remote turn refused: {}", e);
                        continue;
                    }
                },
            };
            if let Some(exchange) = turn.exchange {
                self.player.on_exchange(exchange);
            }
        }
    }

    pub fn engine(&self) -> &StandardEngine<T> {
        &self.engine
    }

    /// Current state of the underlying engine.
    pub fn state(&self) -> SessionState {
        self.engine.state()
    }

    /// Total number of shots this side has fired.
    pub fn shots_fired(&self) -> usize {
        self.engine.shot_record().fired()
    }
}
