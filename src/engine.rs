//! Turn alternation for one side of a networked game.

use core::fmt;

use log::{debug, info, warn};

use crate::board::{Board, ShotRecord};
use crate::common::{Coord, Outcome, TurnError};
use crate::config::{Fleet, BOARD_SIZE};
use crate::protocol::Message;
use crate::transport::{Transport, TransportError};

/// Which side fires first. Fixed for the life of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Role {
    Initiator,
    Responder,
}

impl Role {
    pub fn initial_state(self) -> SessionState {
        match self {
            Role::Initiator => SessionState::AwaitingLocalShot,
            Role::Responder => SessionState::AwaitingRemoteShot,
        }
    }
}

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum EndReason {
    LocalWin,
    LocalLoss,
    OpponentQuit,
    LocalQuit,
    ConnectionLost,
    ProtocolError,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            EndReason::LocalWin => "all enemy ships destroyed",
            EndReason::LocalLoss => "all own ships destroyed",
            EndReason::OpponentQuit => "opponent quit",
            EndReason::LocalQuit => "quit",
            EndReason::ConnectionLost => "connection lost",
            EndReason::ProtocolError => "protocol error",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingLocalShot,
    AwaitingRemoteShot,
    /// Terminal. Nothing is sent or received afterwards.
    Ended(EndReason),
}

impl SessionState {
    pub fn is_ended(&self) -> bool {
        matches!(self, SessionState::Ended(_))
    }
}

/// What the local side does when it is its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalAction {
    Fire(Coord),
    Quit,
}

/// A completed shot/result exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exchange {
    /// We fired at `at` and the opponent answered `outcome`.
    Fired { at: Coord, outcome: Outcome },
    /// The opponent fired at `at` and we answered `outcome`.
    Received { at: Coord, outcome: Outcome },
}

/// Result of driving the engine through one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub state: SessionState,
    pub exchange: Option<Exchange>,
}

impl Turn {
    fn ended(state: SessionState) -> Self {
        Self {
            state,
            exchange: None,
        }
    }
}

pub type StandardEngine<T> = TurnEngine<T, BOARD_SIZE>;

/// Enforces strict shot alternation over a transport and detects the end of
/// the game.
///
/// The opponent's board is never visible here, so a win is declared once the
/// number of `RESULT HIT` replies equals the fleet's total length.
pub struct TurnEngine<T, const N: usize> {
    transport: T,
    role: Role,
    board: Board<N>,
    shots: ShotRecord<N>,
    fleet: Fleet,
    hits_landed: usize,
    state: SessionState,
    history: Vec<SessionState>,
}

impl<T: Transport, const N: usize> TurnEngine<T, N> {
    /// `board` must already carry the local fleet.
    pub fn new(role: Role, board: Board<N>, fleet: Fleet, transport: T) -> Self {
        let state = role.initial_state();
        debug!("session starts as {:?} in {:?}", role, state);
        Self {
            transport,
            role,
            board,
            shots: ShotRecord::new(),
            fleet,
            hits_landed: 0,
            state,
            history: vec![state],
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn board(&self) -> &Board<N> {
        &self.board
    }

    pub fn shot_record(&self) -> &ShotRecord<N> {
        &self.shots
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// `RESULT HIT` replies received so far.
    pub fn hits_landed(&self) -> usize {
        self.hits_landed
    }

    /// Every state entered so far, starting with the initial one.
    pub fn history(&self) -> &[SessionState] {
        &self.history
    }

    /// Act on our turn: fire at a coordinate or quit.
    ///
    /// A target that is off the board or already fired at is rejected with
    /// no message sent and no state change; pick another and call again.
    pub async fn take_local_turn(&mut self, action: LocalAction) -> Result<Turn, TurnError> {
        if self.state != SessionState::AwaitingLocalShot {
            return Err(TurnError::NotYourTurn);
        }
        let target = match action {
            LocalAction::Quit => {
                if let Err(e) = self.transport.send(&Message::Quit).await {
                    warn!("could not deliver QUIT: {}", e);
                }
                return Ok(Turn::ended(self.end(EndReason::LocalQuit).await));
            }
            LocalAction::Fire(at) => at,
        };
        self.shots.check(target)?;

        if let Err(e) = self.transport.send(&Message::shot(target)).await {
            return Ok(Turn::ended(self.fail(e).await));
        }
        let reply = match self.transport.recv().await {
            Ok(msg) => msg,
            Err(e) => return Ok(Turn::ended(self.fail(e).await)),
        };
        match reply {
            Message::Result(outcome) => {
                self.shots.record(target, outcome)?;
                if outcome == Outcome::Hit {
                    self.hits_landed += 1;
                }
                debug!("fired at {}: {:?}", target, outcome);
                let state = if self.hits_landed >= self.fleet.total_cells() {
                    self.end(EndReason::LocalWin).await
                } else {
                    self.advance(SessionState::AwaitingRemoteShot)
                };
                Ok(Turn {
                    state,
                    exchange: Some(Exchange::Fired { at: target, outcome }),
                })
            }
            Message::Quit => Ok(Turn::ended(self.end(EndReason::OpponentQuit).await)),
            other => {
                warn!("expected RESULT after firing, got {}", other);
                Ok(Turn::ended(self.end(EndReason::ProtocolError).await))
            }
        }
    }

    /// Wait for the opponent's move and answer it.
    pub async fn await_remote_turn(&mut self) -> Result<Turn, TurnError> {
        if self.state != SessionState::AwaitingRemoteShot {
            return Err(TurnError::NotYourTurn);
        }
        let msg = match self.transport.recv().await {
            Ok(msg) => msg,
            Err(e) => return Ok(Turn::ended(self.fail(e).await)),
        };
        match msg {
            Message::Shot { row, col } => {
                let at = Coord::new(row, col);
                // Board indices come straight from the peer.
                if !at.in_bounds(N) {
                    warn!("peer fired outside the {}x{} board at {}", N, N, at);
                    return Ok(Turn::ended(self.end(EndReason::ProtocolError).await));
                }
                let outcome = self.board.apply_incoming_shot(at);
                debug!("opponent fired at {}: {:?}", at, outcome);
                let exchange = Some(Exchange::Received { at, outcome });
                if let Err(e) = self.transport.send(&Message::Result(outcome)).await {
                    let state = self.fail(e).await;
                    return Ok(Turn { state, exchange });
                }
                let state = if self.board.all_destroyed() {
                    self.end(EndReason::LocalLoss).await
                } else {
                    self.advance(SessionState::AwaitingLocalShot)
                };
                Ok(Turn { state, exchange })
            }
            Message::Quit => Ok(Turn::ended(self.end(EndReason::OpponentQuit).await)),
            other => {
                warn!("expected SHOT or QUIT, got {}", other);
                Ok(Turn::ended(self.end(EndReason::ProtocolError).await))
            }
        }
    }

    fn advance(&mut self, state: SessionState) -> SessionState {
        debug!("{:?} -> {:?}", self.state, state);
        self.state = state;
        self.history.push(state);
        state
    }

    async fn fail(&mut self, err: TransportError) -> SessionState {
        warn!("session interrupted: {}", err);
        self.end(err.end_reason()).await
    }

    async fn end(&mut self, reason: EndReason) -> SessionState {
        let state = self.advance(SessionState::Ended(reason));
        self.transport.close().await;
        info!("session ended: {}", reason);
        state
    }
}
