use rand::rngs::SmallRng;
use rand::seq::IteratorRandom;

use crate::board::ShotRecord;
use crate::config::BOARD_SIZE;
use crate::engine::LocalAction;

use super::Player;

/// Computer player that fires at a uniformly random cell it has not tried yet.
#[derive(Debug, Default)]
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for RandomPlayer {
    fn next_action(&mut self, rng: &mut SmallRng, shots: &ShotRecord<BOARD_SIZE>) -> LocalAction {
        match shots.untried().choose(rng) {
            Some(at) => LocalAction::Fire(at),
            // Every cell has been fired at; nothing sensible is left to do.
            None => LocalAction::Quit,
        }
    }
}
