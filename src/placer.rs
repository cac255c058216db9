//! Random fleet placement.

use log::{debug, trace};
use rand::Rng;

use crate::board::Board;
use crate::common::Coord;
use crate::config::Fleet;
use crate::ship::Orientation;

/// Samples spent on one ship before the whole fleet is laid out again.
const ATTEMPTS_PER_SHIP: usize = 1_000;

/// Place every ship of `fleet`, in order, at uniformly random origins and
/// orientations until each one fits.
///
/// There is no bound on the total number of samples. If a ship runs out of
/// room the board is rolled back to how it was on entry and the fleet starts
/// over, so a layout that boxed the remaining ships in cannot stall forever.
pub fn place_fleet<R: Rng, const N: usize>(
    board: &mut Board<N>,
    fleet: &Fleet,
    rng: &mut R,
) {
    let snapshot = *board;
    let mut restarts = 0usize;
    'fleet: loop {
        for ship in fleet.ships() {
            let mut attempts = 0;
            loop {
                let origin = Coord::new(rng.random_range(0..N), rng.random_range(0..N));
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                match board.place(*ship, origin, orientation) {
                    Ok(()) => {
                        trace!(
                            "placed {} at {} {:?} after {} attempts",
                            ship.name(),
                            origin,
                            orientation,
                            attempts + 1
                        );
                        break;
                    }
                    Err(_) => {
                        attempts += 1;
                        if attempts >= ATTEMPTS_PER_SHIP {
                            restarts += 1;
                            debug!(
                                "no room left for {}; restarting fleet placement ({} restarts)",
                                ship.name(),
                                restarts
                            );
                            *board = snapshot;
                            continue 'fleet;
                        }
                    }
                }
            }
        }
        return;
    }
}
