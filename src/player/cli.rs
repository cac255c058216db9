use std::io::{self, BufRead, BufReader, Write};

use rand::rngs::SmallRng;

use crate::board::ShotRecord;
use crate::common::{Coord, Outcome, TurnError};
use crate::config::BOARD_SIZE;
use crate::engine::{EndReason, Exchange, LocalAction};

use super::Player;

/// Interactive player reading one command per line.
///
/// A command is `quit` or a target written as a row letter followed by a
/// column number, e.g. `A5` for row 0, column 5. End of input counts as quit.
pub struct CliPlayer {
    input: Box<dyn BufRead + Send>,
}

impl CliPlayer {
    pub fn new() -> Self {
        Self::from_reader(BufReader::new(io::stdin()))
    }

    pub fn from_reader<R: BufRead + Send + 'static>(input: R) -> Self {
        Self {
            input: Box::new(input),
        }
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Label for `at` in the `A5` input notation.
pub fn coord_label(at: Coord) -> String {
    match u8::try_from(at.row) {
        Ok(row) if row < 26 => format!("{}{}", (b'A' + row) as char, at.col),
        _ => format!("{}", at),
    }
}

/// Parse one input line into an action. Bounds are checked against the
/// standard board.
pub fn parse_command(input: &str) -> Result<LocalAction, &'static str> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("quit") {
        return Ok(LocalAction::Quit);
    }
    let mut chars = input.chars();
    let row_ch = chars.next().ok_or("empty input")?.to_ascii_uppercase();
    if !row_ch.is_ascii_uppercase() {
        return Err("row must be a letter");
    }
    let col_str = chars.as_str();
    if col_str.is_empty() || !col_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err("column must be a number");
    }
    let row = (row_ch as u8 - b'A') as usize;
    let col: usize = col_str.parse().map_err(|_| "column must be a number")?;
    let at = Coord::new(row, col);
    if !at.in_bounds(BOARD_SIZE) {
        return Err("coordinates out of range");
    }
    Ok(LocalAction::Fire(at))
}

impl Player for CliPlayer {
    fn next_action(&mut self, _rng: &mut SmallRng, shots: &ShotRecord<BOARD_SIZE>) -> LocalAction {
        loop {
            print!(
                "\nYour turn ({} shots fired, {} hits). Target (e.g. A5) or 'quit': ",
                shots.fired(),
                shots.hits()
            );
            let _ = io::stdout().flush();
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => {
                    println!("Input closed.");
                    return LocalAction::Quit;
                }
                Ok(_) => {}
            }
            match parse_command(&line) {
                Ok(LocalAction::Fire(at)) if shots.check(at).is_err() => {
                    println!("You already fired at {}. Choose a different target.", coord_label(at));
                }
                Ok(action) => return action,
                Err(e) => println!("Invalid input: {}.", e),
            }
        }
    }

    fn rejected(&mut self, err: TurnError) {
        println!("{}", err);
    }

    fn on_exchange(&mut self, exchange: Exchange) {
        match exchange {
            Exchange::Fired { at, outcome: Outcome::Hit } => {
                println!("You hit the opponent at {}!", coord_label(at))
            }
            Exchange::Fired { at, outcome: Outcome::Miss } => {
                println!("You missed at {}.", coord_label(at))
            }
            Exchange::Received { at, outcome: Outcome::Hit } => {
                println!("Opponent hit you at {}.", coord_label(at))
            }
            Exchange::Received { at, outcome: Outcome::Miss } => {
                println!("Opponent missed at {}.", coord_label(at))
            }
        }
    }

    fn on_end(&mut self, reason: EndReason) {
        match reason {
            EndReason::LocalWin => println!("All opponent ships destroyed. You win!"),
            EndReason::LocalLoss => println!("All your ships destroyed. You lose."),
            EndReason::OpponentQuit => println!("Opponent quit. You win by default."),
            EndReason::LocalQuit => println!("You quit."),
            EndReason::ConnectionLost => println!("Connection to the opponent was lost."),
            EndReason::ProtocolError => println!("The opponent sent something unexpected."),
        }
    }
}
