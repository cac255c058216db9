//! Line-oriented wire messages.
//!
//! Grammar, one message per line, single spaces between fields:
//!
//! ```text
//! SHOT <row> <col>
//! RESULT HIT
//! RESULT MISS
//! QUIT
//! ```

use core::fmt;

use crate::common::{Coord, Outcome};

/// Messages exchanged between the two sides of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Fire at the given zero-indexed coordinate.
    Shot { row: usize, col: usize },
    /// Answer to the most recent shot.
    Result(Outcome),
    /// The sender is leaving the game.
    Quit,
}

impl Message {
    pub fn shot(at: Coord) -> Self {
        Message::Shot {
            row: at.row,
            col: at.col,
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Shot { row, col } => write!(f, "SHOT {} {}", row, col),
            Message::Result(Outcome::Hit) => write!(f, "RESULT HIT"),
            Message::Result(Outcome::Miss) => write!(f, "RESULT MISS"),
            Message::Quit => write!(f, "QUIT"),
        }
    }
}

/// A line that does not match the grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed message: {0:?}")]
    Malformed(String),
}

/// Encode a message as line text, without the trailing newline.
pub fn encode(msg: &Message) -> String {
    msg.to_string()
}

/// Decode one line of text (delimiter already removed).
pub fn decode(line: &str) -> Result<Message, DecodeError> {
    let malformed = || DecodeError::Malformed(line.to_string());
    let fields: Vec<&str> = line.split(' ').collect();
    match fields.as_slice() {
        ["SHOT", row, col] => Ok(Message::Shot {
            row: parse_index(row).ok_or_else(malformed)?,
            col: parse_index(col).ok_or_else(malformed)?,
        }),
        ["RESULT", "HIT"] => Ok(Message::Result(Outcome::Hit)),
        ["RESULT", "MISS"] => Ok(Message::Result(Outcome::Miss)),
        ["QUIT"] => Ok(Message::Quit),
        _ => Err(malformed()),
    }
}

/// Plain decimal digits; `usize::from_str` also accepts a leading `+`.
fn parse_index(field: &str) -> Option<usize> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl core::str::FromStr for Message {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}
