use tokio::io::{DuplexStream, ReadHalf, WriteHalf};

use crate::config::DEFAULT_MAX_LINE;
use crate::transport::LineChannel;

/// Capacity of each direction of the in-process pipe.
const PIPE_CAPACITY: usize = 4096;

/// Line channel over an in-process byte pipe.
pub type InMemoryTransport = LineChannel<ReadHalf<DuplexStream>, WriteHalf<DuplexStream>>;

impl InMemoryTransport {
    /// Two connected ends. Dropping or closing one is seen as end of stream by the other.
    pub fn pair() -> (Self, Self) {
        Self::pair_with_max_line(DEFAULT_MAX_LINE)
    }

    pub fn pair_with_max_line(max_line: usize) -> (Self, Self) {
        let (a, b) = tokio::io::duplex(PIPE_CAPACITY);
        (Self::from_duplex(a, max_line), Self::from_duplex(b, max_line))
    }

    fn from_duplex(stream: DuplexStream, max_line: usize) -> Self {
        let (reader, writer) = tokio::io::split(stream);
        LineChannel::with_max_line(reader, writer, max_line)
    }
}
