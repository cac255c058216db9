use crate::engine::EndReason;
use crate::protocol::{DecodeError, Message};

pub use line::{ChannelError, LineChannel};

/// Why a message could not be exchanged.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error(transparent)]
    Channel(#[from] ChannelError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl TransportError {
    /// How a session ends when this error interrupts it.
    pub fn end_reason(&self) -> EndReason {
        match self {
            TransportError::Channel(_) => EndReason::ConnectionLost,
            TransportError::Decode(_) => EndReason::ProtocolError,
        }
    }
}

/// Ordered, reliable message pipe to the opposing side.
#[async_trait::async_trait]
pub trait Transport: Send {
    async fn send(&mut self, msg: &Message) -> Result<(), TransportError>;
    async fn recv(&mut self) -> Result<Message, TransportError>;
    /// Close the outbound direction. Nothing is sent afterwards.
    async fn close(&mut self);
}

pub mod in_memory;
pub mod line;
pub mod tcp;
