use log::info;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpListener, TcpStream, ToSocketAddrs};

use crate::transport::LineChannel;

/// Line channel over a TCP connection.
pub type TcpTransport = LineChannel<OwnedReadHalf, OwnedWriteHalf>;

impl TcpTransport {
    pub fn from_stream(stream: TcpStream, max_line: usize) -> Self {
        if let Err(e) = stream.set_nodelay(true) {
            log::debug!("could not disable Nagle: {}", e);
        }
        let (reader, writer) = stream.into_split();
        LineChannel::with_max_line(reader, writer, max_line)
    }

    /// Connect to a listening peer.
    pub async fn connect<A: ToSocketAddrs>(addr: A, max_line: usize) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        if let Ok(peer) = stream.peer_addr() {
            info!("connected to {}", peer);
        }
        Ok(Self::from_stream(stream, max_line))
    }
}

/// Accept exactly one peer on `listener`, then stop listening.
pub async fn accept_one(listener: TcpListener, max_line: usize) -> anyhow::Result<TcpTransport> {
    let (stream, addr) = listener.accept().await?;
    drop(listener);
    info!("peer connected from {}", addr);
    Ok(TcpTransport::from_stream(stream, max_line))
}

/// Bind to `port` on all interfaces and wait for one peer.
pub async fn listen(port: u16, max_line: usize) -> anyhow::Result<TcpTransport> {
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    info!("listening on port {}", port);
    accept_one(listener, max_line).await
}
