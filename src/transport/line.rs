use log::{debug, trace};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::config::DEFAULT_MAX_LINE;
use crate::protocol::{self, Message};
use crate::transport::{Transport, TransportError};

/// Line framing failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ChannelError {
    /// End of stream before any byte of a line, or an unrecoverable I/O error.
    #[error("connection closed")]
    Closed,
    /// No delimiter within the configured limit.
    #[error("line exceeds {limit} bytes without a delimiter")]
    TooLong { limit: usize },
}

/// Newline-delimited text framing over a byte stream.
///
/// Reads are buffered, but each call still returns exactly one line and
/// waits until that line (or the end of the stream) has arrived.
pub struct LineChannel<R, W> {
    reader: BufReader<R>,
    writer: W,
    max_line: usize,
}

impl<R, W> LineChannel<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self::with_max_line(reader, writer, DEFAULT_MAX_LINE)
    }

    pub fn with_max_line(reader: R, writer: W, max_line: usize) -> Self {
        Self {
            reader: BufReader::new(reader),
            writer,
            max_line,
        }
    }

    pub fn max_line(&self) -> usize {
        self.max_line
    }

    /// Read one line, without its `\n` (or `\r\n`) delimiter.
    ///
    /// A final line cut off by end of stream is returned as is. Bytes that are
    /// not UTF-8 are replaced rather than rejected, so they surface as a decode
    /// failure one layer up.
    pub async fn read_line(&mut self) -> Result<String, ChannelError> {
        let mut line = Vec::new();
        loop {
            let (used, done) = {
                let available = self.reader.fill_buf().await.map_err(|e| {
                    debug!("read failed: {}", e);
                    ChannelError::Closed
                })?;
                if available.is_empty() {
                    if line.is_empty() {
                        return Err(ChannelError::Closed);
                    }
                    break;
                }
                match available.iter().position(|&b| b == b'\n') {
                    Some(pos) => {
                        line.extend_from_slice(&available[..pos]);
                        (pos + 1, true)
                    }
                    None => {
                        line.extend_from_slice(available);
                        (available.len(), false)
                    }
                }
            };
            self.reader.consume(used);
            if line.last() == Some(&b'\r') && done {
                line.pop();
            }
            if line.len() > self.max_line {
                return Err(ChannelError::TooLong {
                    limit: self.max_line,
                });
            }
            if done {
                break;
            }
        }
        let text = String::from_utf8_lossy(&line).into_owned();
        trace!("<- {}", text);
        Ok(text)
    }

    /// Write `text` followed by a newline unless it already ends with one.
    /// Partial writes are retried until every byte is out.
    pub async fn write_line(&mut self, text: &str) -> Result<(), ChannelError> {
        let mut buf = Vec::with_capacity(text.len() + 1);
        buf.extend_from_slice(text.as_bytes());
        if !text.ends_with('\n') {
            buf.push(b'\n');
        }
        let written = match self.writer.write_all(&buf).await {
            Ok(()) => self.writer.flush().await,
            Err(e) => Err(e),
        };
        written.map_err(|e| {
            debug!("write failed: {}", e);
            ChannelError::Closed
        })?;
        trace!("-> {}", text.trim_end_matches('\n'));
        Ok(())
    }

    /// Shut down the write half so the peer sees end of stream.
    pub async fn shutdown(&mut self) {
        if let Err(e) = self.writer.shutdown().await {
            debug!("shutdown failed: {}", e);
        }
    }
}

#[async_trait::async_trait]
impl<R, W> Transport for LineChannel<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn send(&mut self, msg: &Message) -> Result<(), TransportError> {
        self.write_line(&protocol::encode(msg)).await?;
        Ok(())
    }

    async fn recv(&mut self) -> Result<Message, TransportError> {
        let line = self.read_line().await?;
        Ok(protocol::decode(&line)?)
    }

    async fn close(&mut self) {
        self.shutdown().await;
    }
}
