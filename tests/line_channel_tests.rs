use netbattle::{ChannelError, InMemoryTransport, LineChannel, Message, Transport, TransportError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// A line channel reading from the returned raw stream's writes and writing
/// into its reads.
fn channel_with_raw_peer(
    max_line: usize,
) -> (
    LineChannel<tokio::io::ReadHalf<tokio::io::DuplexStream>, tokio::io::WriteHalf<tokio::io::DuplexStream>>,
    tokio::io::DuplexStream,
) {
    let (ours, theirs) = tokio::io::duplex(1024);
    let (reader, writer) = tokio::io::split(ours);
    (LineChannel::with_max_line(reader, writer, max_line), theirs)
}

#[tokio::test(flavor = "multi_thread")]
async fn test_reads_lines_across_partial_writes() -> anyhow::Result<()> {
    let (mut channel, mut peer) = channel_with_raw_peer(128);
    peer.write_all(b"SHOT ").await?;
    peer.write_all(b"1 2\nRESU").await?;
    peer.write_all(b"LT HIT\r\nQUIT").await?;
    drop(peer);

    assert_eq!(channel.read_line().await?, "SHOT 1 2");
    assert_eq!(channel.read_line().await?, "RESULT HIT");
    // a final line cut off by end of stream is still a line
    assert_eq!(channel.read_line().await?, "QUIT");
    assert_eq!(channel.read_line().await, Err(ChannelError::Closed));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_empty_line_is_not_end_of_stream() -> anyhow::Result<()> {
    let (mut channel, mut peer) = channel_with_raw_peer(128);
    peer.write_all(b"\n").await?;
    drop(peer);
    assert_eq!(channel.read_line().await?, "");
    assert_eq!(channel.read_line().await, Err(ChannelError::Closed));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_too_long_without_delimiter() -> anyhow::Result<()> {
    let (mut channel, mut peer) = channel_with_raw_peer(16);
    peer.write_all(&[b'A'; 40]).await?;
    assert_eq!(
        channel.read_line().await,
        Err(ChannelError::TooLong { limit: 16 })
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_line_at_limit_is_accepted() -> anyhow::Result<()> {
    let (mut channel, mut peer) = channel_with_raw_peer(8);
    peer.write_all(b"12345678\n123456789\n").await?;
    assert_eq!(channel.read_line().await?, "12345678");
    assert_eq!(
        channel.read_line().await,
        Err(ChannelError::TooLong { limit: 8 })
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_write_appends_single_newline() -> anyhow::Result<()> {
    let (mut channel, mut peer) = channel_with_raw_peer(128);
    channel.write_line("RESULT MISS").await?;
    channel.write_line("QUIT\n").await?;
    channel.shutdown().await;

    let mut received = String::new();
    peer.read_to_string(&mut received).await?;
    assert_eq!(received, "RESULT MISS\nQUIT\n");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_write_to_closed_peer_fails() -> anyhow::Result<()> {
    let (mut channel, peer) = channel_with_raw_peer(128);
    drop(peer);
    assert_eq!(channel.write_line("QUIT").await, Err(ChannelError::Closed));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_message_transport_pair() -> anyhow::Result<()> {
    let (mut a, mut b) = InMemoryTransport::pair();
    a.send(&Message::Shot { row: 4, col: 2 }).await?;
    assert_eq!(b.recv().await?, Message::Shot { row: 4, col: 2 });

    b.write_line("SHOT abc 3").await?;
    assert!(matches!(a.recv().await, Err(TransportError::Decode(_))));

    b.close().await;
    assert!(matches!(
        a.recv().await,
        Err(TransportError::Channel(ChannelError::Closed))
    ));
    Ok(())
}
