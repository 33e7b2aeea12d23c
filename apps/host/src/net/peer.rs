//! Peer sinks: the host's outbound half of a replica connection.

use tokio::sync::mpsc;

use crate::error::HostError;
use crate::net::protocol::ServerMsg;

/// Outbound channel to one replica. The hub owns one sink per peer and
/// treats a send failure as a transport fault on that peer only.
pub trait PeerSink: Send + Sync {
    fn send(&self, msg: ServerMsg) -> Result<(), HostError>;
}

/// [`PeerSink`] over an unbounded in-process channel. Production wiring and
/// tests both attach peers this way; the socket layer drains the receiver.
pub struct ChannelPeer {
    tx: mpsc::UnboundedSender<ServerMsg>,
}

impl PeerSink for ChannelPeer {
    fn send(&self, msg: ServerMsg) -> Result<(), HostError> {
        self.tx
            .send(msg)
            .map_err(|_| HostError::transport("peer channel closed"))
    }
}

/// Create a connected (sink, receiver) pair for one peer.
pub fn channel_peer() -> (ChannelPeer, mpsc::UnboundedReceiver<ServerMsg>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ChannelPeer { tx }, rx)
}
