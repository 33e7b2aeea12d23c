//! Replication plumbing: the wire protocol, peer sinks, and the hub that
//! fans snapshots out to every connected replica.

pub mod hub;
pub mod peer;
pub mod protocol;
pub mod replica;

pub use hub::PeerHub;
pub use peer::{channel_peer, ChannelPeer, PeerSink};
pub use protocol::{ClientMsg, ErrorCode, ServerMsg};
pub use replica::ReplicaView;
