//! The peer hub: registry of connected replicas and snapshot fan-out.

use dashmap::DashMap;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::net::peer::PeerSink;
use crate::net::protocol::ServerMsg;

/// All currently attached peers, keyed by participant identity.
///
/// A peer whose sink fails during a broadcast is dropped from the registry
/// and the broadcast continues; its seat stays in the game (it simply stops
/// acting, like a stalled bot-less participant) and a later Join with the
/// same identity re-attaches it.
#[derive(Default)]
pub struct PeerHub {
    peers: DashMap<Uuid, Box<dyn PeerSink>>,
}

impl PeerHub {
    pub fn new() -> Self {
        Self {
            peers: DashMap::new(),
        }
    }

    /// Attach (or re-attach) a peer. An existing sink for the same identity
    /// is replaced, which is how reconnection works.
    pub fn attach(&self, identity: Uuid, sink: Box<dyn PeerSink>) {
        if self.peers.insert(identity, sink).is_some() {
            debug!(%identity, "replaced existing peer sink");
        }
    }

    pub fn detach(&self, identity: Uuid) {
        self.peers.remove(&identity);
    }

    pub fn is_attached(&self, identity: Uuid) -> bool {
        self.peers.contains_key(&identity)
    }

    pub fn peer_count(&self) -> usize {
        self.peers.len()
    }

    /// Send to every attached peer, detaching any whose sink faults.
    pub fn broadcast(&self, msg: &ServerMsg) {
        let mut faulted = Vec::new();
        for entry in self.peers.iter() {
            if let Err(err) = entry.value().send(msg.clone()) {
                warn!(identity = %entry.key(), %err, "peer send failed, detaching");
                faulted.push(*entry.key());
            }
        }
        for identity in faulted {
            self.peers.remove(&identity);
        }
    }

    /// Send to one peer only (per-peer error feedback). A fault detaches it.
    pub fn send_to(&self, identity: Uuid, msg: ServerMsg) {
        let faulted = match self.peers.get(&identity) {
            Some(entry) => entry.value().send(msg).is_err(),
            None => false,
        };
        if faulted {
            warn!(%identity, "peer send failed, detaching");
            self.peers.remove(&identity);
        }
    }
}
