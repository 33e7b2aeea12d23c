#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod net;
pub mod services;
pub mod store;
pub mod telemetry;


// Re-exports for public API
pub use ai::{BotMove, BotPlayer, RandomBot};
pub use config::HostConfig;
pub use error::HostError;
pub use net::{ChannelPeer, ClientMsg, ErrorCode, PeerHub, PeerSink, ReplicaView, ServerMsg};
pub use services::GameHost;
pub use store::{FileRecoveryStore, MemoryRecoveryStore, RecoveryStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
