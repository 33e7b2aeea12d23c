#![allow(dead_code)]

// tests/common/mod.rs
use std::sync::Arc;
use std::time::Duration;

use moondial_host::domain::GameSnapshot;
use moondial_host::net::protocol::ServerMsg;
use moondial_host::{HostConfig, HostError, MemoryRecoveryStore, RecoveryStore};
use tokio::sync::mpsc::UnboundedReceiver;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    host_test_support::logging::init();
}

/// Fast timers and a fixed deal so scenarios are reproducible under the
/// paused tokio clock.
pub fn test_config(participants: usize, autoplay: bool) -> HostConfig {
    HostConfig {
        participants,
        autoplay,
        host_name: "Ana".to_string(),
        deal_seed: Some(7),
        bot_think_delay: Duration::from_millis(100),
        resolution_tick: Duration::from_millis(200),
        banner_duration: Duration::from_millis(300),
        ..HostConfig::default()
    }
}

/// Recovery store handle that can be kept by the test while the host owns
/// a boxed clone of it.
#[derive(Clone, Default)]
pub struct SharedStore(pub Arc<MemoryRecoveryStore>);

impl SharedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(snapshot: GameSnapshot) -> Self {
        Self(Arc::new(MemoryRecoveryStore::seeded(snapshot)))
    }
}

impl RecoveryStore for SharedStore {
    fn load(&self) -> Result<Option<GameSnapshot>, HostError> {
        self.0.load()
    }

    fn save(&self, snapshot: &GameSnapshot) -> Result<(), HostError> {
        self.0.save(snapshot)
    }

    fn clear(&self) -> Result<(), HostError> {
        self.0.clear()
    }
}

/// Advance the paused clock until the condition holds. Panics after a
/// generous virtual-time budget so a stuck game fails loudly.
pub async fn wait_until(mut cond: impl FnMut() -> bool) {
    for _ in 0..600 {
        if cond() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    panic!("condition not reached within the virtual time budget");
}

/// Pop the next already-queued server message; outbound sends happen
/// synchronously inside host calls, so nothing needs to be awaited.
pub fn next_msg(rx: &mut UnboundedReceiver<ServerMsg>) -> ServerMsg {
    rx.try_recv().expect("expected a queued server message")
}

pub fn drain(rx: &mut UnboundedReceiver<ServerMsg>) -> Vec<ServerMsg> {
    let mut out = Vec::new();
    while let Ok(msg) = rx.try_recv() {
        out.push(msg);
    }
    out
}

/// The latest state update in a drained batch, if any.
pub fn last_state(msgs: &[ServerMsg]) -> Option<GameSnapshot> {
    msgs.iter().rev().find_map(|msg| match msg {
        ServerMsg::StateUpdate { state } => Some(state.clone()),
        _ => None,
    })
}
