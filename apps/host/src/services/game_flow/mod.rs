//! The authoritative game host.
//!
//! One [`GameHost`] owns the canonical [`GameState`] behind a single mutex;
//! every mutation (remote command, local action, bot move, sequencer tick)
//! goes through that lock, is persisted, and is broadcast as a complete
//! snapshot before the lock is released. Timed followups carry the epoch
//! current when they were scheduled and give up silently if any newer
//! mutation has landed since.

mod bot_coordinator;
mod lifecycle;
mod player_actions;
mod sequencer;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::error;
use uuid::Uuid;

use crate::ai::BotPlayer;
use crate::config::HostConfig;
use crate::domain::snapshot::snapshot;
use crate::domain::state::{GameState, Phase};
use crate::net::hub::PeerHub;
use crate::net::protocol::ServerMsg;
use crate::store::RecoveryStore;

pub struct GameHost {
    pub(super) config: HostConfig,
    pub(super) state: Mutex<GameState>,
    pub(super) hub: PeerHub,
    pub(super) store: Box<dyn RecoveryStore>,
    pub(super) bot: Box<dyn BotPlayer>,
    /// Identity of the participant running on this node.
    pub(super) local_id: Uuid,
    /// Remote identities in join order; seated from the front at start.
    pub(super) roster: Mutex<Vec<(Uuid, String)>>,
    /// Bumped under the state lock on every mutation. Timed followups
    /// compare against the value they were scheduled with.
    pub(super) epoch: AtomicU64,
}

impl GameHost {
    pub fn local_id(&self) -> Uuid {
        self.local_id
    }

    pub fn hub(&self) -> &PeerHub {
        &self.hub
    }

    /// Read-only copy of the canonical state, for the local UI and tests.
    pub fn current_state(&self) -> GameState {
        self.state.lock().clone()
    }

    pub(super) fn bump_epoch(&self) -> u64 {
        self.epoch.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub(super) fn current_epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    /// Persist and broadcast the given state. Called under the state lock
    /// so no replica can observe a snapshot out of order.
    ///
    /// A persistence failure is logged and the game continues; losing
    /// crash-recovery is better than freezing a live session.
    pub(super) fn commit(&self, state: &GameState) {
        let snap = snapshot(state);
        if state.phase != Phase::Lobby {
            if let Err(err) = self.store.save(&snap) {
                error!(%err, "failed to persist recovery snapshot");
            }
        }
        self.hub.broadcast(&ServerMsg::StateUpdate { state: snap });
    }

    /// Spawn whatever timed followup the current state calls for.
    pub(super) fn schedule_followups(self: &Arc<Self>, state: &GameState) {
        match state.phase {
            Phase::Lobby => {}
            Phase::StartSelection => {
                // Humans race to claim; a bot seat 0 claims on a timer so an
                // unattended game still starts.
                if state.seats.first().is_some_and(|p| p.is_bot()) {
                    self.spawn_bot_claim();
                }
            }
            Phase::Placement => {
                let acting = state.participant(state.turn);
                if acting.is_some_and(|p| p.is_bot()) {
                    self.spawn_bot_turn();
                }
            }
            Phase::Resolution => {
                if state.outcome.is_none() {
                    self.spawn_resolution_tick();
                }
            }
        }
    }
}
