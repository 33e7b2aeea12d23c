//! Host lifecycle: construction with crash recovery, mission start, abort,
//! and manual resync.

use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use parking_lot::Mutex;
use rand::Rng;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::GameHost;
use crate::ai::BotPlayer;
use crate::config::HostConfig;
use crate::domain::dealing::{deal, shuffled_deck};
use crate::domain::missions::MissionId;
use crate::domain::snapshot::restore;
use crate::domain::state::{GameState, Participant, Phase, PlayerKind};
use crate::error::HostError;
use crate::errors::domain::{DomainError, RejectKind};
use crate::net::hub::PeerHub;
use crate::net::protocol::ServerMsg;
use crate::store::RecoveryStore;

impl GameHost {
    /// Build a host, restoring the persisted snapshot if one exists. A
    /// corrupt snapshot is logged and discarded; the host starts clean
    /// rather than refusing to start.
    pub fn new(
        config: HostConfig,
        store: Box<dyn RecoveryStore>,
        bot: Box<dyn BotPlayer>,
    ) -> Arc<Self> {
        let state = match store.load() {
            Ok(Some(snap)) => {
                info!(phase = ?snap.phase, "restored persisted game");
                restore(&snap)
            }
            Ok(None) => GameState::lobby(),
            Err(err) => {
                warn!(%err, "recovery snapshot unreadable, starting clean");
                GameState::lobby()
            }
        };

        Arc::new(Self {
            config,
            state: Mutex::new(state),
            hub: PeerHub::new(),
            store,
            bot,
            local_id: Uuid::new_v4(),
            roster: Mutex::new(Vec::new()),
            epoch: AtomicU64::new(0),
        })
    }

    /// Re-arm timed followups for the current (possibly restored) state.
    /// Call once after construction, inside a tokio runtime.
    pub fn resume(self: &Arc<Self>) {
        let state = self.state.lock();
        self.schedule_followups(&state);
    }

    /// Deal hands and enter start selection. Seat 0 is the local
    /// participant, remote joiners follow in join order, bots fill the
    /// rest.
    pub fn start_mission(self: &Arc<Self>, mission: MissionId) -> Result<(), HostError> {
        let mut state = self.state.lock();
        if state.phase != Phase::Lobby {
            return Err(DomainError::rejected(
                RejectKind::PhaseMismatch,
                "A mission is already running",
            )
            .into());
        }

        let count = self.config.participants;
        let seed = match self.config.deal_seed {
            Some(seed) => seed,
            None => rand::rng().random(),
        };
        let hands = deal(&shuffled_deck(seed), count)?;

        let local_kind = if self.config.autoplay {
            PlayerKind::Bot
        } else {
            PlayerKind::Host
        };
        let roster = self.roster.lock();
        let mut seats = Vec::with_capacity(count);
        seats.push(Participant {
            id: self.local_id,
            display_name: self.config.host_name.clone(),
            kind: local_kind,
            hand: Vec::new(),
        });
        for (id, name) in roster.iter().take(count - 1) {
            seats.push(Participant {
                id: *id,
                display_name: name.clone(),
                kind: PlayerKind::Remote,
                hand: Vec::new(),
            });
        }
        while seats.len() < count {
            let n = seats.len() + 1;
            seats.push(Participant {
                id: Uuid::new_v4(),
                display_name: format!("Bot {n}"),
                kind: PlayerKind::Bot,
                hand: Vec::new(),
            });
        }
        drop(roster);
        for (seat, hand) in seats.iter_mut().zip(hands) {
            seat.hand = hand;
        }

        let message_seq = state.message_seq;
        *state = GameState {
            phase: Phase::StartSelection,
            mission: Some(mission),
            seats,
            message_seq,
            ..GameState::lobby()
        };

        info!(%mission, count, seed, "mission started");
        self.bump_epoch();
        self.commit(&state);
        self.schedule_followups(&state);
        Ok(())
    }

    /// Drop the running mission: canonical state back to lobby, persisted
    /// snapshot cleared, replicas told to reset their views. Joined
    /// identities stay on the roster for the next mission. A failing store
    /// is logged; replicas still get their reset.
    pub fn abort(self: &Arc<Self>) {
        let mut state = self.state.lock();
        info!(phase = ?state.phase, "mission aborted");
        let message_seq = state.message_seq;
        *state = GameState {
            message_seq,
            ..GameState::lobby()
        };
        self.bump_epoch();
        if let Err(err) = self.store.clear() {
            error!(%err, "persisted snapshot not cleared");
        }
        self.hub.broadcast(&ServerMsg::Reset);
    }

    /// Re-broadcast the current snapshot. Harmless at any time; replicas
    /// overwrite idempotently.
    pub fn force_resync(&self) {
        let state = self.state.lock();
        self.hub.broadcast(&ServerMsg::StateUpdate {
            state: crate::domain::snapshot::snapshot(&state),
        });
    }
}
