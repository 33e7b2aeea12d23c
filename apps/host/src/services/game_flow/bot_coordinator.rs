//! Driving bot seats through the same internal move path as everyone else.

use std::sync::Arc;

use tracing::{debug, warn};

use super::GameHost;
use crate::domain::placement::{apply_move, PlacementCheck};
use crate::domain::state::Phase;

impl GameHost {
    /// Schedule the bot at the current turn to act after the think delay.
    /// Stamped with the current epoch; any mutation in between makes the
    /// timer a no-op.
    pub(super) fn spawn_bot_turn(self: &Arc<Self>) {
        let host = Arc::clone(self);
        let epoch = self.current_epoch();
        tokio::spawn(async move {
            tokio::time::sleep(host.config.bot_think_delay).await;
            host.bot_turn(epoch);
        });
    }

    /// In an unattended game, seat 0's bot claims the first turn.
    pub(super) fn spawn_bot_claim(self: &Arc<Self>) {
        let host = Arc::clone(self);
        let epoch = self.current_epoch();
        tokio::spawn(async move {
            tokio::time::sleep(host.config.bot_think_delay).await;
            host.bot_claim(epoch);
        });
    }

    fn bot_turn(self: &Arc<Self>, epoch: u64) {
        let mut state = self.state.lock();
        if self.current_epoch() != epoch {
            debug!(epoch, "stale bot timer dropped");
            return;
        }
        if state.phase != Phase::Placement {
            return;
        }
        let seat = state.turn;
        if !state.participant(seat).is_some_and(|p| p.is_bot()) {
            return;
        }

        let chosen = match self.bot.choose_move(&state, seat) {
            Ok(chosen) => chosen,
            Err(err) => {
                warn!(seat, %err, "bot could not choose a move");
                return;
            }
        };

        // The selector pre-filtered by the placement restriction; skipping
        // it here means the fallback move always lands and the turn always
        // advances.
        if let Err(err) = apply_move(
            &mut state,
            seat,
            chosen.card,
            chosen.slot,
            false,
            PlacementCheck::Skip,
        ) {
            warn!(seat, %err, "bot move rejected");
            return;
        }

        debug!(seat, card = %chosen.card, slot = chosen.slot, "bot placed a card");
        self.bump_epoch();
        self.commit(&state);
        self.schedule_followups(&state);
    }

    fn bot_claim(self: &Arc<Self>, epoch: u64) {
        let claimant = {
            let state = self.state.lock();
            if self.current_epoch() != epoch {
                debug!(epoch, "stale claim timer dropped");
                return;
            }
            if state.phase != Phase::StartSelection {
                return;
            }
            match state.seats.first() {
                Some(p) if p.is_bot() => p.id,
                _ => return,
            }
        };
        if let Err(err) = self.claim_start(claimant) {
            warn!(%err, "bot start claim failed");
        }
    }
}
