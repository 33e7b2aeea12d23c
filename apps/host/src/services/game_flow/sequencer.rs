//! The resolution sequencer and other timed followups.
//!
//! Resolution is deliberately paced: one slot verdict per tick, each
//! committed and broadcast as its own snapshot, then one final validation
//! that decides the outcome. Every timer carries the epoch it was scheduled
//! under and evaporates if the world moved on (an abort, a resync-triggering
//! restart).

use std::sync::Arc;

use tracing::{debug, info};

use super::GameHost;
use crate::domain::board::SLOTS;
use crate::domain::missions::mission;
use crate::domain::resolution::{final_outcome, judge_slot};
use crate::domain::state::Phase;

impl GameHost {
    pub(super) fn spawn_resolution_tick(self: &Arc<Self>) {
        let host = Arc::clone(self);
        let epoch = self.current_epoch();
        tokio::spawn(async move {
            tokio::time::sleep(host.config.resolution_tick).await;
            host.resolution_tick(epoch);
        });
    }

    /// Clear the start banner after its display window, unless a newer
    /// message replaced it. Does not bump the epoch: a banner fading out
    /// must not invalidate a pending bot move. The sequence number is
    /// monotonic across games, so a timer left over from an aborted game
    /// never matches.
    pub(super) fn spawn_banner_clear(self: &Arc<Self>, seq: u64) {
        let host = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(host.config.banner_duration).await;
            let mut state = host.state.lock();
            if state.clear_message_if(seq) {
                host.commit(&state);
            }
        });
    }

    fn resolution_tick(self: &Arc<Self>, epoch: u64) {
        let mut state = self.state.lock();
        if self.current_epoch() != epoch {
            debug!(epoch, "stale resolution tick dropped");
            return;
        }
        if state.phase != Phase::Resolution || state.outcome.is_some() {
            return;
        }
        let Some(mission_id) = state.mission else {
            return;
        };
        let m = mission(mission_id);

        let cursor = usize::from(state.resolve_cursor);
        if cursor < SLOTS {
            let verdict = judge_slot(&state.board, m, cursor);
            debug!(slot = cursor, passed = verdict.passed, "slot judged");
            state.verdicts.push(verdict);
            state.resolve_cursor += 1;
            self.bump_epoch();
            self.commit(&state);
            self.spawn_resolution_tick();
        } else {
            let outcome = final_outcome(&state.board, m);
            state.outcome = Some(outcome);
            state.set_message(outcome.banner());
            info!(?outcome, "mission resolved");
            self.bump_epoch();
            self.commit(&state);
        }
    }
}
