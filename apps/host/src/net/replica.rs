//! A replica's read-only mirror of the canonical state.

use tracing::debug;

use crate::domain::snapshot::restore;
use crate::domain::state::GameState;
use crate::net::protocol::{ErrorCode, ServerMsg};

/// Client-side view: applies each server message by complete overwrite.
///
/// Because every state update carries the full snapshot, applying one is
/// idempotent and a missed update is fully repaired by the next one. The
/// view never mutates game state locally; it only renders what the host
/// last said.
#[derive(Default)]
pub struct ReplicaView {
    state: Option<GameState>,
    last_error: Option<(ErrorCode, String)>,
}

impl ReplicaView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, msg: ServerMsg) {
        match msg {
            ServerMsg::StateUpdate { state } => {
                self.state = Some(restore(&state));
            }
            ServerMsg::Error { code, message } => {
                debug!(code = code.as_str(), %message, "host rejected command");
                self.last_error = Some((code, message));
            }
            ServerMsg::Reset => {
                self.state = None;
                self.last_error = None;
            }
        }
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Most recent per-peer error feedback, cleared on read.
    pub fn take_error(&mut self) -> Option<(ErrorCode, String)> {
        self.last_error.take()
    }
}
