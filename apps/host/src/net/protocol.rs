//! Host <-> replica wire protocol.
//!
//! State flows one way: the host broadcasts complete snapshots and replicas
//! overwrite their whole view on each one. Replicas never receive diffs and
//! never send state, only commands.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::cards::Card;
use crate::domain::snapshot::GameSnapshot;

/// Commands a replica may send to the host. Every command names the sender's
/// participant identity; the host re-validates it against the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMsg {
    /// First message on a connection. A fresh identity joins during Lobby;
    /// a known identity reconnects mid-game and gets the current snapshot.
    Join { identity: Uuid, name: String },

    /// Place one card. The host validates everything; a replica-side check
    /// is a courtesy only.
    Move {
        participant_id: Uuid,
        card: Card,
        slot: usize,
        face_up: bool,
    },

    /// Claim the first turn during start selection.
    ClaimStart { participant_id: Uuid },
}

#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg {
    /// Complete replacement state. Always the full snapshot, never a diff.
    StateUpdate { state: GameSnapshot },

    /// Feedback for the originating peer only; never broadcast.
    Error { code: ErrorCode, message: String },

    /// The host aborted the mission; replicas drop their view and return
    /// to the lobby screen.
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Unparseable or structurally invalid message.
    BadRequest,
    /// Unknown identity, or a command issued for someone else's seat.
    Forbidden,
    /// A well-formed command the rules rejected.
    Rejected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "bad_request",
            ErrorCode::Forbidden => "forbidden",
            ErrorCode::Rejected => "rejected",
        }
    }
}
