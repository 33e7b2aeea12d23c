//! Full-state snapshots: the single replication and persistence format.
//!
//! A snapshot always carries the complete canonical state with the mission
//! referenced by identifier only; executable rules are re-armed from the
//! registry on restore. Replicas overwrite their entire view on every
//! snapshot, never merging partial updates.

use serde::{Deserialize, Serialize};

use crate::domain::board::Board;
use crate::domain::missions::MissionId;
use crate::domain::resolution::SlotVerdict;
use crate::domain::state::{GameState, Outcome, Participant, Phase, Seat};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub mission: Option<MissionId>,
    pub board: Board,
    pub seats: Vec<Participant>,
    pub turn: Seat,
    pub face_up_played: u8,
    pub cards_played: u8,
    pub resolve_cursor: u8,
    pub verdicts: Vec<SlotVerdict>,
    pub outcome: Option<Outcome>,
    pub system_message: Option<String>,
}

/// Produce a snapshot of the current canonical state. Pure; never panics.
pub fn snapshot(state: &GameState) -> GameSnapshot {
    GameSnapshot {
        phase: state.phase,
        mission: state.mission,
        board: state.board.clone(),
        seats: state.seats.clone(),
        turn: state.turn,
        face_up_played: state.face_up_played,
        cards_played: state.cards_played,
        resolve_cursor: state.resolve_cursor,
        verdicts: state.verdicts.clone(),
        outcome: state.outcome,
        system_message: state.system_message.clone(),
    }
}

/// Rebuild canonical state from a snapshot (restore after a crash, or a
/// replica applying a state update).
pub fn restore(snap: &GameSnapshot) -> GameState {
    GameState {
        phase: snap.phase,
        mission: snap.mission,
        board: snap.board.clone(),
        seats: snap.seats.clone(),
        turn: snap.turn,
        face_up_played: snap.face_up_played,
        cards_played: snap.cards_played,
        resolve_cursor: snap.resolve_cursor,
        verdicts: snap.verdicts.clone(),
        outcome: snap.outcome,
        system_message: snap.system_message.clone(),
        message_seq: 0,
    }
}
