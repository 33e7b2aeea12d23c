//! Canonical game state and turn math.
//!
//! Exactly one [`GameState`] instance is canonical, owned by the
//! authoritative host; replicas hold read-only mirrors rebuilt from
//! snapshots.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::board::Board;
use crate::domain::cards::Card;
use crate::domain::missions::MissionId;
use crate::domain::resolution::SlotVerdict;

/// Index into the participant list; turn order is seat order, wrapping
/// modulo participant count.
pub type Seat = u8;

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No mission running; replicas may join.
    Lobby,
    /// Hands dealt, waiting for a participant to claim the first turn.
    StartSelection,
    /// Participants place cards in turn order.
    Placement,
    /// The sequencer judges slots one tick at a time; terminal once the
    /// outcome is set (an explicit abort returns to Lobby).
    Resolution,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerKind {
    /// The identity running on this node.
    Host,
    /// A joined replica.
    Remote,
    /// An automated filler seat.
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: Uuid,
    pub display_name: String,
    pub kind: PlayerKind,
    pub hand: Vec<Card>,
}

impl Participant {
    pub fn is_bot(&self) -> bool {
        self.kind == PlayerKind::Bot
    }
}

/// Final verdict of a resolved mission.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Victory,
    Defeat,
}

impl Outcome {
    pub fn banner(self) -> &'static str {
        match self {
            Outcome::Victory => "VICTORY",
            Outcome::Defeat => "DEFEAT",
        }
    }
}

/// The canonical game container, sufficient for pure domain operations.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub phase: Phase,
    /// Mission in effect; `None` only in Lobby. Executable rules are looked
    /// up from the static registry, never stored here.
    pub mission: Option<MissionId>,
    pub board: Board,
    /// Seats in turn order, fixed at game start.
    pub seats: Vec<Participant>,
    /// Seat whose turn it is to place a card.
    pub turn: Seat,
    /// Face-up cards played so far (game-wide allowance: one per seat).
    pub face_up_played: u8,
    /// Cards played so far across all seats.
    pub cards_played: u8,
    /// Next slot to be judged during resolution.
    pub resolve_cursor: u8,
    /// One verdict per judged slot, in slot-traversal order.
    pub verdicts: Vec<SlotVerdict>,
    pub outcome: Option<Outcome>,
    /// Transient system message shown to everyone (e.g. the start banner).
    pub system_message: Option<String>,
    /// Bumped whenever `system_message` is set and carried forward when the
    /// state is replaced at mission start or abort, so a delayed clear never
    /// erases a newer message, including one from a later game.
    pub message_seq: u64,
}

impl GameState {
    pub fn lobby() -> Self {
        Self {
            phase: Phase::Lobby,
            mission: None,
            board: Board::empty(),
            seats: Vec::new(),
            turn: 0,
            face_up_played: 0,
            cards_played: 0,
            resolve_cursor: 0,
            verdicts: Vec::new(),
            outcome: None,
            system_message: None,
            message_seq: 0,
        }
    }

    pub fn seat_count(&self) -> u8 {
        self.seats.len() as u8
    }

    pub fn seat_of(&self, id: Uuid) -> Option<Seat> {
        self.seats
            .iter()
            .position(|p| p.id == id)
            .map(|idx| idx as Seat)
    }

    pub fn participant(&self, seat: Seat) -> Option<&Participant> {
        self.seats.get(usize::from(seat))
    }

    pub fn all_hands_empty(&self) -> bool {
        self.seats.iter().all(|p| p.hand.is_empty())
    }

    pub fn cards_in_hands(&self) -> usize {
        self.seats.iter().map(|p| p.hand.len()).sum()
    }

    /// Set the transient system message; returns the sequence number to pass
    /// to [`GameState::clear_message_if`] from a delayed clear.
    pub fn set_message(&mut self, message: impl Into<String>) -> u64 {
        self.system_message = Some(message.into());
        self.message_seq += 1;
        self.message_seq
    }

    /// Clear the system message only if no newer message replaced it.
    /// Returns true when something was cleared.
    pub fn clear_message_if(&mut self, seq: u64) -> bool {
        if self.message_seq == seq && self.system_message.is_some() {
            self.system_message = None;
            true
        } else {
            false
        }
    }
}

/// Returns the next seat in turn order (wrapping).
#[inline]
pub fn next_seat(seat: Seat, count: u8) -> Seat {
    debug_assert!(count > 0, "seat math requires at least one seat");
    (seat + 1) % count
}
