//! The board: six fixed slots accumulating played cards.

use serde::{Deserialize, Serialize};

use crate::domain::cards::Card;
use crate::domain::state::Seat;

/// Fixed number of board positions.
pub const SLOTS: usize = 6;

/// A card that has been placed on the board. Face and owner are set exactly
/// once, at play time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedCard {
    pub card: Card,
    pub face_up: bool,
    pub owner: Seat,
}

/// The fixed sequence of slots; created empty at game start, never shrinks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub slots: [Vec<PlayedCard>; SLOTS],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            slots: Default::default(),
        }
    }

    /// Sum of card values in one slot. Face orientation does not matter.
    pub fn slot_sum(&self, slot: usize) -> u16 {
        self.slots[slot]
            .iter()
            .map(|p| u16::from(p.card.value))
            .sum()
    }

    pub fn total_cards(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }
}

/// Slots are displayed 1-based in every user-visible message.
#[inline]
pub fn display_slot(slot: usize) -> usize {
    slot + 1
}
