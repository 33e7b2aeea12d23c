//! Domain layer: pure game logic types and helpers.

pub mod board;
pub mod cards;
pub mod dealing;
pub mod missions;
pub mod placement;
pub mod resolution;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod tests_missions;
#[cfg(test)]
mod tests_placement;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use board::{display_slot, Board, PlayedCard, SLOTS};
pub use cards::{Card, Suit};
pub use dealing::{deal, full_deck, hand_size_for, shuffled_deck, DEAL_TOTAL};
pub use missions::{mission, Mission, MissionId, RuleCheck};
pub use placement::{apply_move, PlacementCheck};
pub use resolution::{final_check, final_outcome, judge_slot, SlotVerdict};
pub use snapshot::{restore, snapshot, GameSnapshot};
pub use state::{next_seat, GameState, Outcome, Participant, Phase, PlayerKind, Seat};
