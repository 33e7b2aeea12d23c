//! The apply-move operation: layered validation, then mutation.
//!
//! Validation runs in a fixed order and a failing step rejects the move with
//! zero side effects. The submitter's turn is always re-checked here even if
//! a replica already checked it locally, because replicas are untrusted.

use crate::domain::board::PlayedCard;
use crate::domain::board::SLOTS;
use crate::domain::cards::Card;
use crate::domain::missions::mission;
use crate::domain::state::{next_seat, GameState, Phase, Seat};
use crate::errors::domain::{DomainError, RejectKind};

/// Whether the mission's placement restriction applies to this move.
///
/// Bot moves skip it: the selector already filtered by the restriction, and
/// its fallback move must land even when no legal move exists, so the game
/// can never stall on an over-constrained hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementCheck {
    Enforce,
    Skip,
}

/// Validate and apply one move. On success the card leaves the owner's hand,
/// lands on the board with face and owner resolved, counters advance, the
/// turn wraps, and the phase flips to Resolution the instant every hand is
/// empty.
pub fn apply_move(
    state: &mut GameState,
    seat: Seat,
    card: Card,
    slot: usize,
    face_up: bool,
    check: PlacementCheck,
) -> Result<(), DomainError> {
    if state.phase != Phase::Placement {
        return Err(DomainError::rejected(
            RejectKind::PhaseMismatch,
            "Not in placement phase",
        ));
    }
    if seat != state.turn {
        return Err(DomainError::rejected(RejectKind::OutOfTurn, "Not your turn"));
    }
    if face_up && state.face_up_played >= state.seat_count() {
        return Err(DomainError::rejected(
            RejectKind::FaceUpExhausted,
            "No face-up plays left",
        ));
    }
    if slot >= SLOTS {
        return Err(DomainError::rejected(RejectKind::InvalidSlot, "No such slot"));
    }

    let mission_id = state
        .mission
        .ok_or_else(|| DomainError::invariant("No mission in effect during placement"))?;

    let hand = &state.seats[usize::from(seat)].hand;
    let held = hand.iter().position(|c| *c == card).ok_or_else(|| {
        DomainError::rejected(RejectKind::CardNotHeld, "Card not in hand")
    })?;

    if check == PlacementCheck::Enforce {
        let placement = mission(mission_id).check_placement(&card, slot, &state.board, state.cards_played);
        if !placement.passed {
            return Err(DomainError::rejected(
                RejectKind::Placement,
                placement
                    .message
                    .unwrap_or_else(|| "Placement not allowed".to_string()),
            ));
        }
    }

    // Validation complete; mutate.
    let card = state.seats[usize::from(seat)].hand.remove(held);
    state.board.slots[slot].push(PlayedCard {
        card,
        face_up,
        owner: seat,
    });
    state.cards_played += 1;
    if face_up {
        state.face_up_played += 1;
    }
    state.turn = next_seat(state.turn, state.seat_count());

    if state.all_hands_empty() {
        state.phase = Phase::Resolution;
        state.resolve_cursor = 0;
        state.verdicts.clear();
    }

    Ok(())
}
