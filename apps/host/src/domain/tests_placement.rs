//! Unit tests for the apply-move validation layers and mutation.

use uuid::Uuid;

use crate::domain::{
    apply_move, Card, GameState, MissionId, Participant, Phase, PlacementCheck, PlayerKind, Suit,
};
use crate::errors::domain::RejectKind;

fn card(suit: Suit, value: u8) -> Card {
    Card { suit, value }
}

fn seat(name: &str, hand: Vec<Card>) -> Participant {
    Participant {
        id: Uuid::new_v4(),
        display_name: name.to_string(),
        kind: PlayerKind::Remote,
        hand,
    }
}

/// Three seats with fixed four-card hands, Clock II in effect (no placement
/// restriction of its own).
fn placement_state() -> GameState {
    let hands = [
        vec![
            card(Suit::Solar, 1),
            card(Suit::Solar, 4),
            card(Suit::Lunar, 2),
            card(Suit::Lunar, 8),
        ],
        vec![
            card(Suit::Solar, 2),
            card(Suit::Solar, 9),
            card(Suit::Lunar, 3),
            card(Suit::Lunar, 11),
        ],
        vec![
            card(Suit::Solar, 5),
            card(Suit::Solar, 12),
            card(Suit::Lunar, 6),
            card(Suit::Lunar, 7),
        ],
    ];
    GameState {
        phase: Phase::Placement,
        mission: Some(MissionId::ClockII),
        seats: hands
            .into_iter()
            .enumerate()
            .map(|(i, hand)| seat(&format!("p{i}"), hand))
            .collect(),
        ..GameState::lobby()
    }
}

#[test]
fn move_mutates_hand_board_counters_and_turn() {
    let mut state = placement_state();
    let played = card(Suit::Solar, 4);

    apply_move(&mut state, 0, played, 2, true, PlacementCheck::Enforce).unwrap();

    assert_eq!(state.seats[0].hand.len(), 3);
    assert!(!state.seats[0].hand.contains(&played));
    assert_eq!(state.board.slots[2].len(), 1);
    assert_eq!(state.board.slots[2][0].card, played);
    assert!(state.board.slots[2][0].face_up);
    assert_eq!(state.board.slots[2][0].owner, 0);
    assert_eq!(state.cards_played, 1);
    assert_eq!(state.face_up_played, 1);
    assert_eq!(state.turn, 1);
    assert_eq!(state.phase, Phase::Placement);
}

#[test]
fn rejects_outside_placement_phase() {
    let mut state = placement_state();
    state.phase = Phase::StartSelection;
    let err = apply_move(
        &mut state,
        0,
        card(Suit::Solar, 1),
        0,
        false,
        PlacementCheck::Enforce,
    )
    .unwrap_err();
    assert_eq!(err.reject_kind(), Some(RejectKind::PhaseMismatch));
}

#[test]
fn rejects_out_of_turn() {
    let mut state = placement_state();
    let err = apply_move(
        &mut state,
        1,
        card(Suit::Solar, 2),
        0,
        false,
        PlacementCheck::Enforce,
    )
    .unwrap_err();
    assert_eq!(err.reject_kind(), Some(RejectKind::OutOfTurn));
    assert_eq!(err.detail(), "Not your turn");
}

#[test]
fn rejects_face_up_beyond_allowance() {
    let mut state = placement_state();
    state.face_up_played = state.seat_count();
    let err = apply_move(
        &mut state,
        0,
        card(Suit::Solar, 1),
        0,
        true,
        PlacementCheck::Enforce,
    )
    .unwrap_err();
    assert_eq!(err.reject_kind(), Some(RejectKind::FaceUpExhausted));

    // Face-down is still fine.
    apply_move(
        &mut state,
        0,
        card(Suit::Solar, 1),
        0,
        false,
        PlacementCheck::Enforce,
    )
    .unwrap();
}

#[test]
fn rejects_bad_slot_and_unheld_card() {
    let mut state = placement_state();
    let err = apply_move(
        &mut state,
        0,
        card(Suit::Solar, 1),
        6,
        false,
        PlacementCheck::Enforce,
    )
    .unwrap_err();
    assert_eq!(err.reject_kind(), Some(RejectKind::InvalidSlot));

    // Seat 1 holds solar 9, seat 0 does not.
    let err = apply_move(
        &mut state,
        0,
        card(Suit::Solar, 9),
        0,
        false,
        PlacementCheck::Enforce,
    )
    .unwrap_err();
    assert_eq!(err.reject_kind(), Some(RejectKind::CardNotHeld));
}

#[test]
fn placement_restriction_enforced_with_mission_message() {
    let mut state = placement_state();
    state.mission = Some(MissionId::ClockI);
    let err = apply_move(
        &mut state,
        0,
        card(Suit::Solar, 1),
        0,
        false,
        PlacementCheck::Enforce,
    )
    .unwrap_err();
    assert_eq!(err.reject_kind(), Some(RejectKind::Placement));
    assert_eq!(err.detail(), "Slot 1 accepts only Lunar cards");
}

#[test]
fn skip_bypasses_the_placement_restriction_only() {
    let mut state = placement_state();
    state.mission = Some(MissionId::ClockI);

    apply_move(
        &mut state,
        0,
        card(Suit::Solar, 1),
        0,
        false,
        PlacementCheck::Skip,
    )
    .unwrap();
    assert_eq!(state.board.slots[0].len(), 1);

    // Turn order still applies to skipped checks.
    let err = apply_move(
        &mut state,
        0,
        card(Suit::Solar, 4),
        1,
        false,
        PlacementCheck::Skip,
    )
    .unwrap_err();
    assert_eq!(err.reject_kind(), Some(RejectKind::OutOfTurn));
}

#[test]
fn rejection_leaves_state_untouched() {
    let mut state = placement_state();
    state.mission = Some(MissionId::ClockI);
    let before = state.clone();

    apply_move(
        &mut state,
        0,
        card(Suit::Solar, 1),
        0,
        false,
        PlacementCheck::Enforce,
    )
    .unwrap_err();

    assert_eq!(state, before);
}

#[test]
fn clock_i_slot0_takes_one_lunar_then_overflows() {
    let mut state = placement_state();
    state.mission = Some(MissionId::ClockI);

    apply_move(
        &mut state,
        0,
        card(Suit::Lunar, 2),
        0,
        false,
        PlacementCheck::Enforce,
    )
    .unwrap();

    let err = apply_move(
        &mut state,
        1,
        card(Suit::Lunar, 3),
        0,
        false,
        PlacementCheck::Enforce,
    )
    .unwrap_err();
    assert_eq!(err.detail(), "Slot 1 is full (Max 1)");
}

#[test]
fn clock_iii_first_move_is_forced_to_slot_three() {
    let mut state = placement_state();
    state.mission = Some(MissionId::ClockIII);

    let err = apply_move(
        &mut state,
        0,
        card(Suit::Solar, 1),
        0,
        false,
        PlacementCheck::Enforce,
    )
    .unwrap_err();
    assert_eq!(err.detail(), "1st card must go to Slot 3");

    // Same card redirected to the required slot lands.
    apply_move(
        &mut state,
        0,
        card(Suit::Solar, 1),
        2,
        false,
        PlacementCheck::Enforce,
    )
    .unwrap();
    assert_eq!(state.board.slots[2].len(), 1);
}

#[test]
fn four_hands_of_three_empty_after_twelve_moves() {
    use crate::domain::{deal, shuffled_deck, DEAL_TOTAL};

    let hands = deal(&shuffled_deck(21), 4).unwrap();
    let mut state = GameState {
        phase: Phase::Placement,
        mission: Some(MissionId::ClockII),
        seats: hands
            .into_iter()
            .enumerate()
            .map(|(i, hand)| {
                assert_eq!(hand.len(), 3);
                seat(&format!("p{i}"), hand)
            })
            .collect(),
        ..GameState::lobby()
    };

    for played in 0..DEAL_TOTAL {
        let turn = state.turn;
        let next = state.seats[usize::from(turn)].hand[0];
        apply_move(&mut state, turn, next, played % 6, false, PlacementCheck::Enforce).unwrap();
    }

    assert!(state.all_hands_empty());
    assert_eq!(state.phase, Phase::Resolution);
    assert_eq!(state.resolve_cursor, 0);
}

#[test]
fn last_card_flips_to_resolution() {
    let mut state = placement_state();
    // Leave one card in one hand, empty the rest.
    for p in &mut state.seats {
        p.hand.clear();
    }
    state.seats[2].hand.push(card(Suit::Lunar, 6));
    state.turn = 2;
    state.verdicts.push(crate::domain::SlotVerdict {
        slot: 0,
        passed: true,
        message: None,
    });

    apply_move(
        &mut state,
        2,
        card(Suit::Lunar, 6),
        5,
        false,
        PlacementCheck::Enforce,
    )
    .unwrap();

    assert_eq!(state.phase, Phase::Resolution);
    assert_eq!(state.resolve_cursor, 0);
    assert!(state.verdicts.is_empty());
}
