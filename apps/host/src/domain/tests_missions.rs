//! Unit tests for the four Clock rule sets, pinned to their exact
//! user-visible messages and constants.

use crate::domain::{mission, Board, Card, MissionId, PlayedCard, Suit};

fn solar(value: u8) -> Card {
    Card {
        suit: Suit::Solar,
        value,
    }
}

fn lunar(value: u8) -> Card {
    Card {
        suit: Suit::Lunar,
        value,
    }
}

fn played(card: Card) -> PlayedCard {
    PlayedCard {
        card,
        face_up: false,
        owner: 0,
    }
}

#[test]
fn registry_resolves_every_mission() {
    for id in MissionId::ALL {
        assert_eq!(mission(id).id, id);
    }
    assert_eq!(mission(MissionId::ClockI).title, "Clock I");
}

#[test]
fn mission_ids_round_trip_as_strings() {
    for id in MissionId::ALL {
        assert_eq!(id.as_str().parse::<MissionId>().unwrap(), id);
    }
    assert!("clock_v".parse::<MissionId>().is_err());
}

// Clock I

#[test]
fn clock_i_slot0_takes_one_lunar_card() {
    let m = mission(MissionId::ClockI);
    let board = Board::empty();

    let ok = m.check_placement(&lunar(4), 0, &board, 0);
    assert!(ok.passed);

    let wrong_suit = m.check_placement(&solar(4), 0, &board, 0);
    assert!(!wrong_suit.passed);
    assert_eq!(
        wrong_suit.message.as_deref(),
        Some("Slot 1 accepts only Lunar cards")
    );
}

#[test]
fn clock_i_slot0_rejects_a_second_card() {
    let m = mission(MissionId::ClockI);
    let mut board = Board::empty();
    board.slots[0].push(played(lunar(4)));

    let overflow = m.check_placement(&lunar(9), 0, &board, 1);
    assert!(!overflow.passed);
    assert_eq!(overflow.message.as_deref(), Some("Slot 1 is full (Max 1)"));

    // Other slots stay open.
    assert!(m.check_placement(&lunar(9), 3, &board, 1).passed);
}

#[test]
fn clock_i_slot_rules_agree_with_placement() {
    let m = mission(MissionId::ClockI);
    let rule = m.slot_rules[0].unwrap();
    assert!(rule(&[played(lunar(4))]).passed);
    assert!(!rule(&[played(solar(4))]).passed);
    assert!(!rule(&[played(lunar(4)), played(lunar(5))]).passed);

    let slot5 = m.slot_rules[5].unwrap();
    assert!(slot5(&[played(solar(1)), played(solar(2)), played(solar(3))]).passed);
    assert!(!slot5(&[played(solar(1))]).passed);
}

// Clock II

#[test]
fn clock_ii_slot2_sum_window() {
    let m = mission(MissionId::ClockII);
    let rule = m.slot_rules[2].unwrap();
    assert!(rule(&[played(solar(8))]).passed);
    assert!(rule(&[played(solar(5)), played(lunar(7))]).passed);
    assert!(!rule(&[played(solar(7))]).passed);
    assert!(!rule(&[played(solar(6)), played(lunar(7))]).passed);
}

#[test]
fn clock_ii_has_no_placement_restriction() {
    let m = mission(MissionId::ClockII);
    let board = Board::empty();
    for slot in 0..crate::domain::SLOTS {
        assert!(m.check_placement(&solar(12), slot, &board, 0).passed);
    }
    assert_eq!(m.sum_hints[2], Some("8-12"));
}

// Clock III

#[test]
fn clock_iii_forces_the_first_two_placements() {
    let m = mission(MissionId::ClockIII);
    let board = Board::empty();

    let misdirected = m.check_placement(&solar(3), 0, &board, 0);
    assert!(!misdirected.passed);
    assert_eq!(
        misdirected.message.as_deref(),
        Some("1st card must go to Slot 3")
    );

    assert!(m.check_placement(&solar(3), 2, &board, 0).passed);

    let second = m.check_placement(&solar(3), 4, &board, 1);
    assert!(!second.passed);
    assert_eq!(second.message.as_deref(), Some("2nd card must go to Slot 2"));
    assert!(m.check_placement(&solar(3), 1, &board, 1).passed);

    // From the third card on, anything goes.
    assert!(m.check_placement(&solar(3), 0, &board, 2).passed);
}

#[test]
fn clock_iii_slot5_window_and_start_slot() {
    let m = mission(MissionId::ClockIII);
    assert_eq!(m.start_slot, 2);
    let rule = m.slot_rules[5].unwrap();
    assert!(rule(&[played(solar(10)), played(lunar(10))]).passed);
    assert!(!rule(&[played(solar(9)), played(lunar(10))]).passed);
    assert!(!rule(&[played(solar(12)), played(lunar(12)), played(solar(7))]).passed);
}

// Clock IV

#[test]
fn clock_iv_forces_the_sixth_placement() {
    let m = mission(MissionId::ClockIV);
    let board = Board::empty();

    let misdirected = m.check_placement(&solar(2), 4, &board, 5);
    assert!(!misdirected.passed);
    assert_eq!(
        misdirected.message.as_deref(),
        Some("6th card must go to Slot 1")
    );
    assert!(m.check_placement(&solar(2), 0, &board, 5).passed);
}

#[test]
fn clock_iv_slot3_is_one_of_each_suit() {
    let m = mission(MissionId::ClockIV);
    let mut board = Board::empty();
    board.slots[3].push(played(solar(5)));

    let duplicate = m.check_placement(&solar(9), 3, &board, 2);
    assert!(!duplicate.passed);
    assert_eq!(
        duplicate.message.as_deref(),
        Some("Slot 4 already holds a Solar card")
    );
    assert!(m.check_placement(&lunar(9), 3, &board, 2).passed);

    board.slots[3].push(played(lunar(9)));
    let full = m.check_placement(&solar(1), 3, &board, 3);
    assert!(!full.passed);
    assert_eq!(full.message.as_deref(), Some("Slot 4 is full (Max 2)"));

    let rule = m.slot_rules[3].unwrap();
    assert!(rule(&board.slots[3]).passed);
    assert!(!rule(&[played(solar(5)), played(solar(9))]).passed);
}

#[test]
fn clock_iv_cap_applies_on_the_placement_path() {
    let m = mission(MissionId::ClockIV);
    let mut board = Board::empty();
    board.slots[1].push(played(solar(12)));
    board.slots[1].push(played(lunar(12)));

    let over = m.check_placement(&solar(1), 1, &board, 2);
    assert!(!over.passed);
    assert_eq!(over.message.as_deref(), Some("Slot 2 would exceed 24"));

    // Exactly at the cap is allowed.
    board.slots[1].pop();
    board.slots[1].push(played(lunar(11)));
    assert!(m.check_placement(&solar(1), 1, &board, 2).passed);
}

#[test]
fn clock_iv_global_rule_enforces_the_cap() {
    let m = mission(MissionId::ClockIV);
    let rule = m.global_rule.unwrap();
    let mut board = Board::empty();
    board.slots[4].push(played(solar(12)));
    board.slots[4].push(played(lunar(12)));
    assert!(rule(&board).passed);

    board.slots[4].push(played(solar(1)));
    let over = rule(&board);
    assert!(!over.passed);
    assert_eq!(over.message.as_deref(), Some("Slot 5 exceeds 24"));
}
