//! Unit tests for the snapshot format and restore semantics.

use uuid::Uuid;

use crate::domain::{
    restore, snapshot, Card, GameSnapshot, GameState, MissionId, Participant, Phase, PlayedCard,
    PlayerKind, Suit,
};

fn mid_game_state() -> GameState {
    let mut state = GameState {
        phase: Phase::Placement,
        mission: Some(MissionId::ClockI),
        turn: 1,
        face_up_played: 2,
        cards_played: 3,
        ..GameState::lobby()
    };
    state.seats = vec![
        Participant {
            id: Uuid::new_v4(),
            display_name: "Ana".to_string(),
            kind: PlayerKind::Host,
            hand: vec![Card {
                suit: Suit::Solar,
                value: 7,
            }],
        },
        Participant {
            id: Uuid::new_v4(),
            display_name: "Bot 2".to_string(),
            kind: PlayerKind::Bot,
            hand: vec![Card {
                suit: Suit::Lunar,
                value: 3,
            }],
        },
    ];
    state.board.slots[0].push(PlayedCard {
        card: Card {
            suit: Suit::Lunar,
            value: 9,
        },
        face_up: true,
        owner: 0,
    });
    state.set_message("Ana starts!");
    state
}

#[test]
fn restore_mirrors_the_snapshot() {
    let state = mid_game_state();
    let restored = restore(&snapshot(&state));

    assert_eq!(restored.phase, state.phase);
    assert_eq!(restored.mission, state.mission);
    assert_eq!(restored.board, state.board);
    assert_eq!(restored.seats, state.seats);
    assert_eq!(restored.turn, state.turn);
    assert_eq!(restored.face_up_played, state.face_up_played);
    assert_eq!(restored.cards_played, state.cards_played);
    assert_eq!(restored.system_message, state.system_message);
    // The message sequence is host-local and starts over on restore.
    assert_eq!(restored.message_seq, 0);
}

#[test]
fn snapshot_round_trips_through_json() {
    let snap = snapshot(&mid_game_state());
    let text = serde_json::to_string(&snap).unwrap();
    let back: GameSnapshot = serde_json::from_str(&text).unwrap();
    assert_eq!(back, snap);
}

#[test]
fn snapshot_json_field_names_are_stable() {
    let snap = snapshot(&mid_game_state());
    let value: serde_json::Value = serde_json::to_value(&snap).unwrap();
    assert_eq!(value["phase"], "placement");
    assert_eq!(value["mission"], "clock_i");
    assert_eq!(value["seats"][1]["kind"], "bot");
    assert_eq!(value["board"]["slots"][0][0]["face_up"], true);
    assert_eq!(value["system_message"], "Ana starts!");
}

#[test]
fn lobby_snapshot_restores_to_lobby() {
    let restored = restore(&snapshot(&GameState::lobby()));
    assert_eq!(restored.phase, Phase::Lobby);
    assert!(restored.mission.is_none());
    assert!(restored.seats.is_empty());
}
