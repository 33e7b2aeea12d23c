//! Declarative mission rule sets.
//!
//! A mission is a static record of pure validation functions plus layout
//! hints, selected by identifier from a registry shared by host and replica
//! code paths. Placement restrictions run strictly before a move mutates
//! state; slot rules run during resolution; the global rule runs once at the
//! end of resolution. Where a mission enforces the same constraint at both
//! placement and resolution time, the two layers must agree.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::board::{display_slot, Board, PlayedCard, SLOTS};
use crate::domain::cards::{Card, Suit};

/// Result of one pure rule evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCheck {
    pub passed: bool,
    pub message: Option<String>,
}

impl RuleCheck {
    pub fn pass() -> Self {
        Self {
            passed: true,
            message: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: Some(message.into()),
        }
    }
}

/// Judges one slot's final contents during resolution.
pub type SlotRule = fn(&[PlayedCard]) -> RuleCheck;

/// Evaluated before a move is accepted: (card, target slot, board, cards
/// played so far).
pub type PlacementRule = fn(&Card, usize, &Board, u8) -> RuleCheck;

/// Evaluated once over the whole board at the end of resolution.
pub type GlobalRule = fn(&Board) -> RuleCheck;

/// Stable mission identifiers; snapshots and saved games reference missions
/// by this identifier only.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionId {
    ClockI,
    ClockII,
    ClockIII,
    ClockIV,
}

impl MissionId {
    pub fn as_str(self) -> &'static str {
        match self {
            MissionId::ClockI => "clock_i",
            MissionId::ClockII => "clock_ii",
            MissionId::ClockIII => "clock_iii",
            MissionId::ClockIV => "clock_iv",
        }
    }

    pub const ALL: [MissionId; 4] = [
        MissionId::ClockI,
        MissionId::ClockII,
        MissionId::ClockIII,
        MissionId::ClockIV,
    ];
}

impl fmt::Display for MissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MissionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clock_i" => Ok(MissionId::ClockI),
            "clock_ii" => Ok(MissionId::ClockII),
            "clock_iii" => Ok(MissionId::ClockIII),
            "clock_iv" => Ok(MissionId::ClockIV),
            other => Err(format!("unknown mission id: {other}")),
        }
    }
}

/// One mission's complete declarative rule set.
pub struct Mission {
    pub id: MissionId,
    pub title: &'static str,
    /// First slot of the mission-defined traversal order used by the final
    /// validation (wrapping modulo slot count).
    pub start_slot: usize,
    /// Optional per-slot sum ceiling, checked on the placement path and by
    /// the global rule.
    pub global_cap: Option<u16>,
    pub slot_rules: [Option<SlotRule>; SLOTS],
    /// Presentation-only sum hints per slot; never enforced.
    pub sum_hints: [Option<&'static str>; SLOTS],
    pub placement: Option<PlacementRule>,
    pub global_rule: Option<GlobalRule>,
}

impl Mission {
    /// Full placement-time validation: the mission restriction first, then
    /// the global cap. Zero side effects.
    pub fn check_placement(
        &self,
        card: &Card,
        slot: usize,
        board: &Board,
        cards_played: u8,
    ) -> RuleCheck {
        if let Some(rule) = self.placement {
            let check = rule(card, slot, board, cards_played);
            if !check.passed {
                return check;
            }
        }
        if let Some(cap) = self.global_cap {
            if board.slot_sum(slot) + u16::from(card.value) > cap {
                return RuleCheck::fail(format!(
                    "Slot {} would exceed {cap}",
                    display_slot(slot)
                ));
            }
        }
        RuleCheck::pass()
    }
}

/// Resolve a mission's executable rules from its identifier.
pub fn mission(id: MissionId) -> &'static Mission {
    match id {
        MissionId::ClockI => &CLOCK_I,
        MissionId::ClockII => &CLOCK_II,
        MissionId::ClockIII => &CLOCK_III,
        MissionId::ClockIV => &CLOCK_IV,
    }
}

// ---------------------------------------------------------------------------
// Shared rule helpers
// ---------------------------------------------------------------------------

fn exactly_n(cards: &[PlayedCard], slot: usize, n: usize) -> RuleCheck {
    if cards.len() == n {
        RuleCheck::pass()
    } else {
        RuleCheck::fail(format!(
            "Slot {} needs exactly {n} cards (has {})",
            display_slot(slot),
            cards.len()
        ))
    }
}

fn sum_in_range(cards: &[PlayedCard], slot: usize, lo: u16, hi: u16) -> RuleCheck {
    let sum: u16 = cards.iter().map(|p| u16::from(p.card.value)).sum();
    if (lo..=hi).contains(&sum) {
        RuleCheck::pass()
    } else {
        RuleCheck::fail(format!(
            "Slot {} sum must be {lo}-{hi} (is {sum})",
            display_slot(slot)
        ))
    }
}

fn ordinal(n: u8) -> String {
    match n {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        n => format!("{n}th"),
    }
}

fn nth_card_must_target(
    slot: usize,
    cards_played: u8,
    nth: u8,
    required_slot: usize,
) -> RuleCheck {
    if cards_played == nth - 1 && slot != required_slot {
        RuleCheck::fail(format!(
            "{} card must go to Slot {}",
            ordinal(nth),
            display_slot(required_slot)
        ))
    } else {
        RuleCheck::pass()
    }
}

// ---------------------------------------------------------------------------
// Clock I: slot 0 takes exactly one Lunar card; slot 5 ends with 3 cards.
// ---------------------------------------------------------------------------

fn clock_i_placement(card: &Card, slot: usize, board: &Board, _played: u8) -> RuleCheck {
    if slot == 0 {
        if !board.slots[0].is_empty() {
            return RuleCheck::fail("Slot 1 is full (Max 1)");
        }
        if card.suit != Suit::Lunar {
            return RuleCheck::fail("Slot 1 accepts only Lunar cards");
        }
    }
    RuleCheck::pass()
}

fn clock_i_slot0(cards: &[PlayedCard]) -> RuleCheck {
    if cards.len() == 1 && cards[0].card.suit == Suit::Lunar {
        RuleCheck::pass()
    } else {
        RuleCheck::fail("Slot 1 needs exactly 1 Lunar card")
    }
}

fn clock_i_slot5(cards: &[PlayedCard]) -> RuleCheck {
    exactly_n(cards, 5, 3)
}

static CLOCK_I: Mission = Mission {
    id: MissionId::ClockI,
    title: "Clock I",
    start_slot: 0,
    global_cap: None,
    slot_rules: [Some(clock_i_slot0), None, None, None, None, Some(clock_i_slot5)],
    sum_hints: [None, None, None, None, None, None],
    placement: Some(clock_i_placement),
    global_rule: None,
};

// ---------------------------------------------------------------------------
// Clock II: slot 2 sums to 8-12; slot 3 ends with 3 cards.
// ---------------------------------------------------------------------------

fn clock_ii_slot2(cards: &[PlayedCard]) -> RuleCheck {
    sum_in_range(cards, 2, 8, 12)
}

fn clock_ii_slot3(cards: &[PlayedCard]) -> RuleCheck {
    exactly_n(cards, 3, 3)
}

static CLOCK_II: Mission = Mission {
    id: MissionId::ClockII,
    title: "Clock II",
    start_slot: 0,
    global_cap: None,
    slot_rules: [None, None, Some(clock_ii_slot2), Some(clock_ii_slot3), None, None],
    sum_hints: [None, None, Some("8-12"), None, None, None],
    placement: None,
    global_rule: None,
};

// ---------------------------------------------------------------------------
// Clock III: forced opening placements; slot 5 sums to 20-30.
// ---------------------------------------------------------------------------

fn clock_iii_placement(_card: &Card, slot: usize, _board: &Board, played: u8) -> RuleCheck {
    let first = nth_card_must_target(slot, played, 1, 2);
    if !first.passed {
        return first;
    }
    nth_card_must_target(slot, played, 2, 1)
}

fn clock_iii_slot5(cards: &[PlayedCard]) -> RuleCheck {
    sum_in_range(cards, 5, 20, 30)
}

static CLOCK_III: Mission = Mission {
    id: MissionId::ClockIII,
    title: "Clock III",
    start_slot: 2,
    global_cap: None,
    slot_rules: [None, None, None, None, None, Some(clock_iii_slot5)],
    sum_hints: [None, None, None, None, None, Some("20-30")],
    placement: Some(clock_iii_placement),
    global_rule: None,
};

// ---------------------------------------------------------------------------
// Clock IV: forced 6th placement; slot 3 takes one card of each suit
// (enforced incrementally); every slot sum stays at or under 24.
// ---------------------------------------------------------------------------

const CLOCK_IV_CAP: u16 = 24;

fn clock_iv_placement(card: &Card, slot: usize, board: &Board, played: u8) -> RuleCheck {
    let sixth = nth_card_must_target(slot, played, 6, 0);
    if !sixth.passed {
        return sixth;
    }
    if slot == 3 {
        let pile = &board.slots[3];
        if pile.len() >= 2 {
            return RuleCheck::fail("Slot 4 is full (Max 2)");
        }
        if pile.iter().any(|p| p.card.suit == card.suit) {
            return RuleCheck::fail(format!("Slot 4 already holds a {} card", card.suit));
        }
    }
    RuleCheck::pass()
}

fn clock_iv_slot3(cards: &[PlayedCard]) -> RuleCheck {
    let solar = cards.iter().filter(|p| p.card.suit == Suit::Solar).count();
    let lunar = cards.iter().filter(|p| p.card.suit == Suit::Lunar).count();
    if solar == 1 && lunar == 1 {
        RuleCheck::pass()
    } else {
        RuleCheck::fail("Slot 4 needs one card of each suit")
    }
}

fn clock_iv_global(board: &Board) -> RuleCheck {
    for slot in 0..SLOTS {
        if board.slot_sum(slot) > CLOCK_IV_CAP {
            return RuleCheck::fail(format!(
                "Slot {} exceeds {CLOCK_IV_CAP}",
                display_slot(slot)
            ));
        }
    }
    RuleCheck::pass()
}

static CLOCK_IV: Mission = Mission {
    id: MissionId::ClockIV,
    title: "Clock IV",
    start_slot: 0,
    global_cap: Some(CLOCK_IV_CAP),
    slot_rules: [None, None, None, Some(clock_iv_slot3), None, None],
    sum_hints: [
        Some("<=24"),
        Some("<=24"),
        Some("<=24"),
        Some("<=24"),
        Some("<=24"),
        Some("<=24"),
    ],
    placement: Some(clock_iv_placement),
    global_rule: Some(clock_iv_global),
};
