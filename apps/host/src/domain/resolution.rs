//! End-of-game resolution: per-slot verdicts and the independent final
//! validation.

use serde::{Deserialize, Serialize};

use crate::domain::board::{Board, SLOTS};
use crate::domain::missions::{Mission, RuleCheck};
use crate::domain::state::Outcome;

/// One slot's judgement, appended in slot-traversal order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotVerdict {
    pub slot: u8,
    pub passed: bool,
    pub message: Option<String>,
}

impl SlotVerdict {
    fn pass(slot: usize) -> Self {
        Self {
            slot: slot as u8,
            passed: true,
            message: None,
        }
    }

    fn fail(slot: usize, message: impl Into<String>) -> Self {
        Self {
            slot: slot as u8,
            passed: false,
            message: Some(message.into()),
        }
    }
}

/// Judge a single slot: emptiness first, then the mission's slot rule, then
/// (only if that passed or was absent) the non-decreasing-sum invariant
/// against the preceding slot index. Slot 0 has no predecessor and is exempt
/// from the sum check.
pub fn judge_slot(board: &Board, mission: &Mission, slot: usize) -> SlotVerdict {
    let cards = &board.slots[slot];
    if cards.is_empty() {
        return SlotVerdict::fail(slot, "Empty");
    }

    if let Some(rule) = mission.slot_rules[slot] {
        let check = rule(cards);
        if !check.passed {
            return SlotVerdict {
                slot: slot as u8,
                passed: false,
                message: check.message,
            };
        }
    }

    if slot > 0 && board.slot_sum(slot) < board.slot_sum(slot - 1) {
        return SlotVerdict::fail(slot, "Not Ascending");
    }

    SlotVerdict::pass(slot)
}

/// Independent full validation, re-run from scratch once the cursor reaches
/// the slot count: all slots non-empty, sums non-decreasing in the
/// mission-defined traversal order from `start_slot` (wrapping), every slot
/// rule, the global cap, and the global rule.
pub fn final_check(board: &Board, mission: &Mission) -> RuleCheck {
    for slot in 0..SLOTS {
        if board.slots[slot].is_empty() {
            return RuleCheck::fail("Empty");
        }
    }

    let mut prev: Option<u16> = None;
    for step in 0..SLOTS {
        let slot = (mission.start_slot + step) % SLOTS;
        let sum = board.slot_sum(slot);
        if let Some(prev) = prev {
            if sum < prev {
                return RuleCheck::fail("Not Ascending");
            }
        }
        prev = Some(sum);
    }

    for slot in 0..SLOTS {
        if let Some(rule) = mission.slot_rules[slot] {
            let check = rule(&board.slots[slot]);
            if !check.passed {
                return check;
            }
        }
    }

    if let Some(cap) = mission.global_cap {
        for slot in 0..SLOTS {
            if board.slot_sum(slot) > cap {
                return RuleCheck::fail("Not Under Cap");
            }
        }
    }

    if let Some(rule) = mission.global_rule {
        let check = rule(board);
        if !check.passed {
            return check;
        }
    }

    RuleCheck::pass()
}

pub fn final_outcome(board: &Board, mission: &Mission) -> Outcome {
    if final_check(board, mission).passed {
        Outcome::Victory
    } else {
        Outcome::Defeat
    }
}
