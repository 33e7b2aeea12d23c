//! Core card types: two symmetric suits, values 1..=12.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Card values run 1..=12, duplicated per suit.
pub const CARD_VALUES: RangeInclusive<u8> = 1..=12;

/// Two suits of twelve cards each.
pub const DECK_SIZE: usize = 24;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suit {
    Solar,
    Lunar,
}

impl Suit {
    pub fn other(self) -> Suit {
        match self {
            Suit::Solar => Suit::Lunar,
            Suit::Lunar => Suit::Solar,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suit::Solar => write!(f, "Solar"),
            Suit::Lunar => write!(f, "Lunar"),
        }
    }
}

/// A card is identified by (suit, value); each combination exists exactly
/// once in the deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub value: u8,
}

// Note: Ord on Card is only for stable sorting of hands for display.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.value.cmp(&other.value),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.suit, self.value)
    }
}
