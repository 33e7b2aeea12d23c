//! Deterministic deck building, shuffling, and dealing.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

use crate::domain::cards::{Card, Suit, CARD_VALUES, DECK_SIZE};
use crate::errors::domain::DomainError;

/// Total cards dealt across all hands, regardless of participant count.
pub const DEAL_TOTAL: usize = 12;

/// Cards per hand for a given participant count. The deal total must split
/// evenly, so only counts {2, 3, 4, 6} are playable.
pub fn hand_size_for(participant_count: usize) -> Option<usize> {
    match participant_count {
        2 | 3 | 4 | 6 => Some(DEAL_TOTAL / participant_count),
        _ => None,
    }
}

/// Generate the full 24-card deck in suit-then-value order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in [Suit::Solar, Suit::Lunar] {
        for value in CARD_VALUES {
            deck.push(Card { suit, value });
        }
    }
    deck
}

/// Fisher-Yates shuffle of the full deck from a seed.
///
/// ChaCha12 is used directly (rather than `StdRng`) so a persisted seed
/// replays the same deck across rand upgrades.
pub fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut deck = full_deck();
    let mut rng = ChaCha12Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
    deck
}

/// Split the top of a shuffled deck into hands. Pure function of
/// (deck, participant count); cards beyond [`DEAL_TOTAL`] are not dealt.
/// Hands are sorted for display convenience.
pub fn deal(deck: &[Card], participant_count: usize) -> Result<Vec<Vec<Card>>, DomainError> {
    let hand_size = hand_size_for(participant_count).ok_or_else(|| {
        DomainError::invariant(format!(
            "Participant count must be one of 2, 3, 4, 6 (got {participant_count})"
        ))
    })?;

    if deck.len() < DEAL_TOTAL {
        return Err(DomainError::invariant(format!(
            "Deck too small to deal: {} < {DEAL_TOTAL}",
            deck.len()
        )));
    }

    let mut hands = Vec::with_capacity(participant_count);
    for seat in 0..participant_count {
        let start = seat * hand_size;
        let mut hand = deck[start..start + hand_size].to_vec();
        hand.sort();
        hands.push(hand);
    }
    Ok(hands)
}
