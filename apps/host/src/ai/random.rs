//! Random bot: uniform choice among restriction-legal placements.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::trait_def::{BotError, BotMove, BotPlayer};
use crate::domain::{mission, GameState, Seat, SLOTS};

/// Bot that enumerates every (card, slot) pair its hand allows under the
/// mission's placement restriction and picks one uniformly. When the
/// restriction rules out everything, it falls back to the first card into
/// slot 0 so the turn always advances.
pub struct RandomBot {
    /// `Mutex` for interior mutability; [`BotPlayer`] methods take `&self`
    /// but the RNG needs mutable access.
    rng: Mutex<StdRng>,
}

impl RandomBot {
    /// `Some(seed)` gives reproducible choices, `None` uses OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl BotPlayer for RandomBot {
    fn choose_move(&self, state: &GameState, seat: Seat) -> Result<BotMove, BotError> {
        let participant = state
            .participant(seat)
            .ok_or_else(|| BotError::Internal(format!("no participant at seat {seat}")))?;
        let hand = &participant.hand;
        if hand.is_empty() {
            return Err(BotError::EmptyHand);
        }

        let mut legal = Vec::with_capacity(hand.len() * SLOTS);
        if let Some(id) = state.mission {
            let m = mission(id);
            for &card in hand {
                for slot in 0..SLOTS {
                    if m.check_placement(&card, slot, &state.board, state.cards_played)
                        .passed
                    {
                        legal.push(BotMove { card, slot });
                    }
                }
            }
        }

        if legal.is_empty() {
            // The move is applied with the restriction waived, so this
            // always lands.
            return Ok(BotMove {
                card: hand[0],
                slot: 0,
            });
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| BotError::Internal(format!("RNG lock poisoned: {e}")))?;
        legal
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| BotError::Internal("failed to choose a move".into()))
    }
}
