//! Bot player trait definition.

use std::fmt;

use crate::domain::{Card, GameState, Seat};
use crate::error::HostError;

/// Errors that can occur while a bot decides.
#[derive(Debug)]
pub enum BotError {
    /// The bot has no cards left to play.
    EmptyHand,
    /// Bot internal failure.
    Internal(String),
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotError::EmptyHand => write!(f, "bot has an empty hand"),
            BotError::Internal(msg) => write!(f, "bot internal error: {msg}"),
        }
    }
}

impl std::error::Error for BotError {}

impl From<BotError> for HostError {
    fn from(err: BotError) -> Self {
        HostError::internal(format!("bot error: {err}"))
    }
}

/// A bot's chosen placement. Bot plays are always face-down; the face-up
/// allowance is left to human participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotMove {
    pub card: Card,
    pub slot: usize,
}

/// Trait for automated seats.
///
/// Implementations see the full canonical state (bots are host-side, so
/// hidden information is not a concern) and must return a move for the
/// given seat. The returned move is applied with the mission's placement
/// restriction waived, so an implementation whose hand admits no legal
/// placement can still return a fallback and the game keeps moving.
pub trait BotPlayer: Send + Sync {
    fn choose_move(&self, state: &GameState, seat: Seat) -> Result<BotMove, BotError>;
}
