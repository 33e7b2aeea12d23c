//! Domain-level error type used across the game engine.
//!
//! This error type is transport-agnostic. Net-facing code returns
//! `Result<T, crate::error::HostError>` and converts from `DomainError`
//! through the provided `From` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Why a move (or command) was rejected. Rejections never mutate state and
/// are reported to the originating participant only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RejectKind {
    /// Command not valid in the current phase.
    PhaseMismatch,
    /// Submitter is not the participant at the current turn index.
    OutOfTurn,
    /// Face-up allowance (one per participant, game-wide) already spent.
    FaceUpExhausted,
    /// Card is not in the submitter's hand.
    CardNotHeld,
    /// Slot index outside the board.
    InvalidSlot,
    /// The mission's placement restriction failed.
    Placement,
    /// Submitter does not hold a seat in this game.
    UnknownParticipant,
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A rejected move or command; the message is user-visible.
    Rejected(RejectKind, String),
    /// A broken internal invariant (never user-triggered).
    Invariant(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Rejected(kind, d) => write!(f, "rejected {kind:?}: {d}"),
            DomainError::Invariant(d) => write!(f, "invariant violated: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn rejected(kind: RejectKind, detail: impl Into<String>) -> Self {
        Self::Rejected(kind, detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    /// The user-visible feedback string for this error.
    pub fn detail(&self) -> &str {
        match self {
            DomainError::Rejected(_, d) | DomainError::Invariant(d) => d,
        }
    }

    pub fn reject_kind(&self) -> Option<RejectKind> {
        match self {
            DomainError::Rejected(kind, _) => Some(*kind),
            DomainError::Invariant(_) => None,
        }
    }
}
