use thiserror::Error;

use crate::errors::domain::DomainError;

/// Top-level error type for host operations.
///
/// No variant is fatal to the process: every failure narrows to "reject this
/// one operation" or "drop this one connection".
#[derive(Error, Debug)]
pub enum HostError {
    /// A rejected command or broken domain invariant.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// A malformed or out-of-contract peer message.
    #[error("protocol error: {detail}")]
    Protocol { detail: String },

    /// A peer channel closed or failed mid-send.
    #[error("transport fault: {detail}")]
    Transport { detail: String },

    /// The persisted snapshot could not be read or written.
    #[error("recovery store failure: {detail}")]
    Recovery { detail: String },

    /// An unexpected internal failure.
    #[error("internal error: {detail}")]
    Internal { detail: String },

    /// Invalid or unparseable configuration.
    #[error("config error: {detail}")]
    Config { detail: String },
}

impl HostError {
    pub fn protocol(detail: impl Into<String>) -> Self {
        Self::Protocol {
            detail: detail.into(),
        }
    }

    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport {
            detail: detail.into(),
        }
    }

    pub fn recovery(detail: impl Into<String>) -> Self {
        Self::Recovery {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    /// The user-visible feedback string, when one exists.
    pub fn detail(&self) -> String {
        match self {
            HostError::Domain(e) => e.detail().to_string(),
            HostError::Protocol { detail }
            | HostError::Transport { detail }
            | HostError::Recovery { detail }
            | HostError::Internal { detail }
            | HostError::Config { detail } => detail.clone(),
        }
    }
}
