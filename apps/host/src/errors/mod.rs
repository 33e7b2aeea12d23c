//! Error types layered below the top-level [`crate::error::HostError`].

pub mod domain;

pub use domain::{DomainError, RejectKind};
