//! Host test support utilities
//!
//! Shared helpers for the host crate's integration tests, currently unified
//! logging initialization.

pub mod logging;
