//! Automated bot seats.
//!
//! Bots fill the seats remote participants did not take, so a mission can
//! always start with a supported participant count. A bot implements
//! [`BotPlayer`] and is driven by the host through the same internal move
//! path as everyone else.

pub mod random;
pub mod trait_def;

pub use random::RandomBot;
pub use trait_def::{BotError, BotMove, BotPlayer};
