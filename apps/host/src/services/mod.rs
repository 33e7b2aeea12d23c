//! Host-side services built on the pure domain layer.

pub mod game_flow;

pub use game_flow::GameHost;
