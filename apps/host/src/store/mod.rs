//! Crash-recovery persistence for the canonical snapshot.

pub mod file;
pub mod memory;

use crate::domain::snapshot::GameSnapshot;
use crate::error::HostError;

pub use file::FileRecoveryStore;
pub use memory::MemoryRecoveryStore;

/// One persisted snapshot, replaced wholesale on every committed mutation.
///
/// The store never accumulates history; recovery only needs the latest
/// state. `load` returning `Ok(None)` means a clean start, while `Err`
/// means the blob exists but could not be read back.
pub trait RecoveryStore: Send + Sync {
    fn load(&self) -> Result<Option<GameSnapshot>, HostError>;
    fn save(&self, snapshot: &GameSnapshot) -> Result<(), HostError>;
    fn clear(&self) -> Result<(), HostError>;
}
