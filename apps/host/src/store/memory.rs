//! In-memory recovery store, used by tests to inject crafted snapshots
//! through the same restore path production uses.

use parking_lot::Mutex;

use crate::domain::snapshot::GameSnapshot;
use crate::error::HostError;
use crate::store::RecoveryStore;

#[derive(Default)]
pub struct MemoryRecoveryStore {
    slot: Mutex<Option<GameSnapshot>>,
}

impl MemoryRecoveryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a snapshot so the next host start restores from it.
    pub fn seeded(snapshot: GameSnapshot) -> Self {
        Self {
            slot: Mutex::new(Some(snapshot)),
        }
    }
}

impl RecoveryStore for MemoryRecoveryStore {
    fn load(&self) -> Result<Option<GameSnapshot>, HostError> {
        Ok(self.slot.lock().clone())
    }

    fn save(&self, snapshot: &GameSnapshot) -> Result<(), HostError> {
        *self.slot.lock() = Some(snapshot.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), HostError> {
        *self.slot.lock() = None;
        Ok(())
    }
}
