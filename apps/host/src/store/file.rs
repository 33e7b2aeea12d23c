//! JSON-on-disk recovery store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::snapshot::GameSnapshot;
use crate::error::HostError;
use crate::store::RecoveryStore;

/// Persists the snapshot as one JSON file, written via a temp file and
/// rename so a crash mid-write never leaves a truncated blob behind.
pub struct FileRecoveryStore {
    path: PathBuf,
}

impl FileRecoveryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.as_os_str().to_owned();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

impl RecoveryStore for FileRecoveryStore {
    fn load(&self) -> Result<Option<GameSnapshot>, HostError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(HostError::recovery(format!(
                    "read {}: {err}",
                    self.path.display()
                )))
            }
        };
        let snapshot = serde_json::from_str(&text).map_err(|err| {
            HostError::recovery(format!("parse {}: {err}", self.path.display()))
        })?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &GameSnapshot) -> Result<(), HostError> {
        let text = serde_json::to_string(snapshot)
            .map_err(|err| HostError::recovery(format!("serialize snapshot: {err}")))?;
        let tmp = self.tmp_path();
        fs::write(&tmp, text)
            .map_err(|err| HostError::recovery(format!("write {}: {err}", tmp.display())))?;
        fs::rename(&tmp, &self.path).map_err(|err| {
            HostError::recovery(format!("rename into {}: {err}", self.path.display()))
        })?;
        Ok(())
    }

    fn clear(&self) -> Result<(), HostError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(HostError::recovery(format!(
                "remove {}: {err}",
                self.path.display()
            ))),
        }
    }
}
