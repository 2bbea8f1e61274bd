use std::fs;
use std::path::{Path, PathBuf};

use super::{PersistenceError, SavedState, StateStore};
use crate::constants::{CONFIG_DIR_NAME, STATE_FILE_NAME};

/// Keeps the snapshot as a pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform config directory, e.g. `~/.config/fusebox/`
    pub fn in_config_dir() -> Self {
        let dir = dirs::config_dir()
            .map(|d| d.join(CONFIG_DIR_NAME))
            .unwrap_or_default();
        Self::new(dir.join(STATE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record; a missing file is `Ok(None)`.
    pub fn read(&self) -> Result<Option<SavedState>, PersistenceError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path)
            .map_err(|e| PersistenceError::Read(format!("{}: {}", self.path.display(), e)))?;
        SavedState::from_json(&json).map(Some)
    }

    pub fn write(&self, state: &SavedState) -> Result<(), PersistenceError> {
        let json = state.to_json()?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| PersistenceError::Write(format!("{}: {}", parent.display(), e)))?;
        }
        fs::write(&self.path, json)
            .map_err(|e| PersistenceError::Write(format!("{}: {}", self.path.display(), e)))?;
        Ok(())
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Option<SavedState> {
        match self.read() {
            Ok(state) => state,
            Err(e) => {
                log::warn!("Ignoring saved board state: {}", e);
                None
            }
        }
    }

    fn save(&mut self, state: &SavedState) {
        if let Err(e) = self.write(state) {
            log::warn!("Board state not saved: {}", e);
        }
    }
}
