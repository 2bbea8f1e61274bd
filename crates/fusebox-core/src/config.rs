use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_FUSE_RATING};
use crate::persistence::PersistenceError;

/// User preferences persisted next to the board snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Rating the "Add Fuse" input resets to
    pub default_fuse_rating: String,
    pub user_timezone: Option<String>,
    pub use_24_hour_clock: bool,
    /// Overrides the default snapshot location
    pub state_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_fuse_rating: DEFAULT_FUSE_RATING.to_string(),
            user_timezone: None,
            use_24_hour_clock: true,
            state_file: None,
        }
    }
}

impl AppConfig {
    pub fn save_to_file(&self, dir: &Path) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PersistenceError::Serialization(e.to_string()))?;
        std::fs::create_dir_all(dir)
            .map_err(|e| PersistenceError::Write(format!("{}: {}", dir.display(), e)))?;

        let path = dir.join(CONFIG_FILE_NAME);
        std::fs::write(&path, json)
            .map_err(|e| PersistenceError::Write(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Load from `dir`, returning defaults when no config has been written yet.
    pub fn load_from_file(dir: &Path) -> Result<Self, PersistenceError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(AppConfig::default());
        }

        let json = std::fs::read_to_string(&path)
            .map_err(|e| PersistenceError::Read(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&json).map_err(|e| PersistenceError::Deserialization(e.to_string()))
    }
}
