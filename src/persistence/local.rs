//! Browser LocalStorage backend

use web_sys::Storage;

use super::{HIGH_SCORE_KEY, LEVEL_KEY, ProgressStore, parse_stored};
use crate::error::{GameError, Result};

pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    /// Open the window's LocalStorage
    pub fn open() -> Result<Self> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| GameError::Storage("LocalStorage unavailable".into()))?;
        Ok(Self { storage })
    }

    fn set(&self, key: &str, value: u32) -> Result<()> {
        self.storage
            .set_item(key, &value.to_string())
            .map_err(|e| GameError::Storage(format!("failed to write {key}: {e:?}")))
    }
}

impl ProgressStore for LocalStore {
    fn load_high_score(&self) -> u32 {
        let stored = self.storage.get_item(HIGH_SCORE_KEY).ok().flatten();
        parse_stored(stored.as_deref())
    }

    fn save_high_score(&mut self, score: u32) -> Result<()> {
        self.set(HIGH_SCORE_KEY, score)?;
        log::info!("High score saved ({})", score);
        Ok(())
    }

    fn save_level(&mut self, level: u32) -> Result<()> {
        self.set(LEVEL_KEY, level)
    }
}
