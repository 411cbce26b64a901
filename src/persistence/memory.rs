//! In-process store for native builds and tests

use std::collections::HashMap;

use super::{HIGH_SCORE_KEY, LEVEL_KEY, ProgressStore, parse_stored};
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a high score
    pub fn with_high_score(score: u32) -> Self {
        let mut store = Self::new();
        store.set(HIGH_SCORE_KEY, score);
        store
    }

    /// Raw stored string for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: u32) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

impl ProgressStore for MemoryStore {
    fn load_high_score(&self) -> u32 {
        parse_stored(self.get(HIGH_SCORE_KEY))
    }

    fn save_high_score(&mut self, score: u32) -> Result<()> {
        self.set(HIGH_SCORE_KEY, score);
        Ok(())
    }

    fn save_level(&mut self, level: u32) -> Result<()> {
        self.set(LEVEL_KEY, level);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_as_decimal_strings() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load_high_score(), 0);

        store.save_high_score(37).unwrap();
        store.save_level(3).unwrap();
        assert_eq!(store.get(HIGH_SCORE_KEY), Some("37"));
        assert_eq!(store.get(LEVEL_KEY), Some("3"));
        assert_eq!(store.load_high_score(), 37);
    }
}
