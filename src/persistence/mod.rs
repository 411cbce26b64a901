//! High score and level persistence
//!
//! Two scalar entries, each stored as a decimal string:
//! - `highScore`: read once at startup, written when a round beats it
//! - `level`: written on every level-up, never read back
//!
//! No schema versioning or migration.

#[cfg(target_arch = "wasm32")]
mod local;
mod memory;

#[cfg(target_arch = "wasm32")]
pub use local::LocalStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Storage key for the best score
pub const HIGH_SCORE_KEY: &str = "highScore";
/// Storage key for the last level reached
pub const LEVEL_KEY: &str = "level";

/// Key-value backend for the two persisted scalars
pub trait ProgressStore {
    /// Best score so far (0 if absent or unreadable)
    fn load_high_score(&self) -> u32;
    fn save_high_score(&mut self, score: u32) -> Result<()>;
    fn save_level(&mut self, level: u32) -> Result<()>;
}

impl<T: ProgressStore + ?Sized> ProgressStore for Box<T> {
    fn load_high_score(&self) -> u32 {
        (**self).load_high_score()
    }

    fn save_high_score(&mut self, score: u32) -> Result<()> {
        (**self).save_high_score(score)
    }

    fn save_level(&mut self, level: u32) -> Result<()> {
        (**self).save_level(level)
    }
}

/// Parse a stored scalar, treating missing or malformed values as 0
pub fn parse_stored(value: Option<&str>) -> u32 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}
