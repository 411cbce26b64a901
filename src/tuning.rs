//! Data-driven game balance
//!
//! Every number that shapes difficulty lives here so tests can build
//! scenarios with non-default values.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Per-tick chance of spawning a rock at level 1
    pub initial_spawn_chance: f32,
    /// Added to the spawn chance on every level-up
    pub spawn_chance_step: f32,
    /// Upper bound for the spawn chance
    pub max_spawn_chance: f32,
    /// Score interval between level-ups
    pub level_up_every: u32,
    /// Horizontal displacement per tick while a direction key is held
    pub key_speed: f32,
    /// Rock edge length range
    pub rock_size: Range<f32>,
    /// Rock fall speed range (before level bonus)
    pub rock_speed: Range<f32>,
    /// Extra fall speed per level
    pub speed_per_level: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            initial_spawn_chance: 0.05,
            spawn_chance_step: 0.01,
            max_spawn_chance: 0.25,
            level_up_every: 20,
            key_speed: 5.0,
            rock_size: 20.0..50.0,
            rock_speed: 2.0..5.0,
            speed_per_level: 0.2,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Self = serde_json::from_str(json)
            .map_err(|e| GameError::Storage(format!("corrupt tuning: {e}")))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the spawner cannot sample from
    pub fn validate(&self) -> Result<()> {
        for (name, range) in [("rock_size", &self.rock_size), ("rock_speed", &self.rock_speed)] {
            if !(range.start.is_finite() && range.end.is_finite() && range.start < range.end) {
                return Err(GameError::Storage(format!(
                    "{name} must be a non-empty finite range, got {}..{}",
                    range.start, range.end
                )));
            }
        }
        Ok(())
    }

    /// Spawn chance after one more level-up
    pub fn next_spawn_chance(&self, current: f32) -> f32 {
        (current + self.spawn_chance_step).min(self.max_spawn_chance)
    }

    /// Whether reaching `score` earns a level
    pub fn is_level_up(&self, score: u32) -> bool {
        self.level_up_every > 0 && score > 0 && score % self.level_up_every == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_up_thresholds() {
        let tuning = Tuning::default();
        assert!(!tuning.is_level_up(0));
        assert!(!tuning.is_level_up(19));
        assert!(tuning.is_level_up(20));
        assert!(!tuning.is_level_up(21));
        assert!(tuning.is_level_up(40));
    }

    #[test]
    fn test_spawn_chance_is_capped() {
        let tuning = Tuning::default();
        let mut chance = tuning.initial_spawn_chance;
        for _ in 0..100 {
            chance = tuning.next_spawn_chance(chance);
        }
        assert_eq!(chance, tuning.max_spawn_chance);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning = Tuning::from_json(r#"{"level_up_every": 5}"#).unwrap();
        assert_eq!(tuning.level_up_every, 5);
        assert_eq!(tuning.key_speed, 5.0);
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_empty_ranges_are_rejected() {
        let empty_size = r#"{"rock_size": {"start": 30.0, "end": 30.0}}"#;
        assert!(matches!(
            Tuning::from_json(empty_size),
            Err(GameError::Storage(_))
        ));

        let reversed_speed = r#"{"rock_speed": {"start": 5.0, "end": 2.0}}"#;
        assert!(Tuning::from_json(reversed_speed).is_err());
    }
}
