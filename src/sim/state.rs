//! Game state and core simulation types
//!
//! Everything the update loop reads or writes lives here so it can be
//! driven and inspected without a display surface.

use std::ops::Range;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Rocks are falling
    Running,
    /// Player was hit; waits for restart
    GameOver,
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A rock passed the player
    Scored { score: u32 },
    /// Score reached a multiple of the level interval
    LevelUp { level: u32 },
    /// The round ended above the previous best
    NewHighScore { score: u32 },
    /// The player collided with a rock
    GameOver { score: u32 },
}

/// Size of the drawing surface in world pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    /// Map world pixel coordinates to normalized device coordinates
    /// (x right, y up, both in -1..1)
    #[inline]
    pub fn to_ndc(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            (x / self.width) * 2.0 - 1.0,
            1.0 - (y / self.height) * 2.0,
        )
    }
}

/// The player's square
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Center position
    pub pos: Vec2,
    /// Edge length
    pub size: f32,
}

impl Player {
    /// Player centered horizontally near the bottom edge
    pub fn spawn(viewport: &Viewport) -> Self {
        Self {
            pos: Vec2::new(viewport.width / 2.0, viewport.height - PLAYER_BOTTOM_OFFSET),
            size: PLAYER_SIZE,
        }
    }

    /// Keep the whole square inside the viewport horizontally
    pub fn clamp_x(&mut self, viewport: &Viewport) {
        let half = self.size / 2.0;
        // Narrower than the player: pin to the center instead of panicking in clamp
        let max = (viewport.width - half).max(half);
        self.pos.x = self.pos.x.clamp(half, max);
    }

    /// Vertical line a rock must cross to score
    #[inline]
    pub fn scoring_line(&self) -> f32 {
        self.pos.y + self.size / 2.0
    }
}

/// A falling rock
#[derive(Debug, Clone, PartialEq)]
pub struct Rock {
    /// Center position
    pub pos: Vec2,
    /// Edge length
    pub size: f32,
    /// Pixels fallen per tick
    pub speed: f32,
    /// Whether this rock already counted toward the score
    pub scored: bool,
}

impl Rock {
    pub fn new(x: f32, y: f32, size: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size,
            speed,
            scored: false,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    pub player: Player,
    /// Active rocks in spawn order
    pub rocks: Vec<Rock>,
    pub score: u32,
    /// Current level (starts at 1)
    pub level: u32,
    /// Best score across rounds
    pub high_score: u32,
    /// Per-tick probability of spawning a rock
    pub spawn_chance: f32,
    /// Cosmetic clock for the background pulse
    pub elapsed: f32,
    pub viewport: Viewport,
    pub tuning: Tuning,
    rng: Pcg32,
}

impl GameState {
    /// Create a new round with the given seed
    pub fn new(viewport: Viewport, seed: u64, tuning: Tuning) -> Self {
        Self {
            phase: GamePhase::Running,
            player: Player::spawn(&viewport),
            rocks: Vec::new(),
            score: 0,
            level: 1,
            high_score: 0,
            spawn_chance: tuning.initial_spawn_chance,
            elapsed: 0.0,
            viewport,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed the best score read from storage
    pub fn with_high_score(mut self, high_score: u32) -> Self {
        self.high_score = high_score;
        self
    }

    /// Reset everything except the high score and start a new round
    pub fn restart(&mut self, seed: u64) {
        self.phase = GamePhase::Running;
        self.player = Player::spawn(&self.viewport);
        self.rocks.clear();
        self.score = 0;
        self.level = 1;
        self.spawn_chance = self.tuning.initial_spawn_chance;
        self.elapsed = 0.0;
        self.rng = Pcg32::seed_from_u64(seed);
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Roll against the current spawn chance
    pub fn roll_spawn(&mut self) -> bool {
        self.rng.random::<f32>() < self.spawn_chance
    }

    /// Spawn a rock above the top edge with randomized position, size and speed
    pub fn spawn_rock(&mut self) {
        let x = sample(&mut self.rng, 0.0..self.viewport.width);
        let size = sample(&mut self.rng, self.tuning.rock_size.clone());
        let speed = sample(&mut self.rng, self.tuning.rock_speed.clone())
            + self.level as f32 * self.tuning.speed_per_level;
        self.rocks.push(Rock::new(x, ROCK_SPAWN_Y, size, speed));
    }
}

/// Uniform sample from `range`; an empty range yields its start
fn sample(rng: &mut Pcg32, range: Range<f32>) -> f32 {
    if range.start < range.end {
        rng.random_range(range)
    } else {
        range.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_starts_centered_near_bottom() {
        let state = GameState::new(Viewport::new(1000.0, 600.0), 1, Tuning::default());
        assert_eq!(state.player.pos, Vec2::new(500.0, 550.0));
        assert_eq!(state.player.size, 30.0);
        assert_eq!(state.level, 1);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_ndc_corners() {
        let viewport = Viewport::new(800.0, 600.0);
        assert_eq!(viewport.to_ndc(0.0, 0.0), Vec2::new(-1.0, 1.0));
        assert_eq!(viewport.to_ndc(800.0, 600.0), Vec2::new(1.0, -1.0));
        assert_eq!(viewport.to_ndc(400.0, 300.0), Vec2::ZERO);
    }

    #[test]
    fn test_clamp_x() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut player = Player::spawn(&viewport);

        player.pos.x = -100.0;
        player.clamp_x(&viewport);
        assert_eq!(player.pos.x, 15.0);

        player.pos.x = 5000.0;
        player.clamp_x(&viewport);
        assert_eq!(player.pos.x, 785.0);
    }

    #[test]
    fn test_spawned_rock_ranges() {
        let mut state = GameState::new(Viewport::new(800.0, 600.0), 7, Tuning::default());
        state.level = 3;
        for _ in 0..200 {
            state.spawn_rock();
        }
        for rock in &state.rocks {
            assert!(rock.pos.x >= 0.0 && rock.pos.x < 800.0);
            assert_eq!(rock.pos.y, ROCK_SPAWN_Y);
            assert!(rock.size >= 20.0 && rock.size < 50.0);
            assert!(rock.speed >= 2.59 && rock.speed <= 5.61);
            assert!(!rock.scored);
        }
    }

    #[test]
    fn test_spawn_with_empty_ranges_uses_range_start() {
        let tuning = Tuning {
            rock_size: 30.0..30.0,
            rock_speed: 4.0..2.0,
            speed_per_level: 0.0,
            ..Default::default()
        };
        let mut state = GameState::new(Viewport::new(800.0, 600.0), 3, tuning);
        state.spawn_rock();
        assert_eq!(state.rocks[0].size, 30.0);
        assert_eq!(state.rocks[0].speed, 4.0);
    }

    #[test]
    fn test_restart_keeps_high_score() {
        let mut state =
            GameState::new(Viewport::new(800.0, 600.0), 1, Tuning::default()).with_high_score(12);
        state.score = 30;
        state.level = 2;
        state.spawn_chance = 0.06;
        state.spawn_rock();
        state.phase = GamePhase::GameOver;

        state.restart(2);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert!(state.rocks.is_empty());
        assert_eq!(state.spawn_chance, 0.05);
        assert_eq!(state.high_score, 12);
        assert_eq!(state.phase, GamePhase::Running);
    }
}
