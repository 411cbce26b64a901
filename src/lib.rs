//! Rock Dodge - A falling-rock dodging arcade game
//!
//! Core modules:
//! - `sim`: Pure simulation (player, rocks, scoring, collisions)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser input abstraction
//! - `persistence`: High score / level storage
//! - `session`: Owns the simulation and applies its side effects
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{GameError, Result};
pub use session::{FrameOutcome, Session};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Edge length of the player's square
    pub const PLAYER_SIZE: f32 = 30.0;
    /// Distance from the bottom of the viewport to the player's center
    pub const PLAYER_BOTTOM_OFFSET: f32 = 50.0;

    /// Vertical position new rocks appear at (just above the top edge)
    pub const ROCK_SPAWN_Y: f32 = -20.0;

    /// Cosmetic clock advance per tick (drives the background pulse)
    pub const ELAPSED_STEP: f32 = 0.01;

    /// The glow layer is this many times larger than the player
    pub const GLOW_SCALE: f32 = 2.0;
}
