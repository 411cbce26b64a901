//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per animation frame
//! - Seeded RNG only
//! - No rendering, storage or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{rock_hits_player, squares_overlap};
pub use state::{GameEvent, GamePhase, GameState, Player, Rock, Viewport};
pub use tick::{TickInput, apply_input, tick};
