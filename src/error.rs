//! Error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    /// The rendering context could not be created. Fatal, reported to the user.
    #[error("Graphics unavailable: {0}")]
    GraphicsUnavailable(String),
    /// Key-value storage was unreachable or rejected a write.
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
