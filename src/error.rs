//! Centralized error types for the game.
//!
//! Only startup can fail: assets are loaded and SDL is initialized before the loop starts,
//! and any error there is fatal. Once running, the only fallible operations are drawing calls.

use std::io;
use std::path::PathBuf;

/// Main error type for the game.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("SDL error: {0}")]
    Sdl(String),
}

#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Asset not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },
}

/// Platform-specific errors.
#[derive(thiserror::Error, Debug)]
pub enum PlatformError {
    #[error("Console initialization failed: {0}")]
    ConsoleInit(String),
}

/// Errors raised by a [`crate::render::RenderSurface`].
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("Drawing failed: {0}")]
    Draw(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
