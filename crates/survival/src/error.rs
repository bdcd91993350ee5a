//! Game error types

use survival_engine::assets::AssetError;
use survival_engine::config::ConfigError;
use thiserror::Error;

/// Errors that stop the game before or during startup
#[derive(Error, Debug)]
pub enum GameError {
    /// A required asset could not be loaded
    #[error("Failed to load font: {0}")]
    Font(#[from] AssetError),

    /// An explicitly requested config file could not be used
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias for game startup
pub type GameResult<T> = Result<T, GameError>;
