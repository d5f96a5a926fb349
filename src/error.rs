//! Error types

use thiserror::Error;

/// Failures constructing or driving a game session
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GameError {
    /// Viewport dimensions must be finite and positive to place the ground line
    #[error("invalid viewport {width}x{height}: dimensions must be positive")]
    InvalidViewport { width: f32, height: f32 },
}

/// Failures loading host settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
