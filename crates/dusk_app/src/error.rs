//! Application error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// A headless run configuration that cannot be executed
    #[error("invalid headless config: {0}")]
    InvalidConfig(String),

    /// Viewport with a zero or non-finite dimension
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    /// Scenario JSON that does not match the step schema
    #[error("failed to parse scenario: {0}")]
    Scenario(#[from] serde_json::Error),

    /// Reading a scenario or writing a report failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for application operations
pub type Result<T> = std::result::Result<T, AppError>;
