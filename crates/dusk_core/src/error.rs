//! Core error types

use thiserror::Error;

/// Errors produced while parsing a color string
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorParseError {
    /// Nothing to parse
    #[error("empty color string")]
    Empty,

    /// `#` notation with an unsupported number of digits
    #[error("hex color must have 3, 6 or 8 digits, got {0}")]
    InvalidHexLength(usize),

    /// `#` notation containing a non-hex character
    #[error("invalid hex digit in '{0}'")]
    InvalidHexDigit(String),

    /// `rgb(...)` / `rgba(...)` with the wrong shape
    #[error("malformed color function '{0}'")]
    MalformedFunction(String),

    /// A channel inside `rgb(...)` / `rgba(...)` that is not a number
    #[error("invalid color channel '{0}'")]
    InvalidChannel(String),

    /// Anything that is neither hex nor a color function
    #[error("unsupported color format '{0}'")]
    Unsupported(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, ColorParseError>;
