//! Theme error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// A theme name other than `light` / `dark`
    #[error("unknown theme '{0}', expected 'light' or 'dark'")]
    Unknown(String),
}
