//! # Shopping Error Types Module
//!
//! Error types raised at the boundary of the shopping-list core: validating
//! unit and category strings coming from recipe data, reading configuration
//! and decoding input snapshots. The consolidation engine and the store never
//! fail; they only consume values that already passed through here.

/// Boundary error types for the shopping-list core
#[derive(Debug, Clone, PartialEq)]
pub enum ShoppingError {
    /// Unit string rejected by validation
    InvalidUnit(String),
    /// Category label not part of the closed grocery category set
    UnknownCategory(String),
    /// Configuration value could not be interpreted
    Config(String),
    /// Input snapshot could not be decoded
    Input(String),
}

impl std::fmt::Display for ShoppingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShoppingError::InvalidUnit(msg) => write!(f, "Invalid unit: {msg}"),
            ShoppingError::UnknownCategory(msg) => write!(f, "Unknown category: {msg}"),
            ShoppingError::Config(msg) => write!(f, "Configuration error: {msg}"),
            ShoppingError::Input(msg) => write!(f, "Input error: {msg}"),
        }
    }
}

impl std::error::Error for ShoppingError {}

impl From<anyhow::Error> for ShoppingError {
    fn from(err: anyhow::Error) -> Self {
        ShoppingError::Input(err.to_string())
    }
}

impl From<serde_json::Error> for ShoppingError {
    fn from(err: serde_json::Error) -> Self {
        ShoppingError::Input(err.to_string())
    }
}
