//! Error types for the showcase library.

use thiserror::Error;

/// Errors that can occur while configuring, generating or rendering.
#[derive(Debug, Error)]
pub enum ShowcaseError {
    /// Configuration layers could not be merged or deserialized.
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    /// Writing to the terminal failed.
    #[error("Terminal output failed: {0}")]
    Io(#[from] std::io::Error),

    /// A product builder was finished before every field was set.
    #[error("Product is missing field `{0}`")]
    MissingField(&'static str),
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, ShowcaseError>;
