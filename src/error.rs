// Error types shared by the library. The binary wraps these in
// `anyhow` for startup failures; catalog and menu errors are shown to
// the user as plain messages.

use thiserror::Error;

/// Failures while retrieving and decoding the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request could not be sent or the server refused it.
    #[error("{0}")]
    Retrieval(String),

    /// The response body could not be read to the end.
    #[error("{0}")]
    Read(String),

    /// The payload is not a catalog document.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

/// Failures while reading the menu selection.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("invalid selection `{0}`: enter 1, 2 or 3")]
    InvalidSelection(String),

    /// The answer could not be read from the terminal or stdin.
    #[error("could not read input: {0}")]
    Input(#[from] std::io::Error),
}

/// Invalid environment configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}: invalid value `{value}` ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}
