use thiserror::Error;

use book_catalog::{CatalogError, SeedError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// A catalog operation was refused
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// Seed file could not be loaded
    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),

    /// Settings file could not be read or parsed
    #[error("Settings error: {0}")]
    Settings(String),

    /// No book matches the given id or id prefix
    #[error("No book matches '{0}'")]
    NoMatch(String),

    /// More than one book matches the given id prefix
    #[error("'{0}' matches more than one book; use more characters")]
    Ambiguous(String),

    /// Malformed user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    pub(crate) fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }

    pub(crate) fn no_match(msg: impl Into<String>) -> Self {
        Self::NoMatch(msg.into())
    }

    pub(crate) fn ambiguous(msg: impl Into<String>) -> Self {
        Self::Ambiguous(msg.into())
    }

    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
