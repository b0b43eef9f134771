use thiserror::Error;
use uuid::Uuid;

/// Errors reported by catalog operations.
///
/// Lookups that can simply miss (`get`, `delete`) report through `Option`
/// and `bool` instead; this type covers the mutations that must say why
/// they refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The referenced book id is not in the store
    #[error("Book not found: {id}")]
    NotFound { id: Uuid },

    /// The caller supplied a malformed request
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CatalogError {
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
