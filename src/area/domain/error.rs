//! Error types for message area domain validation.

use super::AreaName;
use thiserror::Error;

/// Errors returned while constructing message area domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AreaDomainError {
    /// The area name is empty after trimming.
    #[error("area name must not be empty")]
    EmptyAreaName,

    /// The area name contains whitespace or control characters.
    #[error("area name '{0}' contains whitespace or control characters")]
    InvalidAreaName(String),

    /// The area name exceeds the 100-character storage limit.
    #[error("area name exceeds 100 character limit: {0}")]
    AreaNameTooLong(String),
}

/// Errors returned while building an [`AreaCatalog`](super::AreaCatalog).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A configured area has an invalid name.
    #[error(transparent)]
    Domain(#[from] AreaDomainError),

    /// Two configured areas share a name once case is ignored.
    #[error("duplicate message area: {0}")]
    DuplicateArea(AreaName),

    /// The configuration document could not be parsed.
    #[error("invalid message area configuration: {0}")]
    InvalidConfig(String),
}
