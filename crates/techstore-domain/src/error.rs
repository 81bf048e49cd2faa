//! Domain Errors
//!
//! Catalog and cart operations never fail; these only surface at the UI
//! boundary (DOM input, config blobs, lookups by id).

use serde::{Deserialize, Serialize};

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    /// No catalog entry with the requested id
    NotFound(String),
    /// Unparseable slider value or config blob
    InvalidInput(String),
    /// Browser environment missing (no window/document)
    Internal(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(what) => write!(f, "{} not found", what),
            DomainError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            DomainError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
