//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`TodoError`]
//! via `From`.

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// Opaque failure from a storage adapter.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Input that could not be turned into a domain value.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid todo id: {0:?}")]
    InvalidId(String),
}

/// A lookup by identifier matched nothing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
