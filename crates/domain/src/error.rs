//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`FruitHubError`] via `#[from]`.

use crate::id::{FruitId, ProviderId};

/// Top-level error returned by every application operation.
#[derive(Debug, thiserror::Error)]
pub enum FruitHubError {
    /// Input failed a field-level rule.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A referenced record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A business rule rejected the operation.
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// The underlying store failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Field-level validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be blank")]
    EmptyName,
    #[error("country must not be blank")]
    EmptyCountry,
    #[error("weight must be greater than zero")]
    NonPositiveWeight,
    #[error("weight is required")]
    MissingWeight,
    #[error("provider id is required")]
    MissingProvider,
    #[error("invalid identifier: {0}")]
    InvalidId(String),
    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

/// No live record matches the requested identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    #[error("fruit not found with id: {0}")]
    Fruit(FruitId),
    #[error("provider with id {0} not found")]
    Provider(ProviderId),
}

/// Uniqueness and referential-integrity rejections.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    #[error("provider with name: {0} already exists")]
    DuplicateName(String),
    #[error("provider with id: {0} cannot be deleted because it has associated fruits")]
    ProviderInUse(ProviderId),
}

/// Returns `true` when `value` is empty or whitespace only.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
