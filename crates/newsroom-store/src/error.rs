//! Store error types

use newsroom_rbac::EnforcementError;
use newsroom_types::{ArticleId, CategoryId, UserId};
use thiserror::Error;

/// A required form field was missing.
///
/// Messages are shown to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Category name is required")]
    CategoryNameRequired,

    #[error("A category with this name already exists")]
    CategoryNameTaken,

    #[error("Name and email are required")]
    NameAndEmailRequired,

    #[error("Site name and contact email are required")]
    SiteNameAndEmailRequired,
}

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The access policy rejected the mutation.
    #[error(transparent)]
    Denied(#[from] EnforcementError),

    #[error("Validation Error: {0}")]
    Validation(#[from] ValidationError),

    #[error("article {0} not found")]
    ArticleNotFound(ArticleId),

    #[error("category {0} not found")]
    CategoryNotFound(CategoryId),

    /// An article named a category that does not exist.
    #[error("category \"{0}\" not found")]
    UnknownCategory(String),

    /// Every id of this kind up to `u64::MAX` is taken.
    #[error("no {0} ids left")]
    IdsExhausted(&'static str),

    #[error("user {0} not found")]
    UserNotFound(UserId),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
