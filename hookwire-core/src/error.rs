//! Error types for hookwire.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`HookwireError`] - Top-level error type for all hookwire operations
//! - [`HookError`] - Errors raised by wrapper hooks around a handler
//! - [`ContextError`] - Typed lookups of values carried by a [`Context`]
//! - [`CatalogError`] - Typed lookups of collections by name
//! - [`PageError`] - Eager validation of pagination bounds
//!
//! Handler failures travel as [`BoxError`]: the pipeline never inspects them,
//! it only attaches them to the value or returns them to the caller.
//!
//! [`Context`]: crate::Context

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A shareable error, for values that must stay `Clone` once an error is attached.
pub type SharedError = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all hookwire operations.
#[derive(Error, Debug)]
pub enum HookwireError {
    /// A wrapper hook failed.
    #[error("hook error: {0}")]
    Hook(#[from] HookError),

    /// A context lookup failed.
    #[error("context error: {0}")]
    Context(#[from] ContextError),

    /// A catalog lookup failed.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Pagination bounds were rejected.
    #[error("page error: {0}")]
    Page(#[from] PageError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors raised around the execution of a single handler.
#[derive(Error, Debug)]
pub enum HookError {
    /// The handler did not finish within its time budget.
    #[error("hook timed out after {0:?}")]
    Timeout(Duration),

    /// The context was cancelled before the handler ran.
    #[error("hook was cancelled")]
    Cancelled,

    /// A custom hook error.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors from typed access to context values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// No value is stored under the key.
    #[error("no context value under key `{0}`")]
    Missing(&'static str),

    /// A value is stored under the key, but not of the requested type.
    #[error("context value `{key}` is not a `{expected}`")]
    TypeMismatch {
        /// The looked-up key.
        key: &'static str,
        /// The requested type name.
        expected: &'static str,
    },
}

/// Errors from the collection catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No collection was declared under the name.
    #[error("no collection declared as `{0}`")]
    NotFound(String),

    /// A collection was already declared under the name.
    #[error("collection `{0}` is already declared")]
    AlreadyExists(String),

    /// The collection exists but holds a different handler or value type.
    #[error("collection `{name}` is not a `{expected}`")]
    TypeMismatch {
        /// The declared name.
        name: String,
        /// The requested collection type name.
        expected: &'static str,
    },
}

/// Errors from eager validation of pagination bounds.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageError {
    /// The page size must be positive.
    #[error("invalid count {0}: must be > 0")]
    InvalidCount(i64),

    /// The offset must not be negative.
    #[error("invalid from {0}: must be >= 0")]
    InvalidFrom(i64),
}

// Convenience conversions
impl From<BoxError> for HookwireError {
    fn from(err: BoxError) -> Self {
        HookwireError::Custom(err)
    }
}

impl From<BoxError> for HookError {
    fn from(err: BoxError) -> Self {
        HookError::Custom(err)
    }
}
