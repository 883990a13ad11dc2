//! Mutation-target contracts.
//!
//! The pipeline never throws: when a mutator fails, the error is attached to
//! the value through [`SetError`] and the value is handed back to the caller,
//! who decides whether it is still usable.

use crate::{error::BoxError, message::Message};

/// A value that can carry a pipeline failure.
pub trait SetError: Sized {
    /// Attach `err` and return the value.
    fn set_error(self, err: BoxError) -> Self;
}

/// Shape of a value a SELECT statement is built from.
pub trait SelectQuery: SetError + Clone + Message {}

/// Shape of a value an INSERT or REPLACE statement is built from.
pub trait InsertQuery: SetError + Clone + Message {}

/// Shape of a value an UPDATE statement is built from.
pub trait UpdateQuery: SetError + Clone + Message {}

/// Shape of a value a DELETE statement is built from.
pub trait DeleteQuery: SetError + Clone + Message {}
