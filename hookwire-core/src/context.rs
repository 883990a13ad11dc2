//! # Invocation Context
//!
//! A [`Context`] travels with every `find`, filter call and handler call. The
//! registry never looks inside it; it exists for the plugin-activity oracle
//! (which reads the tenant) and for handlers (cancellation, request-scoped
//! values).
//!
//! Values are stored type-erased under static keys and read back with a
//! runtime type check, so asking for the wrong type is a [`ContextError`]
//! rather than a panic.
//!
//! # Example
//!
//! ```rust
//! use hookwire_core::{Context, ContextError};
//!
//! let ctx = Context::new().with_tenant("acme").with_value("actor_id", 42_u64);
//!
//! assert_eq!(ctx.tenant(), Some("acme"));
//! assert_eq!(ctx.require::<u64>("actor_id"), Ok(&42));
//! assert!(matches!(
//!     ctx.value::<String>("actor_id"),
//!     Err(ContextError::TypeMismatch { .. })
//! ));
//! ```

use crate::error::ContextError;
use std::any::{Any, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

type Value = Arc<dyn Any + Send + Sync>;

/// Opaque carrier for per-invocation state.
///
/// Cloning is cheap; builders return a new context and leave the original
/// untouched.
#[derive(Clone, Default)]
pub struct Context {
    tenant: Option<Arc<str>>,
    values: Arc<HashMap<&'static str, Value>>,
    cancel: CancellationToken,
}

impl Context {
    /// An empty context with a fresh cancellation token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a context bound to the given tenant.
    pub fn with_tenant(&self, tenant: impl Into<Arc<str>>) -> Self {
        Self {
            tenant: Some(tenant.into()),
            ..self.clone()
        }
    }

    /// Returns a context with `value` stored under `key`, replacing any previous value.
    pub fn with_value<T: Any + Send + Sync>(&self, key: &'static str, value: T) -> Self {
        let mut values = HashMap::clone(&self.values);
        values.insert(key, Arc::new(value));
        Self {
            values: Arc::new(values),
            ..self.clone()
        }
    }

    /// Returns a context whose token is a child of this one: cancelling the
    /// parent cancels the child, not the other way around.
    pub fn child(&self) -> Self {
        Self {
            cancel: self.cancel.child_token(),
            ..self.clone()
        }
    }

    /// The tenant this invocation runs for, if any.
    pub fn tenant(&self) -> Option<&str> {
        self.tenant.as_deref()
    }

    /// Look up a value by key.
    ///
    /// Returns `Ok(None)` when nothing is stored under the key and
    /// [`ContextError::TypeMismatch`] when the stored value is not a `T`.
    pub fn value<T: Any>(&self, key: &'static str) -> Result<Option<&T>, ContextError> {
        match self.values.get(key) {
            None => Ok(None),
            Some(value) => value
                .downcast_ref::<T>()
                .map(Some)
                .ok_or(ContextError::TypeMismatch {
                    key,
                    expected: type_name::<T>(),
                }),
        }
    }

    /// Look up a value that must be present.
    pub fn require<T: Any>(&self, key: &'static str) -> Result<&T, ContextError> {
        self.value(key)?.ok_or(ContextError::Missing(key))
    }

    /// The cancellation token handlers may observe.
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Request cancellation of this context and its children.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&&str> = self.values.keys().collect();
        keys.sort();
        f.debug_struct("Context")
            .field("tenant", &self.tenant)
            .field("keys", &keys)
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
