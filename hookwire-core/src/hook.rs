//! # Handler Contracts
//!
//! Two kinds of handlers can be registered for a value type `V`:
//!
//! - [`Mutator`]: receives the current value and returns its replacement, or
//!   fails and short-circuits the pipeline.
//! - [`EventHook`]: observes the value without changing it; a failure aborts
//!   the dispatch and reaches the caller directly.
//!
//! Both traits use native `async fn` for static dispatch. Collections store
//! the object-safe [`DynMutator`] / [`DynEventHook`] behind an `Arc`, see
//! [`MutatorFn`] and [`EventFn`].

use crate::{context::Context, error::BoxError, kind::Kinds, message::Message};
use std::{future::Future, pin::Pin, sync::Arc};

/// Future returned by the object-safe handler traits.
pub type HookFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, BoxError>> + Send + 'a>>;

/// A hook that may transform a value or fail.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Mutator<{V}>`",
    label = "missing `Mutator` implementation",
    note = "Mutators must implement `mutate` for the value type `{V}`."
)]
pub trait Mutator<V: Message>: Send + Sync + 'static {
    /// Transform `value`, or fail.
    fn mutate(
        &self,
        ctx: &Context,
        kinds: &Kinds,
        value: V,
    ) -> impl Future<Output = Result<V, BoxError>> + Send;
}

/// A non-mutating hook for auditing, notifications and other side effects.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `EventHook<{V}>`",
    label = "missing `EventHook` implementation",
    note = "Event hooks must implement `on_event` for the value type `{V}`."
)]
pub trait EventHook<V: Message>: Send + Sync + 'static {
    /// Observe `value`.
    fn on_event(
        &self,
        ctx: &Context,
        kinds: &Kinds,
        value: &V,
    ) -> impl Future<Output = Result<(), BoxError>> + Send;
}

/// Dynamic object-safe version of [`Mutator`].
pub trait DynMutator<V: Message>: Send + Sync + 'static {
    /// Transform `value` (dynamic dispatch version).
    fn mutate_dyn<'a>(
        &'a self,
        ctx: &'a Context,
        kinds: &'a Kinds,
        value: V,
    ) -> HookFuture<'a, V>;
}

impl<V: Message, T: Mutator<V>> DynMutator<V> for T {
    fn mutate_dyn<'a>(
        &'a self,
        ctx: &'a Context,
        kinds: &'a Kinds,
        value: V,
    ) -> HookFuture<'a, V> {
        Box::pin(self.mutate(ctx, kinds, value))
    }
}

/// Dynamic object-safe version of [`EventHook`].
pub trait DynEventHook<V: Message>: Send + Sync + 'static {
    /// Observe `value` (dynamic dispatch version).
    fn on_event_dyn<'a>(
        &'a self,
        ctx: &'a Context,
        kinds: &'a Kinds,
        value: &'a V,
    ) -> HookFuture<'a, ()>;
}

impl<V: Message, T: EventHook<V>> DynEventHook<V> for T {
    fn on_event_dyn<'a>(
        &'a self,
        ctx: &'a Context,
        kinds: &'a Kinds,
        value: &'a V,
    ) -> HookFuture<'a, ()> {
        Box::pin(self.on_event(ctx, kinds, value))
    }
}

/// The handler type stored by mutator collections.
pub type MutatorFn<V> = Arc<dyn DynMutator<V>>;

/// The handler type stored by event collections.
pub type EventFn<V> = Arc<dyn DynEventHook<V>>;

/// A [`Mutator`] built from a synchronous closure. See [`mutator_fn`].
pub struct FnMutator<F>(F);

impl<V, F> Mutator<V> for FnMutator<F>
where
    V: Message,
    F: Fn(&Context, &Kinds, V) -> Result<V, BoxError> + Send + Sync + 'static,
{
    async fn mutate(&self, ctx: &Context, kinds: &Kinds, value: V) -> Result<V, BoxError> {
        (self.0)(ctx, kinds, value)
    }
}

/// An [`EventHook`] built from a synchronous closure. See [`event_fn`].
pub struct FnEvent<F>(F);

impl<V, F> EventHook<V> for FnEvent<F>
where
    V: Message,
    F: Fn(&Context, &Kinds, &V) -> Result<(), BoxError> + Send + Sync + 'static,
{
    async fn on_event(&self, ctx: &Context, kinds: &Kinds, value: &V) -> Result<(), BoxError> {
        (self.0)(ctx, kinds, value)
    }
}

/// Wrap a synchronous closure into a registrable mutator.
///
/// ```rust
/// use hookwire_core::{MutatorFn, mutator_fn};
///
/// let trim: MutatorFn<String> = mutator_fn(|_, _, value: String| Ok(value.trim().to_string()));
/// ```
pub fn mutator_fn<V, F>(f: F) -> MutatorFn<V>
where
    V: Message,
    F: Fn(&Context, &Kinds, V) -> Result<V, BoxError> + Send + Sync + 'static,
{
    Arc::new(FnMutator(f))
}

/// Wrap a synchronous closure into a registrable event hook.
pub fn event_fn<V, F>(f: F) -> EventFn<V>
where
    V: Message,
    F: Fn(&Context, &Kinds, &V) -> Result<(), BoxError> + Send + Sync + 'static,
{
    Arc::new(FnEvent(f))
}
