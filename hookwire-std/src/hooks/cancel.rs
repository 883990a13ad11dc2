//! Cancellation-aware wrapper.

use hookwire_core::{BoxError, Context, EventHook, HookError, Kinds, Message, Mutator};

/// A hook that refuses to run once the context has been cancelled.
///
/// The check happens before the wrapped handler starts; a handler already
/// running is not interrupted.
pub struct Cancellable<H> {
    inner: H,
}

impl<H> Cancellable<H> {
    /// Wrap `inner`.
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<V: Message, H: Mutator<V>> Mutator<V> for Cancellable<H> {
    async fn mutate(&self, ctx: &Context, kinds: &Kinds, value: V) -> Result<V, BoxError> {
        if ctx.is_cancelled() {
            return Err(HookError::Cancelled.into());
        }
        self.inner.mutate(ctx, kinds, value).await
    }
}

impl<V: Message, H: EventHook<V>> EventHook<V> for Cancellable<H> {
    async fn on_event(&self, ctx: &Context, kinds: &Kinds, value: &V) -> Result<(), BoxError> {
        if ctx.is_cancelled() {
            return Err(HookError::Cancelled.into());
        }
        self.inner.on_event(ctx, kinds, value).await
    }
}
