//! Timeout wrapper for time-limited execution.

use hookwire_core::{BoxError, Context, EventHook, HookError, Kinds, Message, Mutator};
use std::time::Duration;
use tokio::time::timeout;

/// A hook that fails with [`HookError::Timeout`] when the wrapped handler
/// takes longer than `duration`.
pub struct Timeout<H> {
    inner: H,
    duration: Duration,
}

impl<H> Timeout<H> {
    /// Create a new timeout hook.
    pub fn new(inner: H, duration: Duration) -> Self {
        Self { inner, duration }
    }
}

impl<V: Message, H: Mutator<V>> Mutator<V> for Timeout<H> {
    async fn mutate(&self, ctx: &Context, kinds: &Kinds, value: V) -> Result<V, BoxError> {
        let call = self.inner.mutate(ctx, kinds, value);
        match timeout(self.duration, call).await {
            Ok(result) => result,
            Err(_) => Err(HookError::Timeout(self.duration).into()),
        }
    }
}

impl<V: Message, H: EventHook<V>> EventHook<V> for Timeout<H> {
    async fn on_event(&self, ctx: &Context, kinds: &Kinds, value: &V) -> Result<(), BoxError> {
        let call = self.inner.on_event(ctx, kinds, value);
        match timeout(self.duration, call).await {
            Ok(result) => result,
            Err(_) => Err(HookError::Timeout(self.duration).into()),
        }
    }
}
