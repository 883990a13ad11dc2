//! Logging wrapper for handler observation.

use hookwire_core::{BoxError, Context, EventHook, Kinds, Message, Mutator};

/// A hook that logs each invocation of the wrapped handler.
///
/// With the `tracing` feature enabled every call runs inside a `hook` span
/// carrying the plugin label and the kinds, and its outcome is reported as an
/// event. Without the feature the wrapper only forwards the call.
pub struct Logged<H> {
    label: &'static str,
    inner: H,
}

impl<H> Logged<H> {
    /// Wrap `inner`, tagging its log records with `label`.
    pub fn new(label: &'static str, inner: H) -> Self {
        Self { label, inner }
    }

    /// The label attached to log records.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Unwrap the inner handler.
    pub fn into_inner(self) -> H {
        self.inner
    }

    #[cfg(feature = "tracing")]
    fn span(&self, kinds: &Kinds) -> tracing::Span {
        let rendered = render(kinds);
        tracing::debug_span!("hook", plugin = self.label, kinds = %rendered)
    }
}

#[cfg(feature = "tracing")]
fn render(kinds: &Kinds) -> String {
    kinds
        .sorted()
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

impl<V: Message, H: Mutator<V>> Mutator<V> for Logged<H> {
    async fn mutate(&self, ctx: &Context, kinds: &Kinds, value: V) -> Result<V, BoxError> {
        #[cfg(feature = "tracing")]
        {
            use tracing::Instrument;

            let span = self.span(kinds);
            let result = self
                .inner
                .mutate(ctx, kinds, value)
                .instrument(span.clone())
                .await;
            span.in_scope(|| match &result {
                Ok(_) => tracing::debug!("mutator finished"),
                Err(error) => tracing::warn!(%error, "mutator failed"),
            });
            result
        }
        #[cfg(not(feature = "tracing"))]
        {
            self.inner.mutate(ctx, kinds, value).await
        }
    }
}

impl<V: Message, H: EventHook<V>> EventHook<V> for Logged<H> {
    async fn on_event(&self, ctx: &Context, kinds: &Kinds, value: &V) -> Result<(), BoxError> {
        #[cfg(feature = "tracing")]
        {
            use tracing::Instrument;

            let span = self.span(kinds);
            let result = self
                .inner
                .on_event(ctx, kinds, value)
                .instrument(span.clone())
                .await;
            span.in_scope(|| match &result {
                Ok(()) => tracing::debug!("event hook finished"),
                Err(error) => tracing::warn!(%error, "event hook failed"),
            });
            result
        }
        #[cfg(not(feature = "tracing"))]
        {
            self.inner.on_event(ctx, kinds, value).await
        }
    }
}
