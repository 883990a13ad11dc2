//! Pipeline runner.
//!
//! [`run`] applies every matching mutator to a value, strictly one after the
//! other, each seeing the result of the previous one. The first failure is
//! attached to the current value with [`SetError`] and ends the run; later
//! mutators are not called.
//!
//! [`dispatch`] walks matching event hooks the same way and returns the first
//! failure to the caller.

use hookwire_core::{BoxError, Context, EventFn, Kinds, Message, MutatorFn, Provider, SetError};

/// Apply the mutators `provider` finds for `value`.
///
/// Returns `value` unchanged when nothing matches. On failure, returns the
/// last successfully mutated value with the error attached.
pub async fn run<V, P>(ctx: &Context, kinds: &Kinds, provider: &P, value: V) -> V
where
    V: SetError + Clone + Message,
    P: Provider<MutatorFn<V>, V> + ?Sized,
{
    let mut current = value;
    for handler in provider.find(ctx, kinds, &current) {
        match handler.mutate_dyn(ctx, kinds, current.clone()).await {
            Ok(next) => current = next,
            Err(err) => return current.set_error(err),
        }
    }
    current
}

/// Notify the event hooks `provider` finds for `value`.
///
/// Stops at the first failing hook and returns its error.
pub async fn dispatch<V, P>(
    ctx: &Context,
    kinds: &Kinds,
    provider: &P,
    value: &V,
) -> Result<(), BoxError>
where
    V: Message,
    P: Provider<EventFn<V>, V> + ?Sized,
{
    for handler in provider.find(ctx, kinds, value) {
        handler.on_event_dyn(ctx, kinds, value).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{Events, Mutators};
    use crate::testing::{FailingMutator, Journal, RecordingEvent, RecordingMutator, StaticActivity};
    use hookwire_core::{Kind, Registry, kinds, match_kind, mutator_fn};
    use std::sync::Arc;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Draft {
        body: String,
        error: Option<String>,
    }

    impl Message for Draft {}

    impl SetError for Draft {
        fn set_error(mut self, err: BoxError) -> Self {
            self.error = Some(err.to_string());
            self
        }
    }

    fn appending(label: &'static str, journal: &Journal, suffix: &'static str) -> MutatorFn<Draft> {
        let transform = move |mut draft: Draft| {
            draft.body.push_str(suffix);
            draft
        };
        Arc::new(RecordingMutator::new(label, journal, transform))
    }

    fn failing(label: &'static str, journal: &Journal) -> MutatorFn<Draft> {
        Arc::new(FailingMutator::new(label, journal, "rejected"))
    }

    fn mutators() -> Mutators<Draft> {
        Mutators::new(Arc::new(StaticActivity::new(["p"])))
    }

    fn events() -> Events<Draft> {
        Events::new(Arc::new(StaticActivity::new(["p"])))
    }

    async fn run_plain(collection: &Mutators<Draft>, draft: Draft) -> Draft {
        let ctx = Context::new();
        run(&ctx, &Kinds::empty(), collection, draft).await
    }

    #[tokio::test]
    async fn test_no_matches_returns_value() {
        let draft = Draft {
            body: "x".into(),
            error: None,
        };
        let result = run_plain(&mutators(), draft.clone()).await;
        assert_eq!(result, draft);
    }

    #[tokio::test]
    async fn test_mutators_compose_in_order() {
        let journal = Journal::new();
        let collection = mutators();
        collection
            .registry("p")
            .add(None, appending("h1", &journal, "1"))
            .add(None, appending("h2", &journal, "2"));

        let result = run_plain(&collection, Draft::default()).await;
        assert_eq!(result.body, "12");
        assert_eq!(result.error, None);
        assert_eq!(journal.entries(), vec!["h1", "h2"]);
    }

    #[tokio::test]
    async fn test_first_error_short_circuits() {
        let journal = Journal::new();
        let collection = mutators();
        collection
            .registry("p")
            .add(None, appending("h1", &journal, "1"))
            .add(None, failing("h2", &journal))
            .add(None, appending("h3", &journal, "3"));

        let result = run_plain(&collection, Draft::default()).await;
        assert_eq!(
            result,
            Draft {
                body: "1".into(),
                error: Some("rejected".into()),
            }
        );
        assert_eq!(journal.entries(), vec!["h1", "h2"]);
    }

    #[tokio::test]
    async fn test_filters_select_mutators() {
        let journal = Journal::new();
        let collection = mutators();
        collection
            .registry("p")
            .add(
                Some(match_kind(Kind::CREATE)),
                appending("create", &journal, "c"),
            )
            .add(
                Some(match_kind(Kind::UPDATE)),
                appending("update", &journal, "u"),
            );

        let ctx = Context::new();
        let kinds = kinds![Kind::UPDATE];
        let result = run(&ctx, &kinds, &collection, Draft::default()).await;
        assert_eq!(result.body, "u");
        assert_eq!(journal.entries(), vec!["update"]);
    }

    #[tokio::test]
    async fn test_dispatch_runs_all_events() {
        let journal = Journal::new();
        let events = events();
        events
            .registry("p")
            .add(None, Arc::new(RecordingEvent::new("audit", &journal)))
            .add(None, Arc::new(RecordingEvent::new("notify", &journal)));

        let ctx = Context::new();
        let kinds = Kinds::empty();
        let draft = Draft::default();
        dispatch(&ctx, &kinds, &events, &draft).await.unwrap();
        assert_eq!(journal.entries(), vec!["audit", "notify"]);
    }

    #[tokio::test]
    async fn test_dispatch_propagates_first_error() {
        let journal = Journal::new();
        let audit: EventFn<Draft> = Arc::new(RecordingEvent::failing("audit", &journal, "down"));
        let events = events();
        events
            .registry("p")
            .add(None, audit)
            .add(None, Arc::new(RecordingEvent::new("notify", &journal)));

        let ctx = Context::new();
        let draft = Draft::default();
        let err = dispatch(&ctx, &Kinds::empty(), &events, &draft)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "down");
        assert_eq!(journal.entries(), vec!["audit"]);
    }

    #[tokio::test]
    async fn test_handler_may_register_during_run() {
        let collection = mutators();
        let registry = collection.registry("p");
        let inner = registry.clone();
        registry.add(
            None,
            mutator_fn(move |_, _, draft: Draft| {
                inner.add(None, mutator_fn(|_, _, draft: Draft| Ok(draft)));
                Ok(draft)
            }),
        );

        run_plain(&collection, Draft::default()).await;
        assert_eq!(collection.len(), 2);
    }
}
