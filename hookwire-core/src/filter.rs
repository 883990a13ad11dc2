//! # Filters
//!
//! A [`Filter`] decides whether a registered hook applies to one invocation.
//! It is a pure predicate over the context, the kinds of the invocation and
//! the value itself. Combinators are plain functions returning new filters.
//!
//! Registries take an `Option<Filter<V>>`: `None` always matches. That is a
//! registry policy; a `Filter` itself always has a predicate.
//!
//! # Example
//!
//! ```rust
//! use hookwire_core::{Context, Kind, and_filters, exclude_kind, kinds, match_kind};
//!
//! let creates_by_humans = and_filters::<()>(vec![
//!     match_kind(Kind::CREATE),
//!     exclude_kind(Kind::SYSTEM),
//! ]);
//!
//! let ctx = Context::new();
//! assert!(creates_by_humans.matches(&ctx, &kinds![Kind::CREATE, Kind::UI], &()));
//! assert!(!creates_by_humans.matches(&ctx, &kinds![Kind::CREATE, Kind::SYSTEM], &()));
//! ```

use crate::{context::Context, kind::Kind, kind::Kinds};
use std::fmt;
use std::sync::Arc;

type Predicate<V> = dyn Fn(&Context, &Kinds, &V) -> bool + Send + Sync;

/// A predicate deciding whether a hook applies to an invocation.
pub struct Filter<V>(Arc<Predicate<V>>);

impl<V> Filter<V> {
    /// Create a filter from a predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Context, &Kinds, &V) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(predicate))
    }

    /// Evaluate the filter.
    pub fn matches(&self, ctx: &Context, kinds: &Kinds, value: &V) -> bool {
        (self.0)(ctx, kinds, value)
    }
}

impl<V> Clone for Filter<V> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<V> fmt::Debug for Filter<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Filter")
    }
}

/// Matches when every filter matches. An empty list always matches.
pub fn and_filters<V: 'static>(list: Vec<Filter<V>>) -> Filter<V> {
    Filter::new(move |ctx, kinds, value| {
        list.iter().all(|filter| filter.matches(ctx, kinds, value))
    })
}

/// Matches when at least one filter matches. An empty list never matches.
pub fn or_filters<V: 'static>(list: Vec<Filter<V>>) -> Filter<V> {
    Filter::new(move |ctx, kinds, value| {
        list.iter().any(|filter| filter.matches(ctx, kinds, value))
    })
}

/// Always matches.
pub fn match_any<V: 'static>() -> Filter<V> {
    Filter::new(|_, _, _| true)
}

/// Matches when `kind` is present.
pub fn match_kind<V: 'static>(kind: Kind) -> Filter<V> {
    Filter::new(move |_, kinds, _| kinds.has(&kind))
}

/// Matches when `kind` is absent.
pub fn exclude_kind<V: 'static>(kind: Kind) -> Filter<V> {
    Filter::new(move |_, kinds, _| kinds.not(&kind))
}

/// Matches when every listed kind is present.
pub fn match_all_kinds<V: 'static>(list: impl IntoIterator<Item = Kind>) -> Filter<V> {
    let list: Vec<Kind> = list.into_iter().collect();
    Filter::new(move |_, kinds, _| kinds.has_all(&list))
}

/// Matches when at least one listed kind is present.
pub fn match_any_kinds<V: 'static>(list: impl IntoIterator<Item = Kind>) -> Filter<V> {
    let list: Vec<Kind> = list.into_iter().collect();
    Filter::new(move |_, kinds, _| kinds.has_any(&list))
}

/// Matches when the invocation kinds are exactly the listed ones.
pub fn match_only_kinds<V: 'static>(list: impl IntoIterator<Item = Kind>) -> Filter<V> {
    let list: Vec<Kind> = list.into_iter().collect();
    Filter::new(move |_, kinds, _| kinds.has_only(&list))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds;

    fn check(filter: &Filter<i32>, kinds: &Kinds) -> bool {
        filter.matches(&Context::new(), kinds, &0)
    }

    #[test]
    fn test_empty_combinators() {
        assert!(check(&and_filters(vec![]), &Kinds::empty()));
        assert!(!check(&or_filters(vec![]), &Kinds::empty()));
    }

    #[test]
    fn test_and_or() {
        let create = match_kind(Kind::CREATE);
        let before = match_kind(Kind::BEFORE);
        let both = and_filters(vec![create.clone(), before.clone()]);
        let either = or_filters(vec![create, before]);

        assert!(check(&both, &kinds![Kind::CREATE, Kind::BEFORE]));
        assert!(!check(&both, &kinds![Kind::CREATE]));
        assert!(check(&either, &kinds![Kind::CREATE]));
        assert!(!check(&either, &kinds![Kind::DELETE]));
    }

    #[test]
    fn test_kind_filters() {
        let kinds = kinds![Kind::UPDATE, Kind::ONE];

        assert!(check(&match_any(), &Kinds::empty()));
        assert!(check(&match_kind(Kind::UPDATE), &kinds));
        assert!(!check(&exclude_kind(Kind::UPDATE), &kinds));
        assert!(check(&exclude_kind(Kind::DELETE), &kinds));
        assert!(check(&match_all_kinds([Kind::UPDATE, Kind::ONE]), &kinds));
        assert!(!check(&match_all_kinds([Kind::UPDATE, Kind::MANY]), &kinds));
        assert!(check(&match_any_kinds([Kind::MANY, Kind::ONE]), &kinds));
        assert!(!check(&match_any_kinds([Kind::MANY]), &kinds));
        assert!(check(&match_only_kinds([Kind::ONE, Kind::UPDATE]), &kinds));
        assert!(!check(&match_only_kinds([Kind::UPDATE]), &kinds));
    }

    #[test]
    fn test_value_and_context_predicates() {
        let positive = Filter::new(|_, _, value: &i32| *value > 0);
        let tenant_only = Filter::<i32>::new(|ctx, _, _| ctx.tenant().is_some());

        let ctx = Context::new().with_tenant("t1");
        assert!(positive.matches(&ctx, &Kinds::empty(), &1));
        assert!(!positive.matches(&ctx, &Kinds::empty(), &-1));
        assert!(tenant_only.matches(&ctx, &Kinds::empty(), &1));
        assert!(!tenant_only.matches(&Context::new(), &Kinds::empty(), &1));
    }
}
