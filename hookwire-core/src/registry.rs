//! # Registry and Provider Contracts
//!
//! The write side and the read side of a hook collection:
//!
//! - [`Registry`] appends handlers together with an optional [`Filter`].
//! - [`Provider`] returns the handlers applicable to one invocation.
//!
//! `H` is the stored handler type ([`MutatorFn`](crate::MutatorFn) or
//! [`EventFn`](crate::EventFn)), `V` the value type the filters inspect.

use crate::{context::Context, filter::Filter, kind::Kinds};
use std::iter::FusedIterator;

/// Write side of a hook collection.
pub trait Registry<H, V>: Send + Sync {
    /// Register a handler. A `None` filter matches every invocation.
    ///
    /// Returns the registry itself so registrations can be chained.
    fn add(&self, filter: Option<Filter<V>>, handler: H) -> &Self;
}

/// Read side of a hook collection.
pub trait Provider<H, V>: Send + Sync {
    /// The handlers applicable to this invocation, in registration order.
    ///
    /// Evaluated afresh on every call; the result is a private snapshot that
    /// later registrations do not affect. Implementations must not hold a lock
    /// while evaluating filters or activity checks, so a filter may register
    /// or look up hooks on the same collection.
    fn find(&self, ctx: &Context, kinds: &Kinds, value: &V) -> Matches<H>;
}

impl<H, V, P: Provider<H, V> + ?Sized> Provider<H, V> for std::sync::Arc<P> {
    fn find(&self, ctx: &Context, kinds: &Kinds, value: &V) -> Matches<H> {
        (**self).find(ctx, kinds, value)
    }
}

/// A finite, one-shot sequence of matched handlers.
#[derive(Debug)]
pub struct Matches<H>(std::vec::IntoIter<H>);

impl<H> Matches<H> {
    /// A sequence with no handlers.
    pub fn empty() -> Self {
        Self(Vec::new().into_iter())
    }
}

impl<H> From<Vec<H>> for Matches<H> {
    fn from(handlers: Vec<H>) -> Self {
        Self(handlers.into_iter())
    }
}

impl<H> Iterator for Matches<H> {
    type Item = H;

    fn next(&mut self) -> Option<H> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<H> ExactSizeIterator for Matches<H> {}
impl<H> FusedIterator for Matches<H> {}
