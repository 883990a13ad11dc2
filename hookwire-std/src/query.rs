//! Query-builder entry points.
//!
//! Thin, typed wrappers over [`run`] for the five statement shapes. REPLACE
//! shares the INSERT shape, so it takes the same value type and the same
//! collection.

use crate::pipeline::run;
use hookwire_core::{
    Context, DeleteQuery, InsertQuery, Kinds, MutatorFn, Provider, SelectQuery, UpdateQuery,
};

/// Apply mutation hooks to a SELECT query.
pub async fn select<Q, P>(ctx: &Context, kinds: &Kinds, provider: &P, value: Q) -> Q
where
    Q: SelectQuery,
    P: Provider<MutatorFn<Q>, Q> + ?Sized,
{
    run(ctx, kinds, provider, value).await
}

/// Apply mutation hooks to an INSERT query.
pub async fn insert<Q, P>(ctx: &Context, kinds: &Kinds, provider: &P, value: Q) -> Q
where
    Q: InsertQuery,
    P: Provider<MutatorFn<Q>, Q> + ?Sized,
{
    run(ctx, kinds, provider, value).await
}

/// Apply mutation hooks to a REPLACE query, using the INSERT hooks.
pub async fn replace<Q, P>(ctx: &Context, kinds: &Kinds, provider: &P, value: Q) -> Q
where
    Q: InsertQuery,
    P: Provider<MutatorFn<Q>, Q> + ?Sized,
{
    run(ctx, kinds, provider, value).await
}

/// Apply mutation hooks to an UPDATE query.
pub async fn update<Q, P>(ctx: &Context, kinds: &Kinds, provider: &P, value: Q) -> Q
where
    Q: UpdateQuery,
    P: Provider<MutatorFn<Q>, Q> + ?Sized,
{
    run(ctx, kinds, provider, value).await
}

/// Apply mutation hooks to a DELETE query.
pub async fn delete<Q, P>(ctx: &Context, kinds: &Kinds, provider: &P, value: Q) -> Q
where
    Q: DeleteQuery,
    P: Provider<MutatorFn<Q>, Q> + ?Sized,
{
    run(ctx, kinds, provider, value).await
}
