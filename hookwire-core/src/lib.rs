//! # hookwire-core
//!
//! Core contracts for the hookwire interception pipeline.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! plugins that only register hooks and do not need the `hookwire-std`
//! collection engine.
//!
//! # Building Blocks
//!
//! ## Vocabulary ([`Kind`], [`Kinds`], [`Initiators`])
//!
//! Tags describing what is happening right now: the phase (`Before`,
//! `After`), the operation (`Create`, `Find`, ...), its shape (`One`, `Many`,
//! `ByID`) and who initiated it (`UI`, `System`, `Silent`).
//!
//! ## Applicability ([`Filter`])
//!
//! Pure predicates over context, kinds and value, composed with
//! [`and_filters`], [`or_filters`] and the kind matchers.
//!
//! ## Handlers ([`Mutator`], [`EventHook`])
//!
//! Mutators transform a value or fail; event hooks only observe it.
//!
//! ## Collections ([`Registry`], [`Provider`], [`PluginActivity`])
//!
//! The write side, the read side, and the oracle deciding which plugins'
//! hooks are live for a given [`Context`].
//!
//! ## Targets ([`SetError`])
//!
//! Values that can carry a pipeline failure back to the caller.
//!
//! # Error Types
//!
//! - [`HookwireError`] - Top-level error type
//! - [`HookError`] - Wrapper hook errors
//! - [`ContextError`] - Context lookups
//! - [`CatalogError`] - Collection lookups
//! - [`PageError`] - Pagination bounds

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod context;
mod error;
mod filter;
mod hook;
mod initiator;
mod kind;
mod message;
mod pager;
mod plugin;
mod registry;
mod target;

// Re-exports
pub use context::Context;
pub use error::{
    BoxError, CatalogError, ContextError, HookError, HookwireError, PageError, SharedError,
};
pub use filter::{
    Filter, and_filters, exclude_kind, match_all_kinds, match_any, match_any_kinds, match_kind,
    match_only_kinds, or_filters,
};
pub use hook::{
    DynEventHook, DynMutator, EventFn, EventHook, FnEvent, FnMutator, HookFuture, Mutator,
    MutatorFn, event_fn, mutator_fn,
};
pub use initiator::Initiators;
pub use kind::{Kind, Kinds};
pub use message::Message;
pub use pager::{Page, Paginator, Scan};
pub use plugin::PluginActivity;
pub use registry::{Matches, Provider, Registry};
pub use target::{DeleteQuery, InsertQuery, SelectQuery, SetError, UpdateQuery};

/// Re-exported for `Context::cancellation` users.
pub use tokio_util::sync::CancellationToken;
