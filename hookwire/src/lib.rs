//! # hookwire - Plugin Hook Pipelines
//!
//! `hookwire` lets a host expose interception points for its values (domain
//! models, query builders) and lets plugins register hooks on them. Every
//! registration is tagged with the plugin that made it, and a hook only runs
//! while its plugin is active for the current tenant.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hookwire::prelude::*;
//!
//! let orders = Mutators::<Order>::new(Arc::new(PluginTable::new().system("billing")));
//!
//! let create = match_kind(Kind::CREATE);
//! let with_tax = mutator_fn(|_, _, order: Order| Ok(order.with_tax()));
//! orders.registry("billing").add(Some(create), with_tax);
//!
//! let kinds = kinds![Kind::BEFORE, Kind::CREATE];
//! let order = hookwire::pipeline::run(&ctx, &kinds, &orders, order).await;
//! ```
//!
//! Mutators run in registration order. The first failure stops the pipeline
//! and is attached to the value through [`SetError`]; event hooks return it
//! to the caller instead.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Errors
pub use hookwire_core::{
    BoxError, CatalogError, ContextError, HookError, HookwireError, PageError, SharedError,
};

// Kinds and context
pub use hookwire_core::{CancellationToken, Context, Initiators, Kind, Kinds, kinds};

// Handlers
pub use hookwire_core::{
    DynEventHook, DynMutator, EventFn, EventHook, FnEvent, FnMutator, HookFuture, Message, Mutator,
    MutatorFn, event_fn, mutator_fn,
};

// Filters
pub use hookwire_core::{
    Filter, and_filters, exclude_kind, match_all_kinds, match_any, match_any_kinds, match_kind,
    match_only_kinds, or_filters,
};

// Registries and plugins
pub use hookwire_core::{Matches, PluginActivity, Provider, Registry};

// Mutation targets
pub use hookwire_core::{DeleteQuery, InsertQuery, SelectQuery, SetError, UpdateQuery};

// Pagination
pub use hookwire_core::{Page, Paginator, Scan};

// Collections and entities
pub use hookwire_std::{
    AlwaysActive, Catalog, Collection, Entity, EntityHooks, Events, Mutators, PluginRegistry,
    PluginTable,
};

/// Pipeline runners.
pub mod pipeline {
    pub use hookwire_std::pipeline::{dispatch, run};
}

/// Query-builder entry points.
pub mod query {
    pub use hookwire_std::query::{delete, insert, replace, select, update};
}

/// Standard wrapper hooks.
pub mod hooks {
    #![allow(clippy::wildcard_imports)]
    pub use hookwire_std::hooks::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use hookwire_std::testing::*;
}

/// Prelude module - common imports for hookwire.
///
/// # Usage
///
/// ```rust,ignore
/// use hookwire::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, Context, EventHook, Events, Filter, Kind, Kinds, Message, Mutator, Mutators,
        PluginActivity, PluginTable, Provider, Registry, SetError, SharedError, event_fn, kinds,
        match_kind, mutator_fn,
    };
}

#[cfg(feature = "macros")]
pub use hookwire_macros::{Message, SetError, event, mutator};
