//! # hookwire-std
//!
//! Standard implementations for the hookwire hook pipeline.
//!
//! This crate provides:
//! - **Collections**: [`Collection`], the plugin-scoped registry engine, with
//!   the [`Mutators`] and [`Events`] aliases
//! - **Pipeline**: [`pipeline::run`] and [`pipeline::dispatch`]
//! - **Query entry points**: [`query::select`], [`query::insert`],
//!   [`query::replace`], [`query::update`], [`query::delete`]
//! - **Entity bundles**: [`EntityHooks`]
//! - **Named lookup**: [`Catalog`]
//! - **Plugin activity**: [`PluginTable`], [`AlwaysActive`]
//! - **Wrapper hooks**: logging, timeout, cancellation

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use hookwire_core;

// Modules
pub mod catalog;
pub mod collection;
pub mod entity;
pub mod hooks;
pub mod pipeline;
pub mod plugins;
pub mod query;
pub mod testing;

pub use catalog::Catalog;
pub use collection::{Collection, Events, Mutators, PluginRegistry};
pub use entity::{Entity, EntityHooks};
pub use plugins::{AlwaysActive, PluginTable};
