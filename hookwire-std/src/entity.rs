//! Per-entity hook bundles.
//!
//! A domain service usually exposes several interception points for one
//! entity: the in-memory model (mutators and events) and the four query
//! builders used to read and write it. [`EntityHooks`] owns one collection for
//! each of them, all gated by the same activity oracle, and hands out
//! plugin-scoped registries.
//!
//! # Example
//!
//! ```rust,ignore
//! struct Orders;
//!
//! impl Entity for Orders {
//!     type Model = Order;
//!     type Select = SelectBuilder;
//!     type Insert = InsertBuilder;
//!     type Update = UpdateBuilder;
//!     type Delete = DeleteBuilder;
//! }
//!
//! let hooks = EntityHooks::<Orders>::new(activity);
//! hooks.sql_select_hook("tenancy").add(Some(match_kind(Kind::FIND)), scope_to_tenant);
//!
//! let query = hooks.select(&ctx, &kinds![Kind::FIND, Kind::MANY], builder).await;
//! ```

use crate::collection::{Events, Mutators, PluginRegistry};
use crate::{pipeline, query};
use hookwire_core::{
    BoxError, Context, DeleteQuery, EventFn, InsertQuery, Kinds, Message, MutatorFn, PluginActivity,
    SelectQuery, SetError, UpdateQuery,
};
use std::fmt;
use std::sync::Arc;

/// The value types one entity exposes to hooks.
pub trait Entity: Send + Sync + 'static {
    /// The in-memory model.
    type Model: SetError + Clone + Message;
    /// The SELECT builder.
    type Select: SelectQuery;
    /// The INSERT / REPLACE builder.
    type Insert: InsertQuery;
    /// The UPDATE builder.
    type Update: UpdateQuery;
    /// The DELETE builder.
    type Delete: DeleteQuery;
}

/// All hook collections of one entity.
pub struct EntityHooks<E: Entity> {
    model: Mutators<E::Model>,
    model_events: Events<E::Model>,
    select: Mutators<E::Select>,
    insert: Mutators<E::Insert>,
    update: Mutators<E::Update>,
    delete: Mutators<E::Delete>,
}

impl<E: Entity> EntityHooks<E> {
    /// Create empty collections gated by `activity`.
    pub fn new(activity: Arc<dyn PluginActivity>) -> Self {
        Self {
            model: Mutators::new(Arc::clone(&activity)),
            model_events: Events::new(Arc::clone(&activity)),
            select: Mutators::new(Arc::clone(&activity)),
            insert: Mutators::new(Arc::clone(&activity)),
            update: Mutators::new(Arc::clone(&activity)),
            delete: Mutators::new(activity),
        }
    }

    /// Model mutators registered by `plugin_id`.
    pub fn model_hook(&self, plugin_id: &str) -> PluginRegistry<MutatorFn<E::Model>, E::Model> {
        self.model.registry(plugin_id)
    }

    /// Model event hooks registered by `plugin_id`.
    pub fn model_event(&self, plugin_id: &str) -> PluginRegistry<EventFn<E::Model>, E::Model> {
        self.model_events.registry(plugin_id)
    }

    /// SELECT mutators registered by `plugin_id`.
    pub fn sql_select_hook(
        &self,
        plugin_id: &str,
    ) -> PluginRegistry<MutatorFn<E::Select>, E::Select> {
        self.select.registry(plugin_id)
    }

    /// INSERT and REPLACE mutators registered by `plugin_id`.
    pub fn sql_insert_hook(
        &self,
        plugin_id: &str,
    ) -> PluginRegistry<MutatorFn<E::Insert>, E::Insert> {
        self.insert.registry(plugin_id)
    }

    /// UPDATE mutators registered by `plugin_id`.
    pub fn sql_update_hook(
        &self,
        plugin_id: &str,
    ) -> PluginRegistry<MutatorFn<E::Update>, E::Update> {
        self.update.registry(plugin_id)
    }

    /// DELETE mutators registered by `plugin_id`.
    pub fn sql_delete_hook(
        &self,
        plugin_id: &str,
    ) -> PluginRegistry<MutatorFn<E::Delete>, E::Delete> {
        self.delete.registry(plugin_id)
    }

    /// The model mutator collection.
    pub fn model_mutators(&self) -> &Mutators<E::Model> {
        &self.model
    }

    /// The model event collection.
    pub fn model_events(&self) -> &Events<E::Model> {
        &self.model_events
    }

    /// Run the model mutators.
    pub async fn mutate_model(&self, ctx: &Context, kinds: &Kinds, model: E::Model) -> E::Model {
        pipeline::run(ctx, kinds, &self.model, model).await
    }

    /// Notify the model event hooks.
    pub async fn notify_model(
        &self,
        ctx: &Context,
        kinds: &Kinds,
        model: &E::Model,
    ) -> Result<(), BoxError> {
        let events = &self.model_events;
        pipeline::dispatch(ctx, kinds, events, model).await
    }

    /// Run the SELECT mutators.
    pub async fn select(&self, ctx: &Context, kinds: &Kinds, builder: E::Select) -> E::Select {
        query::select(ctx, kinds, &self.select, builder).await
    }

    /// Run the INSERT mutators.
    pub async fn insert(&self, ctx: &Context, kinds: &Kinds, builder: E::Insert) -> E::Insert {
        query::insert(ctx, kinds, &self.insert, builder).await
    }

    /// Run the INSERT mutators on a REPLACE query.
    pub async fn replace(&self, ctx: &Context, kinds: &Kinds, builder: E::Insert) -> E::Insert {
        query::replace(ctx, kinds, &self.insert, builder).await
    }

    /// Run the UPDATE mutators.
    pub async fn update(&self, ctx: &Context, kinds: &Kinds, builder: E::Update) -> E::Update {
        query::update(ctx, kinds, &self.update, builder).await
    }

    /// Run the DELETE mutators.
    pub async fn delete(&self, ctx: &Context, kinds: &Kinds, builder: E::Delete) -> E::Delete {
        query::delete(ctx, kinds, &self.delete, builder).await
    }
}

impl<E: Entity> fmt::Debug for EntityHooks<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityHooks")
            .field("model", &self.model.len())
            .field("model_events", &self.model_events.len())
            .field("select", &self.select.len())
            .field("insert", &self.insert.len())
            .field("update", &self.update.len())
            .field("delete", &self.delete.len())
            .finish()
    }
}
