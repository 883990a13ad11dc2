//! Plugin-scoped hook collection.
//!
//! One [`Collection`] exists per hookable value type. Every plugin registers
//! through its own [`PluginRegistry`] view, which stamps the plugin ID onto
//! each entry while all plugins share the same storage.
//!
//! Storage is an append-only `Vec` behind a reader/writer lock. `add` holds
//! the write lock for a single push; `find` holds the read lock only while it
//! copies the entries out. Activity checks, filters and handlers all run after
//! the lock is released, so any of them may use the collection again without
//! deadlocking.

use hookwire_core::{
    Context, EventFn, Filter, Kinds, Matches, MutatorFn, PluginActivity, Provider, Registry,
};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// A plugin-aware collection of value-transforming hooks.
pub type Mutators<V> = Collection<MutatorFn<V>, V>;

/// A plugin-aware collection of observing hooks.
pub type Events<V> = Collection<EventFn<V>, V>;

/// One registration. Never modified after insertion.
struct Entry<H, V> {
    plugin_id: Arc<str>,
    filter: Option<Filter<V>>,
    handler: H,
}

impl<H: Clone, V> Clone for Entry<H, V> {
    fn clone(&self) -> Self {
        Self {
            plugin_id: Arc::clone(&self.plugin_id),
            filter: self.filter.clone(),
            handler: self.handler.clone(),
        }
    }
}

struct Storage<H, V> {
    entries: RwLock<Vec<Entry<H, V>>>,
}

/// A concurrency-safe, plugin-scoped hook collection.
///
/// Cloning yields another handle to the same storage.
pub struct Collection<H, V> {
    activity: Arc<dyn PluginActivity>,
    storage: Arc<Storage<H, V>>,
}

impl<H, V> Collection<H, V> {
    /// Create an empty collection gated by `activity`.
    pub fn new(activity: Arc<dyn PluginActivity>) -> Self {
        Self {
            activity,
            storage: Arc::new(Storage {
                entries: RwLock::new(Vec::new()),
            }),
        }
    }

    /// A registry that records new entries under `plugin_id`.
    pub fn registry(&self, plugin_id: impl Into<Arc<str>>) -> PluginRegistry<H, V> {
        PluginRegistry {
            storage: Arc::clone(&self.storage),
            plugin_id: plugin_id.into(),
        }
    }

    /// The activity oracle consulted by `find`.
    pub fn activity(&self) -> &Arc<dyn PluginActivity> {
        &self.activity
    }

    /// Number of registered entries, across all plugins.
    pub fn len(&self) -> usize {
        self.storage.entries.read().len()
    }

    /// Whether nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.storage.entries.read().is_empty()
    }
}

impl<H, V> Clone for Collection<H, V> {
    fn clone(&self) -> Self {
        Self {
            activity: Arc::clone(&self.activity),
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<H, V> fmt::Debug for Collection<H, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("entries", &self.len())
            .finish_non_exhaustive()
    }
}

impl<H, V> Provider<H, V> for Collection<H, V>
where
    H: Clone + Send + Sync,
    V: Send + Sync,
{
    fn find(&self, ctx: &Context, kinds: &Kinds, value: &V) -> Matches<H> {
        let entries = self.storage.entries.read().clone();
        let matched: Vec<H> = entries
            .into_iter()
            .filter(|entry| self.activity.is_active(ctx, &entry.plugin_id))
            .filter(|entry| {
                entry
                    .filter
                    .as_ref()
                    .is_none_or(|filter| filter.matches(ctx, kinds, value))
            })
            .map(|entry| entry.handler)
            .collect();
        Matches::from(matched)
    }
}

/// A view of a [`Collection`] that registers hooks on behalf of one plugin.
pub struct PluginRegistry<H, V> {
    storage: Arc<Storage<H, V>>,
    plugin_id: Arc<str>,
}

impl<H, V> PluginRegistry<H, V> {
    /// The plugin this registry registers for.
    pub fn plugin_id(&self) -> &str {
        &self.plugin_id
    }
}

impl<H, V> Clone for PluginRegistry<H, V> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            plugin_id: Arc::clone(&self.plugin_id),
        }
    }
}

impl<H, V> fmt::Debug for PluginRegistry<H, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("plugin_id", &self.plugin_id)
            .finish_non_exhaustive()
    }
}

impl<H, V> Registry<H, V> for PluginRegistry<H, V>
where
    H: Send + Sync,
    V: Send + Sync,
{
    fn add(&self, filter: Option<Filter<V>>, handler: H) -> &Self {
        let entry = Entry {
            plugin_id: Arc::clone(&self.plugin_id),
            filter,
            handler,
        };
        self.storage.entries.write().push(entry);
        self
    }
}
