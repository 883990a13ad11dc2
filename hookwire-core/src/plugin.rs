//! Plugin activity contract.
//!
//! Collections consult a [`PluginActivity`] oracle on every `find` and skip
//! the entries of plugins that are not active for the invocation's context.
//! The oracle is injected; nothing here knows how plugins are loaded.

use crate::context::Context;
use std::sync::Arc;

/// Answers whether a plugin's hooks should run.
pub trait PluginActivity: Send + Sync {
    /// Whether the plugin is a system plugin. System plugins are active for
    /// every tenant and cannot be disabled per tenant.
    fn is_system(&self, plugin_id: &str) -> bool;

    /// Whether the plugin is active for the tenant of `ctx`.
    fn is_active(&self, ctx: &Context, plugin_id: &str) -> bool;
}

impl<T: PluginActivity + ?Sized> PluginActivity for Arc<T> {
    fn is_system(&self, plugin_id: &str) -> bool {
        (**self).is_system(plugin_id)
    }

    fn is_active(&self, ctx: &Context, plugin_id: &str) -> bool {
        (**self).is_active(ctx, plugin_id)
    }
}

impl<T: PluginActivity + ?Sized> PluginActivity for &T {
    fn is_system(&self, plugin_id: &str) -> bool {
        (**self).is_system(plugin_id)
    }

    fn is_active(&self, ctx: &Context, plugin_id: &str) -> bool {
        (**self).is_active(ctx, plugin_id)
    }
}
