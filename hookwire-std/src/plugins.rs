//! Plugin activity oracles.
//!
//! [`PluginTable`] is an in-memory [`PluginActivity`]: plugins are declared
//! either as system plugins (always active) or as tenant plugins, which are
//! active only for the tenants that enabled them. [`AlwaysActive`] suits
//! single-tenant hosts.

use hookwire_core::{Context, PluginActivity};
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};

/// Treats every plugin as active.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysActive;

impl PluginActivity for AlwaysActive {
    fn is_system(&self, _plugin_id: &str) -> bool {
        false
    }

    fn is_active(&self, _ctx: &Context, _plugin_id: &str) -> bool {
        true
    }
}

#[derive(Debug)]
enum Scope {
    System,
    Tenant(HashSet<String>),
}

/// In-memory activation state per plugin and tenant.
///
/// Unknown plugins are inactive. A context without a tenant only sees
/// system plugins.
#[derive(Debug, Default)]
pub struct PluginTable {
    plugins: RwLock<HashMap<String, Scope>>,
}

impl PluginTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a system plugin, active for every tenant.
    pub fn system(self, plugin_id: impl Into<String>) -> Self {
        self.plugins.write().insert(plugin_id.into(), Scope::System);
        self
    }

    /// Declare a tenant plugin, inactive until a tenant enables it.
    pub fn tenant(self, plugin_id: impl Into<String>) -> Self {
        self.plugins
            .write()
            .entry(plugin_id.into())
            .or_insert_with(|| Scope::Tenant(HashSet::new()));
        self
    }

    /// Enable a tenant plugin for `tenant`.
    ///
    /// Returns `false` when the plugin is unknown or a system plugin.
    pub fn enable(&self, tenant: &str, plugin_id: &str) -> bool {
        match self.plugins.write().get_mut(plugin_id) {
            Some(Scope::Tenant(tenants)) => {
                tenants.insert(tenant.to_owned());
                true
            }
            _ => false,
        }
    }

    /// Disable a tenant plugin for `tenant`.
    ///
    /// Returns `false` when the plugin is unknown or a system plugin.
    pub fn disable(&self, tenant: &str, plugin_id: &str) -> bool {
        match self.plugins.write().get_mut(plugin_id) {
            Some(Scope::Tenant(tenants)) => {
                tenants.remove(tenant);
                true
            }
            _ => false,
        }
    }
}

impl PluginActivity for PluginTable {
    fn is_system(&self, plugin_id: &str) -> bool {
        matches!(self.plugins.read().get(plugin_id), Some(Scope::System))
    }

    fn is_active(&self, ctx: &Context, plugin_id: &str) -> bool {
        match self.plugins.read().get(plugin_id) {
            Some(Scope::System) => true,
            Some(Scope::Tenant(tenants)) => ctx.tenant().is_some_and(|t| tenants.contains(t)),
            None => false,
        }
    }
}
