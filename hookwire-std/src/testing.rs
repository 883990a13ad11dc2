//! Testing utilities for hookwire.
//!
//! This module provides helpers to make testing collections and pipelines
//! easier.
//!
//! # Features
//!
//! - [`Journal`]: A shared log of handler invocations, in call order
//! - [`RecordingMutator`]: A mutator that logs its label and applies a transform
//! - [`FailingMutator`]: A mutator that logs its label and fails
//! - [`RecordingEvent`]: An event hook that logs its label and optionally fails
//! - [`StaticActivity`]: An activity oracle backed by a mutable set of plugin IDs

use hookwire_core::{BoxError, Context, EventHook, Kinds, Message, Mutator, PluginActivity};
use parking_lot::{Mutex, RwLock};
use std::collections::HashSet;
use std::sync::Arc;

// ============================================================================
// Journal
// ============================================================================

/// A shared, ordered log of handler labels.
///
/// # Example
///
/// ```rust,ignore
/// let journal = Journal::new();
/// registry.add(None, Arc::new(RecordingMutator::new("a", &journal, |v| v)));
///
/// run(&ctx, &kinds, &collection, value).await;
/// assert_eq!(journal.entries(), vec!["a"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a label.
    pub fn record(&self, label: impl Into<String>) {
        self.0.lock().push(label.into());
    }

    /// A copy of the recorded labels.
    pub fn entries(&self) -> Vec<String> {
        self.0.lock().clone()
    }

    /// Number of recorded labels.
    pub fn len(&self) -> usize {
        self.0.lock().len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }

    /// Forget every recorded label.
    pub fn clear(&self) {
        self.0.lock().clear();
    }
}

// ============================================================================
// Recording Mutator
// ============================================================================

/// A mutator that records its label, then applies `transform`.
pub struct RecordingMutator<F> {
    label: &'static str,
    journal: Journal,
    transform: F,
}

impl<F> RecordingMutator<F> {
    /// Create a recording mutator writing to `journal`.
    pub fn new(label: &'static str, journal: &Journal, transform: F) -> Self {
        Self {
            label,
            journal: journal.clone(),
            transform,
        }
    }
}

impl<V, F> Mutator<V> for RecordingMutator<F>
where
    V: Message,
    F: Fn(V) -> V + Send + Sync + 'static,
{
    async fn mutate(&self, _ctx: &Context, _kinds: &Kinds, value: V) -> Result<V, BoxError> {
        self.journal.record(self.label);
        Ok((self.transform)(value))
    }
}

// ============================================================================
// Failing Mutator
// ============================================================================

/// A mutator that records its label, then fails with a fixed message.
pub struct FailingMutator {
    label: &'static str,
    journal: Journal,
    message: &'static str,
}

impl FailingMutator {
    /// Create a failing mutator writing to `journal`.
    pub fn new(label: &'static str, journal: &Journal, message: &'static str) -> Self {
        Self {
            label,
            journal: journal.clone(),
            message,
        }
    }
}

impl<V: Message> Mutator<V> for FailingMutator {
    async fn mutate(&self, _ctx: &Context, _kinds: &Kinds, _value: V) -> Result<V, BoxError> {
        self.journal.record(self.label);
        Err(self.message.into())
    }
}

// ============================================================================
// Recording Event
// ============================================================================

/// An event hook that records its label and optionally fails.
pub struct RecordingEvent {
    label: &'static str,
    journal: Journal,
    failure: Option<&'static str>,
}

impl RecordingEvent {
    /// Create an event hook that always succeeds.
    pub fn new(label: &'static str, journal: &Journal) -> Self {
        Self {
            label,
            journal: journal.clone(),
            failure: None,
        }
    }

    /// Create an event hook that fails with `message` after recording.
    pub fn failing(label: &'static str, journal: &Journal, message: &'static str) -> Self {
        Self {
            label,
            journal: journal.clone(),
            failure: Some(message),
        }
    }
}

impl<V: Message> EventHook<V> for RecordingEvent {
    async fn on_event(&self, _ctx: &Context, _kinds: &Kinds, _value: &V) -> Result<(), BoxError> {
        self.journal.record(self.label);
        match self.failure {
            Some(message) => Err(message.into()),
            None => Ok(()),
        }
    }
}

// ============================================================================
// Static Activity
// ============================================================================

/// An activity oracle with a mutable set of active plugins, ignoring tenants.
#[derive(Debug, Default)]
pub struct StaticActivity {
    active: RwLock<HashSet<String>>,
    system: RwLock<HashSet<String>>,
}

impl StaticActivity {
    /// Create an oracle where the listed plugins are active.
    pub fn new<I, S>(active: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            active: RwLock::new(active.into_iter().map(Into::into).collect()),
            system: RwLock::default(),
        }
    }

    /// Mark a plugin as a system plugin; system plugins are always active.
    pub fn with_system(self, plugin_id: impl Into<String>) -> Self {
        self.system.write().insert(plugin_id.into());
        self
    }

    /// Activate a plugin.
    pub fn activate(&self, plugin_id: impl Into<String>) {
        self.active.write().insert(plugin_id.into());
    }

    /// Deactivate a plugin.
    pub fn deactivate(&self, plugin_id: &str) {
        self.active.write().remove(plugin_id);
    }
}

impl PluginActivity for StaticActivity {
    fn is_system(&self, plugin_id: &str) -> bool {
        self.system.read().contains(plugin_id)
    }

    fn is_active(&self, _ctx: &Context, plugin_id: &str) -> bool {
        self.is_system(plugin_id) || self.active.read().contains(plugin_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_journal_clear() {
        let journal = Journal::new();
        journal.record("a");
        journal.record("b");
        assert_eq!(journal.len(), 2);

        journal.clear();
        assert!(journal.is_empty());
        assert!(journal.entries().is_empty());
    }

    #[test]
    fn test_static_activity_toggles() {
        let activity = StaticActivity::new(["billing"]).with_system("core");
        let ctx = Context::new();
        assert!(activity.is_active(&ctx, "billing"));
        assert!(activity.is_active(&ctx, "core"));

        activity.deactivate("billing");
        activity.deactivate("core");
        assert!(!activity.is_active(&ctx, "billing"));
        assert!(activity.is_active(&ctx, "core"));
        assert!(!activity.is_system("billing"));
    }
}
