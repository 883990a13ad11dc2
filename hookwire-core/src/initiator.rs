//! Initiator kinds.
//!
//! Initiator kinds identify the origin of an operation (`UI`, `System`,
//! `Silent`, or anything a plugin adds at runtime). The list is append-only:
//! writers take the exclusive lock, readers the shared one, and additions from
//! any thread are accepted at any time.

use crate::kind::{Kind, Kinds};
use parking_lot::RwLock;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Initiators> = OnceLock::new();

/// An append-only list of initiator kinds.
#[derive(Debug)]
pub struct Initiators {
    kinds: RwLock<Vec<Kind>>,
}

impl Initiators {
    /// The initiator kinds every list starts with.
    pub const DEFAULT: [Kind; 3] = [Kind::UI, Kind::SYSTEM, Kind::SILENT];

    /// Create a list holding the [default](Self::DEFAULT) initiators.
    pub fn new() -> Self {
        Self {
            kinds: RwLock::new(Self::DEFAULT.to_vec()),
        }
    }

    /// The process-wide list, created on first use.
    pub fn global() -> &'static Initiators {
        GLOBAL.get_or_init(Initiators::new)
    }

    /// Register a kind as an initiator.
    pub fn add(&self, kind: Kind) {
        self.kinds.write().push(kind);
    }

    /// A snapshot of the registered initiators, in registration order.
    pub fn kinds(&self) -> Vec<Kind> {
        self.kinds.read().clone()
    }

    /// Whether the kind is a registered initiator.
    pub fn contains(&self, kind: &Kind) -> bool {
        self.kinds.read().contains(kind)
    }

    /// Restrict `kinds` to the registered initiators.
    pub fn pick(&self, kinds: &Kinds) -> Kinds {
        let list = self.kinds.read();
        kinds.pick(&list)
    }

    /// Drop every runtime addition and restore the defaults.
    ///
    /// Meant for test isolation; production code only ever appends.
    pub fn reset(&self) {
        *self.kinds.write() = Self::DEFAULT.to_vec();
    }
}

impl Default for Initiators {
    fn default() -> Self {
        Self::new()
    }
}
