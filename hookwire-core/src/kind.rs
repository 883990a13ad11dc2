//! # Kind Vocabulary
//!
//! A [`Kind`] names the phase or category of an interception point
//! ("Before", "Create", "ByID", ...). Every invocation of the pipeline carries
//! a [`Kinds`] set describing what is happening right now, and filters decide
//! hook applicability from that set.
//!
//! # Example
//!
//! ```rust
//! use hookwire_core::{Kind, kinds};
//!
//! let kinds = kinds![Kind::BEFORE, Kind::CREATE];
//! assert!(kinds.has(&Kind::CREATE));
//! assert!(kinds.has_only(&[Kind::CREATE, Kind::BEFORE]));
//!
//! let after = kinds.with(&[Kind::AFTER]);
//! assert_eq!(after.len(), 3);
//! assert_eq!(kinds.len(), 2);
//! ```

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

/// A tag naming the phase or category of an interception point.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Kind(Cow<'static, str>);

impl Kind {
    /// Runs before the operation.
    pub const BEFORE: Kind = Kind::from_static("Before");
    /// Runs after the operation.
    pub const AFTER: Kind = Kind::from_static("After");

    /// A lookup.
    pub const FIND: Kind = Kind::from_static("Find");
    /// A creation.
    pub const CREATE: Kind = Kind::from_static("Create");
    /// An update.
    pub const UPDATE: Kind = Kind::from_static("Update");
    /// A deletion.
    pub const DELETE: Kind = Kind::from_static("Delete");

    /// A row lock.
    pub const LOCK: Kind = Kind::from_static("Lock");
    /// A single-item operation.
    pub const ONE: Kind = Kind::from_static("One");
    /// A multi-item operation.
    pub const MANY: Kind = Kind::from_static("Many");
    /// An operation addressed by identifier.
    pub const BY_ID: Kind = Kind::from_static("ByID");

    /// Initiated by a user interface.
    pub const UI: Kind = Kind::from_static("UI");
    /// Initiated by the system itself.
    pub const SYSTEM: Kind = Kind::from_static("System");
    /// Initiated silently (no user-visible side effects expected).
    pub const SILENT: Kind = Kind::from_static("Silent");

    /// Create a kind from a static name.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Create a kind from any name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The tag name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Kind {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for Kind {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

/// A set of [`Kind`] values attached to one invocation.
///
/// Insertion order is irrelevant and duplicates collapse. All combinators
/// return a new set; a `Kinds` value is never modified after construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Kinds(HashSet<Kind>);

impl Kinds {
    /// Build a set from a list of kinds, dropping duplicates.
    pub fn new(list: impl IntoIterator<Item = Kind>) -> Self {
        Self(list.into_iter().collect())
    }

    /// An empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a new set containing the current kinds plus the provided ones.
    pub fn with(&self, list: &[Kind]) -> Kinds {
        let mut result = HashSet::with_capacity(self.0.len() + list.len());
        result.extend(self.0.iter().cloned());
        result.extend(list.iter().cloned());
        Kinds(result)
    }

    /// Returns a new set with only the listed kinds that are present in this set.
    pub fn pick(&self, list: &[Kind]) -> Kinds {
        Kinds(
            list.iter()
                .filter(|item| self.0.contains(*item))
                .cloned()
                .collect(),
        )
    }

    /// Returns a new set with only the kinds currently registered as initiators
    /// in the process-wide [`Initiators`](crate::Initiators).
    pub fn pick_initiators(&self) -> Kinds {
        crate::Initiators::global().pick(self)
    }

    /// Whether the kind is present.
    pub fn has(&self, item: &Kind) -> bool {
        self.0.contains(item)
    }

    /// Whether the kind is absent.
    pub fn not(&self, item: &Kind) -> bool {
        !self.0.contains(item)
    }

    /// Whether every listed kind is present.
    pub fn has_all(&self, list: &[Kind]) -> bool {
        list.iter().all(|item| self.0.contains(item))
    }

    /// Whether at least one listed kind is present.
    pub fn has_any(&self, list: &[Kind]) -> bool {
        list.iter().any(|item| self.0.contains(item))
    }

    /// Whether the set holds exactly the listed kinds, no more and no less.
    ///
    /// A list with repeated kinds never matches.
    pub fn has_only(&self, list: &[Kind]) -> bool {
        if self.0.len() != list.len() {
            return false;
        }
        let listed: HashSet<&Kind> = list.iter().collect();
        listed.len() == list.len() && listed.into_iter().all(|item| self.0.contains(item))
    }

    /// Number of kinds in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the kinds in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Kind> {
        self.0.iter()
    }

    /// The kinds ordered by name, for output that must be stable across runs.
    pub fn sorted(&self) -> Vec<&Kind> {
        let mut list: Vec<&Kind> = self.0.iter().collect();
        list.sort();
        list
    }
}

/// Comma-separated kind names in unspecified order.
///
/// Use [`Kinds::sorted`] when the rendering must be reproducible.
impl fmt::Display for Kinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for item in &self.0 {
            if !first {
                f.write_str(",")?;
            }
            f.write_str(item.as_str())?;
            first = false;
        }
        Ok(())
    }
}

impl FromIterator<Kind> for Kinds {
    fn from_iter<T: IntoIterator<Item = Kind>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<const N: usize> From<[Kind; N]> for Kinds {
    fn from(list: [Kind; N]) -> Self {
        Self::new(list)
    }
}

impl<'a> IntoIterator for &'a Kinds {
    type Item = &'a Kind;
    type IntoIter = std::collections::hash_set::Iter<'a, Kind>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Build a [`Kinds`] set from a list of kinds.
///
/// ```rust
/// use hookwire_core::{Kind, kinds};
///
/// let kinds = kinds![Kind::AFTER, Kind::UPDATE, Kind::AFTER];
/// assert_eq!(kinds.len(), 2);
/// ```
#[macro_export]
macro_rules! kinds {
    () => {
        $crate::Kinds::empty()
    };
    ($($kind:expr),+ $(,)?) => {
        $crate::Kinds::new([$($kind),+])
    };
}
