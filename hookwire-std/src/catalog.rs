//! Named, type-checked lookup of hook collections.
//!
//! A host declares each collection once at start-up under a well-known name.
//! Plugins later look collections up by name and by the handler and value
//! types they expect; asking for the wrong types yields
//! [`CatalogError::TypeMismatch`] instead of an unchecked cast.

use crate::collection::{Collection, Events, Mutators};
use hookwire_core::{CatalogError, EventFn, MutatorFn};
use parking_lot::RwLock;
use std::any::{Any, type_name};
use std::collections::HashMap;

type Erased = Box<dyn Any + Send + Sync>;

/// A registry of collections keyed by name.
#[derive(Default)]
pub struct Catalog {
    entries: RwLock<HashMap<String, Erased>>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `collection` under `name`.
    pub fn declare<H, V>(
        &self,
        name: impl Into<String>,
        collection: Collection<H, V>,
    ) -> Result<(), CatalogError>
    where
        H: Send + Sync + 'static,
        V: 'static,
    {
        let name = name.into();
        let mut entries = self.entries.write();
        if entries.contains_key(&name) {
            return Err(CatalogError::AlreadyExists(name));
        }
        entries.insert(name, Box::new(collection));
        Ok(())
    }

    /// Look up the collection declared under `name`.
    pub fn get<H, V>(&self, name: &str) -> Result<Collection<H, V>, CatalogError>
    where
        H: Send + Sync + 'static,
        V: 'static,
    {
        let entries = self.entries.read();
        let erased = entries
            .get(name)
            .ok_or_else(|| CatalogError::NotFound(name.to_owned()))?;
        erased
            .downcast_ref::<Collection<H, V>>()
            .cloned()
            .ok_or_else(|| CatalogError::TypeMismatch {
                name: name.to_owned(),
                expected: type_name::<Collection<H, V>>(),
            })
    }

    /// Look up a mutator collection.
    pub fn mutators<V: 'static>(&self, name: &str) -> Result<Mutators<V>, CatalogError> {
        self.get::<MutatorFn<V>, V>(name)
    }

    /// Look up an event collection.
    pub fn events<V: 'static>(&self, name: &str) -> Result<Events<V>, CatalogError> {
        self.get::<EventFn<V>, V>(name)
    }

    /// Whether a collection is declared under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().contains_key(name)
    }

    /// The declared names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.read().keys().cloned().collect();
        names.sort();
        names
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::AlwaysActive;
    use hookwire_core::{Context, Kinds, Provider, Registry, mutator_fn};
    use std::sync::Arc;

    fn strings() -> Mutators<String> {
        Mutators::new(Arc::new(AlwaysActive))
    }

    #[test]
    fn test_declare_and_get() {
        let catalog = Catalog::new();
        let orders = strings();
        catalog.declare("orders.model", orders.clone()).unwrap();

        let found = catalog.mutators::<String>("orders.model").unwrap();
        let identity = mutator_fn(|_, _, v: String| Ok(v));
        found.registry("p").add(None, identity);

        let ctx = Context::new();
        let matches = orders.find(&ctx, &Kinds::empty(), &String::new());
        assert_eq!(orders.len(), 1);
        assert_eq!(matches.len(), 1);
        assert!(catalog.contains("orders.model"));
    }

    #[test]
    fn test_duplicate_declaration() {
        let catalog = Catalog::new();
        catalog.declare("orders.model", strings()).unwrap();
        let err = catalog.declare("orders.model", strings()).unwrap_err();
        assert_eq!(err, CatalogError::AlreadyExists("orders.model".into()));
    }

    #[test]
    fn test_not_found() {
        let catalog = Catalog::new();
        assert_eq!(
            catalog.mutators::<String>("missing").unwrap_err(),
            CatalogError::NotFound("missing".into())
        );
    }

    #[test]
    fn test_type_mismatch() {
        let catalog = Catalog::new();
        catalog.declare("orders.model", strings()).unwrap();

        let wrong_value = catalog.mutators::<u64>("orders.model").unwrap_err();
        let CatalogError::TypeMismatch { name, .. } = &wrong_value else {
            panic!("expected a type mismatch, got {wrong_value:?}");
        };
        assert_eq!(name, "orders.model");

        let wrong_handler = catalog.events::<String>("orders.model").unwrap_err();
        assert!(matches!(wrong_handler, CatalogError::TypeMismatch { .. }));
        assert_eq!(catalog.names(), vec!["orders.model"]);
    }
}
