use hookwire::{Context, Kind, Mutators, PluginActivity, PluginTable, Registry, kinds, pipeline};
use std::sync::Arc;

mod common;
use common::{Order, note};

fn setup() -> (Arc<PluginTable>, Mutators<Order>) {
    let table = PluginTable::new()
        .system("core")
        .tenant("loyalty")
        .tenant("promo");
    let table = Arc::new(table);
    let collection = Mutators::new(table.clone());
    collection.registry("core").add(None, note("core"));
    collection.registry("loyalty").add(None, note("loyalty"));
    collection.registry("promo").add(None, note("promo"));
    collection.registry("unknown").add(None, note("unknown"));
    (table, collection)
}

/// Runs the collection for `ctx` and returns the notes left by active plugins.
async fn notes(ctx: &Context, collection: &Mutators<Order>) -> Vec<String> {
    let kinds = kinds![Kind::CREATE];
    let fresh = Order::default();
    let order = pipeline::run(ctx, &kinds, collection, fresh).await;
    order.notes
}

#[tokio::test]
async fn test_only_active_plugins_run() {
    let (table, collection) = setup();
    assert!(table.enable("acme", "loyalty"));

    let acme = Context::new().with_tenant("acme");
    assert_eq!(notes(&acme, &collection).await, vec!["core", "loyalty"]);

    let globex = Context::new().with_tenant("globex");
    assert_eq!(notes(&globex, &collection).await, vec!["core"]);
}

#[tokio::test]
async fn test_activation_is_checked_per_run() {
    let (table, collection) = setup();
    let ctx = Context::new().with_tenant("acme");

    table.enable("acme", "promo");
    assert_eq!(notes(&ctx, &collection).await, vec!["core", "promo"]);

    table.disable("acme", "promo");
    assert_eq!(notes(&ctx, &collection).await, vec!["core"]);
}

#[tokio::test]
async fn test_no_tenant_sees_system_plugins_only() {
    let (table, collection) = setup();
    table.enable("acme", "loyalty");

    assert_eq!(notes(&Context::new(), &collection).await, vec!["core"]);
}

#[test]
fn test_system_plugins_cannot_be_toggled() {
    let (table, _) = setup();
    assert!(table.is_system("core"));
    assert!(!table.enable("acme", "core"));
    assert!(!table.disable("acme", "unknown"));
    assert!(!table.is_active(&Context::new(), "loyalty"));
}
