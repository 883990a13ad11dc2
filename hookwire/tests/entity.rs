use hookwire::testing::{Journal, RecordingEvent, StaticActivity};
use hookwire::{
    Catalog, CatalogError, Context, EntityHooks, Kind, Mutators, Registry, kinds, match_kind,
    mutator_fn, pipeline,
};
use std::sync::Arc;

mod common;
use common::{Order, Orders, Statement, condition, note};

fn hooks() -> EntityHooks<Orders> {
    EntityHooks::new(Arc::new(StaticActivity::new(["tenancy", "audit"])))
}

#[tokio::test]
async fn test_statement_hooks_are_separate() {
    let hooks = hooks();
    let scoped = condition("tenant = 1");
    let unlocked = condition("locked = false");
    let archived = condition("archived = true");
    hooks.sql_select_hook("tenancy").add(None, scoped);
    hooks.sql_update_hook("tenancy").add(None, unlocked);
    hooks.sql_delete_hook("tenancy").add(None, archived);

    let ctx = Context::new();
    let find = kinds![Kind::FIND, Kind::MANY];
    let select = hooks.select(&ctx, &find, Statement::default()).await;
    assert_eq!(select.conditions, vec!["tenant = 1"]);

    let kinds = kinds![Kind::UPDATE];
    let update = hooks.update(&ctx, &kinds, Statement::default()).await;
    assert_eq!(update.conditions, vec!["locked = false"]);

    let kinds = kinds![Kind::DELETE];
    let delete = hooks.delete(&ctx, &kinds, Statement::default()).await;
    assert_eq!(delete.conditions, vec!["archived = true"]);
}

#[tokio::test]
async fn test_replace_uses_insert_hooks() {
    let hooks = hooks();
    let tenant_column = condition("tenant_id");
    hooks.sql_insert_hook("tenancy").add(None, tenant_column);

    let ctx = Context::new();
    let kinds = kinds![Kind::CREATE];
    let insert = hooks.insert(&ctx, &kinds, Statement::default()).await;
    let replace = hooks.replace(&ctx, &kinds, Statement::default()).await;
    assert_eq!(insert, replace);
    assert_eq!(replace.conditions, vec!["tenant_id"]);
}

#[tokio::test]
async fn test_statement_error_is_attached() {
    let hooks = hooks();
    let refuse = mutator_fn(|_, _, _: Statement| Err("no tenant in context".into()));
    hooks.sql_select_hook("tenancy").add(None, refuse);

    let ctx = Context::new();
    let kinds = kinds![Kind::FIND];
    let statement = Statement::default().with("id = 1");
    let select = hooks.select(&ctx, &kinds, statement).await;
    assert_eq!(select.conditions, vec!["id = 1"]);
    assert_eq!(select.error.as_deref(), Some("no tenant in context"));
}

#[tokio::test]
async fn test_model_hooks_and_events() {
    let journal = Journal::new();
    let hooks = hooks();
    let before = match_kind(Kind::BEFORE);
    let audit = RecordingEvent::new("audit", &journal);
    let disabled = RecordingEvent::new("disabled", &journal);
    hooks.model_hook("audit").add(Some(before), note("stamped"));
    hooks.model_event("audit").add(None, Arc::new(audit));
    hooks.model_event("disabled").add(None, Arc::new(disabled));

    let ctx = Context::new();
    let kinds = kinds![Kind::BEFORE, Kind::CREATE];
    let order = hooks.mutate_model(&ctx, &kinds, Order::new(1, 5)).await;
    assert_eq!(order.notes, vec!["stamped"]);

    let kinds = kinds![Kind::AFTER, Kind::CREATE];
    hooks.notify_model(&ctx, &kinds, &order).await.unwrap();
    assert_eq!(journal.entries(), vec!["audit"]);
    assert_eq!(hooks.model_events().len(), 2);
}

#[tokio::test]
async fn test_catalog_shares_collections() {
    let catalog = Catalog::new();
    let orders = Mutators::<Order>::new(Arc::new(hookwire::AlwaysActive));
    catalog.declare("orders.model", orders.clone()).unwrap();

    catalog
        .mutators::<Order>("orders.model")
        .unwrap()
        .registry("billing")
        .add(None, note("billing"));

    let ctx = Context::new();
    let fresh = Order::default();
    let order = pipeline::run(&ctx, &kinds![], &orders, fresh).await;
    assert_eq!(order.notes, vec!["billing"]);

    assert!(matches!(
        catalog.mutators::<Statement>("orders.model"),
        Err(CatalogError::TypeMismatch { .. })
    ));
    assert!(matches!(
        catalog.declare("orders.model", orders),
        Err(CatalogError::AlreadyExists(_))
    ));
}
