#![allow(dead_code)]

use hookwire::{
    BoxError, DeleteQuery, Entity, InsertQuery, Message, MutatorFn, SelectQuery, SetError,
    UpdateQuery, mutator_fn,
};

// ============================================================================
// Test Value Types
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Order {
    pub id: u64,
    pub total: u64,
    pub notes: Vec<String>,
    pub error: Option<String>,
}

impl Order {
    pub fn new(id: u64, total: u64) -> Self {
        Self {
            id,
            total,
            ..Self::default()
        }
    }
}

impl Message for Order {}

impl SetError for Order {
    fn set_error(mut self, err: BoxError) -> Self {
        self.error = Some(err.to_string());
        self
    }
}

/// One builder type stands in for all four statement shapes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Statement {
    pub conditions: Vec<String>,
    pub error: Option<String>,
}

impl Statement {
    pub fn with(mut self, condition: impl Into<String>) -> Self {
        self.conditions.push(condition.into());
        self
    }
}

impl Message for Statement {}

impl SetError for Statement {
    fn set_error(mut self, err: BoxError) -> Self {
        self.error = Some(err.to_string());
        self
    }
}

impl SelectQuery for Statement {}
impl InsertQuery for Statement {}
impl UpdateQuery for Statement {}
impl DeleteQuery for Statement {}

pub struct Orders;

impl Entity for Orders {
    type Model = Order;
    type Select = Statement;
    type Insert = Statement;
    type Update = Statement;
    type Delete = Statement;
}

// ============================================================================
// Test Hooks
// ============================================================================

/// Appends `label` to the order notes.
pub fn note(label: &'static str) -> MutatorFn<Order> {
    mutator_fn(move |_, _, mut order: Order| {
        order.notes.push(label.to_string());
        Ok(order)
    })
}

/// Always fails with `message`.
pub fn reject(message: &'static str) -> MutatorFn<Order> {
    mutator_fn(move |_, _, _: Order| Err(message.into()))
}

/// Adds a condition to any statement.
pub fn condition(text: &'static str) -> MutatorFn<Statement> {
    mutator_fn(move |_, _, statement: Statement| Ok(statement.with(text)))
}
