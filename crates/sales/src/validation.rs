//! Business-rule validation of submitted orders.
//!
//! Every rule runs; findings are collected as data in rule order. Only a
//! failing stock boundary aborts validation, and its error is returned as-is.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use orderentry_core::{BoundaryResult, CustomerId};
use orderentry_products::ProductStockLookup;

use crate::error::PlaceOrderError;
use crate::order::Order;

/// A violated business rule. `Display` is the reason text reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderViolation {
    CustomerIdIsNull,
    OrderItemsIsEmpty,
    DuplicateProducts,
    ItemNotInStock,
}

impl OrderViolation {
    pub fn reason(self) -> &'static str {
        match self {
            OrderViolation::CustomerIdIsNull => "CustomerId Is Null",
            OrderViolation::OrderItemsIsEmpty => "OrderItems Is Empty",
            OrderViolation::DuplicateProducts => "OrderItems Contains Duplicate Products",
            OrderViolation::ItemNotInStock => "Item Not In Stock In OrderItems",
        }
    }
}

impl core::fmt::Display for OrderViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.reason())
    }
}

/// Aggregated validation failure.
///
/// `Display` shows the first reason; the full, ordered list stays available
/// through [`InvalidOrder::violations`] and [`InvalidOrder::reasons`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", first_reason(.violations))]
pub struct InvalidOrder {
    violations: Vec<OrderViolation>,
}

impl InvalidOrder {
    pub fn new(violations: Vec<OrderViolation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[OrderViolation] {
        &self.violations
    }

    pub fn reasons(&self) -> Vec<String> {
        self.violations.iter().map(|v| v.reason().to_string()).collect()
    }

    pub fn contains(&self, violation: OrderViolation) -> bool {
        self.violations.contains(&violation)
    }

    /// Short message: the first reason.
    pub fn message(&self) -> &'static str {
        first_reason(&self.violations)
    }
}

fn first_reason(violations: &[OrderViolation]) -> &'static str {
    violations
        .first()
        .map(|v| v.reason())
        .unwrap_or("order has no violations")
}

/// An order that passed every rule. Holds the customer id the rules proved present.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedOrder<'o> {
    order: &'o Order,
    customer_id: CustomerId,
}

impl<'o> ValidatedOrder<'o> {
    pub fn order(&self) -> &'o Order {
        self.order
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }
}

/// Runs the order rules against a stock boundary.
pub struct OrderValidator<'a> {
    stock: &'a dyn ProductStockLookup,
}

impl<'a> OrderValidator<'a> {
    pub fn new(stock: &'a dyn ProductStockLookup) -> Self {
        Self { stock }
    }

    /// Every violated rule, in rule order. Empty means the order is valid.
    pub fn violations(&self, order: &Order) -> BoundaryResult<Vec<OrderViolation>> {
        let mut violations = Vec::new();

        if order.customer_id.is_none() {
            violations.push(OrderViolation::CustomerIdIsNull);
        }

        if order.has_no_items() {
            violations.push(OrderViolation::OrderItemsIsEmpty);
        } else if order.contains_duplicate_products() {
            violations.push(OrderViolation::DuplicateProducts);
        }

        if !self.all_items_in_stock(order)? {
            violations.push(OrderViolation::ItemNotInStock);
        }

        Ok(violations)
    }

    /// Validate, turning findings into `PlaceOrderError::InvalidOrder`.
    pub fn validate<'o>(&self, order: &'o Order) -> Result<ValidatedOrder<'o>, PlaceOrderError> {
        let violations = self.violations(order)?;

        match (violations.is_empty(), order.customer_id) {
            (true, Some(customer_id)) => Ok(ValidatedOrder { order, customer_id }),
            _ => Err(InvalidOrder::new(violations).into()),
        }
    }

    /// An order without lines is never "all in stock".
    fn all_items_in_stock(&self, order: &Order) -> BoundaryResult<bool> {
        if order.has_no_items() {
            return Ok(false);
        }

        for item in order.items() {
            if !self.stock.is_in_stock(item.sku())? {
                tracing::debug!(sku = %item.sku(), "item not in stock");
                return Ok(false);
            }
        }

        Ok(true)
    }
}
