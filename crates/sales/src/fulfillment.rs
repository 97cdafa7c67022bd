//! Fulfillment boundary: accepts a valid order for delivery.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderentry_core::{BoundaryResult, CustomerId, OrderId, ValueObject};

use crate::order::Order;

/// Acknowledgment from fulfillment that an order was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    /// Human-readable order number.
    pub order_number: String,
    pub customer_id: CustomerId,
    pub estimated_delivery_date: DateTime<Utc>,
}

impl ValueObject for OrderConfirmation {}

/// Fulfillment service boundary. Only ever called with orders that passed validation.
pub trait FulfillmentService {
    fn fulfill(&self, order: &Order) -> BoundaryResult<OrderConfirmation>;
}

impl<T: FulfillmentService + ?Sized> FulfillmentService for &T {
    fn fulfill(&self, order: &Order) -> BoundaryResult<OrderConfirmation> {
        (**self).fulfill(order)
    }
}
