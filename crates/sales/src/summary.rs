//! Summary record returned by a successful placement.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use orderentry_accounting::TaxEntry;
use orderentry_core::{CustomerId, OrderId};

use crate::fulfillment::OrderConfirmation;
use crate::order::OrderItem;
use crate::totals::OrderTotals;

/// Result of a successful placement.
///
/// `items` are the same `Arc`s the submitted order holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: OrderId,
    pub order_number: String,
    pub customer_id: CustomerId,
    pub items: Vec<Arc<OrderItem>>,
    pub net_total: Decimal,
    pub total: Decimal,
    pub taxes: Vec<TaxEntry>,
    pub estimated_delivery_date: DateTime<Utc>,
}

impl OrderSummary {
    pub fn assemble(
        confirmation: OrderConfirmation,
        items: Vec<Arc<OrderItem>>,
        totals: OrderTotals,
    ) -> Self {
        Self {
            order_id: confirmation.order_id,
            order_number: confirmation.order_number,
            customer_id: confirmation.customer_id,
            items,
            net_total: totals.net_total,
            total: totals.total,
            taxes: totals.tax_entries,
            estimated_delivery_date: confirmation.estimated_delivery_date,
        }
    }

    /// Tax portion of the total.
    pub fn tax_amount(&self) -> Decimal {
        self.total - self.net_total
    }
}
