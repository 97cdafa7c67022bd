//! In-memory boundary adapters.
//!
//! Intended for tests/dev and for wiring `OrderService` without external
//! systems. Not optimized for performance.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{PoisonError, RwLock};

use chrono::{Duration, Utc};
use tracing::info;

use orderentry_accounting::{TaxEntry, TaxRateLookup};
use orderentry_core::{BoundaryResult, CustomerId, OrderId};
use orderentry_parties::{Customer, CustomerLookup};
use orderentry_products::{ProductStockLookup, Sku};
use orderentry_sales::{FulfillmentService, NotificationService, Order, OrderConfirmation};

use crate::config::InfraConfig;

/// Units on hand per SKU. A SKU is in stock when it has at least one unit.
#[derive(Debug, Default)]
pub struct InMemoryStockLevels {
    levels: RwLock<HashMap<Sku, u32>>,
}

impl InMemoryStockLevels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_units(&self, sku: Sku, units: u32) {
        self.levels
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(sku, units);
    }

    pub fn units(&self, sku: &Sku) -> u32 {
        self.levels
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(sku)
            .copied()
            .unwrap_or(0)
    }
}

impl ProductStockLookup for InMemoryStockLevels {
    fn is_in_stock(&self, sku: &Sku) -> BoundaryResult<bool> {
        Ok(self.units(sku) > 0)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryCustomerDirectory {
    customers: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryCustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&self, customer: Customer) {
        self.customers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(customer.id_typed(), customer);
    }
}

impl CustomerLookup for InMemoryCustomerDirectory {
    fn get(&self, customer_id: CustomerId) -> BoundaryResult<Option<Customer>> {
        Ok(self
            .customers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&customer_id)
            .cloned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TaxLocation {
    postal_code: String,
    country: String,
}

/// Tax entries keyed by postal code + country. Unknown locations have no entries.
#[derive(Debug, Default)]
pub struct InMemoryTaxTable {
    entries: RwLock<HashMap<TaxLocation, Vec<TaxEntry>>>,
}

impl InMemoryTaxTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&self, postal_code: impl Into<String>, country: impl Into<String>, entry: TaxEntry) {
        let location = TaxLocation {
            postal_code: postal_code.into(),
            country: country.into(),
        };
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(location)
            .or_default()
            .push(entry);
    }
}

impl TaxRateLookup for InMemoryTaxTable {
    fn tax_entries(&self, postal_code: &str, country: &str) -> BoundaryResult<Vec<TaxEntry>> {
        let location = TaxLocation {
            postal_code: postal_code.to_string(),
            country: country.to_string(),
        };
        Ok(self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&location)
            .cloned()
            .unwrap_or_default())
    }
}

/// Fulfillment that accepts every order it is given.
///
/// Order ids are sequential from `first_order_id`; order numbers are the id
/// with the configured prefix; delivery is estimated `delivery_lead_days` out.
#[derive(Debug)]
pub struct InMemoryFulfillment {
    next_order_id: AtomicI64,
    order_number_prefix: String,
    delivery_lead: Duration,
    fulfilled: RwLock<Vec<(OrderId, Order)>>,
}

impl InMemoryFulfillment {
    pub fn from_config(config: &InfraConfig) -> Self {
        Self {
            next_order_id: AtomicI64::new(config.first_order_id),
            order_number_prefix: config.order_number_prefix.clone(),
            delivery_lead: Duration::days(config.delivery_lead_days),
            fulfilled: RwLock::new(Vec::new()),
        }
    }

    /// Orders fulfilled so far, in call order.
    pub fn fulfilled(&self) -> Vec<(OrderId, Order)> {
        self.fulfilled
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for InMemoryFulfillment {
    fn default() -> Self {
        Self::from_config(&InfraConfig::default())
    }
}

impl FulfillmentService for InMemoryFulfillment {
    fn fulfill(&self, order: &Order) -> BoundaryResult<OrderConfirmation> {
        let Some(customer_id) = order.customer_id else {
            anyhow::bail!("cannot fulfill an order without a customer");
        };

        let order_id = OrderId::new(self.next_order_id.fetch_add(1, Ordering::SeqCst));
        self.fulfilled
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((order_id, order.clone()));

        Ok(OrderConfirmation {
            order_id,
            order_number: format!("{}{}", self.order_number_prefix, order_id),
            customer_id,
            estimated_delivery_date: Utc::now() + self.delivery_lead,
        })
    }
}

/// Notifier that logs each confirmation email and remembers it.
#[derive(Debug, Default)]
pub struct LoggingNotifier {
    sent: RwLock<Vec<(CustomerId, OrderId)>>,
}

impl LoggingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<(CustomerId, OrderId)> {
        self.sent
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl NotificationService for LoggingNotifier {
    fn send_order_confirmation_email(
        &self,
        customer_id: CustomerId,
        order_id: OrderId,
    ) -> BoundaryResult<()> {
        info!(%customer_id, %order_id, "order confirmation email sent");
        self.sent
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((customer_id, order_id));
        Ok(())
    }
}
