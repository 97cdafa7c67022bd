//! Order and order-line values.
//!
//! These are inert holders: the only behavior is the derived totals and the
//! structural checks the validation engine builds on.

use std::collections::HashSet;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use orderentry_core::{CustomerId, ValueObject};
use orderentry_products::{Product, Sku};

/// Quantity an order line gets when none is given.
pub const DEFAULT_QUANTITY: u32 = 1;

fn default_quantity() -> u32 {
    DEFAULT_QUANTITY
}

/// Order line: product and quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product: Product,
    /// Zero is accepted and contributes nothing to the net total.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl OrderItem {
    /// Line for a single unit of `product`.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: DEFAULT_QUANTITY,
        }
    }

    pub fn with_quantity(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    pub fn sku(&self) -> &Sku {
        self.product.sku()
    }

    /// Unit price × quantity, `None` if it does not fit in a `Decimal`.
    pub fn line_total(&self) -> Option<Decimal> {
        self.product.price().checked_mul(Decimal::from(self.quantity))
    }
}

impl ValueObject for OrderItem {}

/// Order as submitted by a caller.
///
/// Lines are shared (`Arc`) so a placement summary can hand back the very same
/// lines without copying them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub customer_id: Option<CustomerId>,
    #[serde(default, deserialize_with = "deserialize_items")]
    pub items: Vec<Arc<OrderItem>>,
}

/// A `null` item collection is treated like an empty one.
fn deserialize_items<'de, D>(deserializer: D) -> Result<Vec<Arc<OrderItem>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let items: Option<Vec<Arc<OrderItem>>> = Option::deserialize(deserializer)?;
    Ok(items.unwrap_or_default())
}

impl Order {
    pub fn new(customer_id: Option<CustomerId>) -> Self {
        Self {
            customer_id,
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, item: OrderItem) -> Self {
        self.items.push(Arc::new(item));
        self
    }

    pub fn items(&self) -> &[Arc<OrderItem>] {
        &self.items
    }

    pub fn has_no_items(&self) -> bool {
        self.items.is_empty()
    }

    /// True when some SKU appears on more than one line.
    pub fn contains_duplicate_products(&self) -> bool {
        let mut seen: HashSet<&Sku> = HashSet::with_capacity(self.items.len());
        self.items.iter().any(|item| !seen.insert(item.sku()))
    }

    /// Σ(unit price × quantity) over all lines; `None` on overflow.
    pub fn net_total(&self) -> Option<Decimal> {
        self.items
            .iter()
            .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.line_total()?))
    }

    /// Net total plus tax at `tax_rate` (fractional); `None` on overflow.
    pub fn total_with_tax_rate(&self, tax_rate: Decimal) -> Option<Decimal> {
        let net_total = self.net_total()?;
        net_total.checked_add(net_total.checked_mul(tax_rate)?)
    }
}
