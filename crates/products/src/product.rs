use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use orderentry_core::{DomainError, DomainResult, Entity};

/// Stock-keeping unit: the unique key of a product for stock lookups and
/// duplicate detection within an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sku(String);

impl Sku {
    /// Build a SKU from raw input. Surrounding whitespace is trimmed; blank
    /// input is rejected.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("Sku: must not be blank"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Sku {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Sku {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Sku::new(value)
    }
}

impl From<Sku> for String {
    fn from(value: Sku) -> Self {
        value.0
    }
}

/// Catalog product as it appears on an order line.
///
/// Only `sku` and `price` take part in order placement; `name` and
/// `description` are carried through for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    sku: Sku,
    name: String,
    #[serde(default)]
    description: String,
    /// Unit price, never negative.
    price: Decimal,
}

impl Product {
    pub fn new(sku: Sku, name: impl Into<String>, price: Decimal) -> DomainResult<Self> {
        if price < Decimal::ZERO {
            return Err(DomainError::validation(format!(
                "price must not be negative (sku {sku}, price {price})"
            )));
        }

        Ok(Self {
            sku,
            name: name.into(),
            description: String::new(),
            price,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Decimal {
        self.price
    }
}

impl Entity for Product {
    type Id = Sku;

    fn id(&self) -> &Self::Id {
        &self.sku
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sku_is_trimmed() {
        let sku = Sku::new("  ABC-1 ").unwrap();
        assert_eq!(sku.as_str(), "ABC-1");
    }

    #[test]
    fn blank_sku_is_rejected() {
        let err = Sku::new("   ").unwrap_err();
        match err {
            DomainError::InvalidId(msg) if msg.contains("Sku") => {}
            other => panic!("Expected InvalidId for blank sku, got {other:?}"),
        }
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = Product::new(Sku::new("A").unwrap(), "Widget", Decimal::new(-1, 2)).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("must not be negative") => {}
            other => panic!("Expected Validation for negative price, got {other:?}"),
        }
    }

    #[test]
    fn zero_price_is_allowed() {
        let product = Product::new(Sku::new("FREE").unwrap(), "Sample", Decimal::ZERO).unwrap();
        assert_eq!(product.price(), Decimal::ZERO);
    }

    #[test]
    fn product_identity_is_its_sku() {
        let product = Product::new(Sku::new("A").unwrap(), "Widget", Decimal::ONE)
            .unwrap()
            .with_description("blue");
        assert_eq!(product.id(), &Sku::new("A").unwrap());
        assert_eq!(product.description(), "blue");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: any SKU with visible characters survives construction unchanged.
            #[test]
            fn non_blank_sku_is_accepted(raw in "[A-Z0-9][A-Z0-9-]{0,19}") {
                let sku = Sku::new(raw.clone()).unwrap();
                prop_assert_eq!(sku.as_str(), raw.as_str());
            }

            /// Property: non-negative prices always construct.
            #[test]
            fn non_negative_price_is_accepted(cents in 0i64..10_000_000i64) {
                let price = Decimal::new(cents, 2);
                let product = Product::new(Sku::new("P").unwrap(), "p", price).unwrap();
                prop_assert_eq!(product.price(), price);
            }
        }
    }
}
