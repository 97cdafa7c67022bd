//! Strongly-typed identifiers used across the domain.
//!
//! Customers and orders are keyed by integers handed out by the systems that
//! own them (the customer directory and the fulfillment service).

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a customer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i64);

/// Identifier of a placed order, assigned by fulfillment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(i64);

macro_rules! impl_int_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s
                    .trim()
                    .parse::<i64>()
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(value))
            }
        }
    };
}

impl_int_newtype!(CustomerId, "CustomerId");
impl_int_newtype!(OrderId, "OrderId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays_round_trip() {
        let id: CustomerId = " 42 ".parse().unwrap();
        assert_eq!(id, CustomerId::new(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn parse_failure_names_the_identifier() {
        let err = "abc".parse::<OrderId>().unwrap_err();
        match err {
            DomainError::InvalidId(msg) if msg.starts_with("OrderId:") => {}
            other => panic!("Expected InvalidId for OrderId, got {other:?}"),
        }
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&OrderId::new(10)).unwrap();
        assert_eq!(json, "10");
        let back: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(back.value(), 10);
    }
}
