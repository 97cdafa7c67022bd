//! Configuration loading and representation.
//!
//! Values come from environment variables; anything unset falls back to a
//! default. A set-but-malformed value is an error rather than a silent default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DELIVERY_LEAD_DAYS_VAR: &str = "ORDERENTRY_DELIVERY_LEAD_DAYS";
pub const FIRST_ORDER_ID_VAR: &str = "ORDERENTRY_FIRST_ORDER_ID";
pub const ORDER_NUMBER_PREFIX_VAR: &str = "ORDERENTRY_ORDER_NUMBER_PREFIX";

/// Upper bound for the delivery lead time (ten years).
pub const MAX_DELIVERY_LEAD_DAYS: i64 = 3650;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Settings for the in-memory adapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfraConfig {
    /// Days between fulfillment and the estimated delivery date.
    pub delivery_lead_days: i64,
    /// First order id handed out by the in-memory fulfillment service.
    pub first_order_id: i64,
    /// Prefix of generated human-readable order numbers.
    pub order_number_prefix: String,
}

impl Default for InfraConfig {
    fn default() -> Self {
        Self {
            delivery_lead_days: 5,
            first_order_id: 1,
            order_number_prefix: "ORD-".to_string(),
        }
    }
}

impl InfraConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key → value source (the environment, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let delivery_lead_days = match lookup(DELIVERY_LEAD_DAYS_VAR) {
            Some(raw) => parse_i64(DELIVERY_LEAD_DAYS_VAR, &raw)?,
            None => defaults.delivery_lead_days,
        };
        if !(0..=MAX_DELIVERY_LEAD_DAYS).contains(&delivery_lead_days) {
            return Err(ConfigError::Invalid {
                key: DELIVERY_LEAD_DAYS_VAR,
                value: delivery_lead_days.to_string(),
                reason: format!("must be between 0 and {MAX_DELIVERY_LEAD_DAYS}"),
            });
        }

        let first_order_id = match lookup(FIRST_ORDER_ID_VAR) {
            Some(raw) => parse_i64(FIRST_ORDER_ID_VAR, &raw)?,
            None => defaults.first_order_id,
        };

        let order_number_prefix = lookup(ORDER_NUMBER_PREFIX_VAR).unwrap_or_else(|| {
            tracing::debug!("{ORDER_NUMBER_PREFIX_VAR} not set; using default");
            defaults.order_number_prefix
        });

        Ok(Self {
            delivery_lead_days,
            first_order_id,
            order_number_prefix,
        })
    }
}

fn parse_i64(key: &'static str, raw: &str) -> Result<i64, ConfigError> {
    raw.trim().parse::<i64>().map_err(|e| ConfigError::Invalid {
        key,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
