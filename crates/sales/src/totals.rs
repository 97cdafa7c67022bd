//! Net and tax-inclusive totals.
//!
//! Callers validate first; totals of an invalid order are meaningless.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use orderentry_accounting::{RateError, TaxEntry, TaxRateLookup, effective_rate};
use orderentry_parties::Customer;

use crate::order::Order;

#[derive(Debug, Error)]
pub enum TotalsError {
    /// The tax boundary returned no entries, so there is no rate to average.
    #[error("no tax entries for postal code {postal_code:?} in {country:?}")]
    NoTaxEntries { postal_code: String, country: String },

    /// An intermediate or final amount does not fit in a `Decimal`.
    #[error("order totals overflow the decimal range")]
    Overflow,

    /// The tax boundary itself failed.
    #[error(transparent)]
    Boundary(#[from] anyhow::Error),
}

/// Totals computed for one order and customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub net_total: Decimal,
    pub total: Decimal,
    pub tax_entries: Vec<TaxEntry>,
}

pub struct TotalCalculator<'a> {
    taxes: &'a dyn TaxRateLookup,
}

impl<'a> TotalCalculator<'a> {
    pub fn new(taxes: &'a dyn TaxRateLookup) -> Self {
        Self { taxes }
    }

    /// Σ(unit price × quantity).
    pub fn net_total(&self, order: &Order) -> Result<Decimal, TotalsError> {
        order.net_total().ok_or(TotalsError::Overflow)
    }

    /// Tax entries for the customer's postal code and country.
    pub fn tax_entries_for(&self, customer: &Customer) -> Result<Vec<TaxEntry>, TotalsError> {
        Ok(self
            .taxes
            .tax_entries(customer.postal_code(), customer.country())?)
    }

    /// Net total plus tax at the mean rate of the customer's tax entries.
    pub fn order_total(&self, order: &Order, customer: &Customer) -> Result<Decimal, TotalsError> {
        Ok(self.totals(order, customer)?.total)
    }

    /// Net total, total and the entries used, from a single tax lookup.
    pub fn totals(&self, order: &Order, customer: &Customer) -> Result<OrderTotals, TotalsError> {
        let tax_entries = self.tax_entries_for(customer)?;
        let rate = effective_rate(&tax_entries).map_err(|e| match e {
            RateError::NoEntries => TotalsError::NoTaxEntries {
                postal_code: customer.postal_code().to_string(),
                country: customer.country().to_string(),
            },
            RateError::Overflow => TotalsError::Overflow,
        })?;

        Ok(OrderTotals {
            net_total: self.net_total(order)?,
            total: order
                .total_with_tax_rate(rate)
                .ok_or(TotalsError::Overflow)?,
            tax_entries,
        })
    }
}
