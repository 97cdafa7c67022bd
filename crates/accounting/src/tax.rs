use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use orderentry_core::{BoundaryResult, ValueObject};

/// One tax applicable at a location (e.g. "State sales tax", 0.065).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxEntry {
    pub description: String,
    /// Fractional rate: `0.08` means 8%.
    pub rate: Decimal,
}

impl TaxEntry {
    pub fn new(description: impl Into<String>, rate: Decimal) -> Self {
        Self {
            description: description.into(),
            rate,
        }
    }
}

impl ValueObject for TaxEntry {}

/// Tax rate boundary: entries applicable to a postal code within a country.
pub trait TaxRateLookup {
    fn tax_entries(&self, postal_code: &str, country: &str) -> BoundaryResult<Vec<TaxEntry>>;
}

impl<T: TaxRateLookup + ?Sized> TaxRateLookup for &T {
    fn tax_entries(&self, postal_code: &str, country: &str) -> BoundaryResult<Vec<TaxEntry>> {
        (**self).tax_entries(postal_code, country)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RateError {
    /// Nothing to average.
    #[error("no tax entries")]
    NoEntries,

    /// The rates do not fit in a `Decimal` when combined.
    #[error("tax rates overflow when combined")]
    Overflow,
}

/// Effective rate of a set of entries: the arithmetic mean of their rates.
///
/// Entries are averaged, not summed. An empty slice is `RateError::NoEntries`;
/// callers decide how to report a location with no tax entries.
pub fn effective_rate(entries: &[TaxEntry]) -> Result<Decimal, RateError> {
    if entries.is_empty() {
        return Err(RateError::NoEntries);
    }

    let sum = entries
        .iter()
        .try_fold(Decimal::ZERO, |acc, e| acc.checked_add(e.rate))
        .ok_or(RateError::Overflow)?;
    sum.checked_div(Decimal::from(entries.len()))
        .ok_or(RateError::Overflow)
}
