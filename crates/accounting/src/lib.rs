//! Accounting domain module (sales tax).
//!
//! Tax entries for a location, the lookup boundary that supplies them, and the
//! policy that folds several entries into one effective rate.

pub mod tax;

pub use tax::{RateError, TaxEntry, TaxRateLookup, effective_rate};
