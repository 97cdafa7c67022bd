//! Parties domain module (customers).
//!
//! Customer records as seen by order placement, plus the lookup boundary the
//! placement workflow uses to resolve a customer's tax location.

pub mod party;

pub use party::{Customer, CustomerLookup};
