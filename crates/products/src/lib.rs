//! Products domain module.
//!
//! Catalog values (SKU, price, descriptive fields) and the stock-lookup
//! boundary consulted during order validation. No IO lives here.

pub mod product;
pub mod stock;

pub use product::{Product, Sku};
pub use stock::ProductStockLookup;
