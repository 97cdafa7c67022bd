//! Stock availability boundary.

use orderentry_core::BoundaryResult;

use crate::product::Sku;

/// Answers whether a SKU can currently be shipped.
///
/// Implementations talk to whatever owns stock levels (warehouse system,
/// in-memory table in tests). Errors are returned untouched to the caller.
pub trait ProductStockLookup {
    fn is_in_stock(&self, sku: &Sku) -> BoundaryResult<bool>;
}

impl<T: ProductStockLookup + ?Sized> ProductStockLookup for &T {
    fn is_in_stock(&self, sku: &Sku) -> BoundaryResult<bool> {
        (**self).is_in_stock(sku)
    }
}
