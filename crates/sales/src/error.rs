//! Placement error taxonomy.

use thiserror::Error;

use orderentry_core::CustomerId;

use crate::totals::TotalsError;
use crate::validation::InvalidOrder;

/// Everything `OrderService::place_order` can fail with.
#[derive(Debug, Error)]
pub enum PlaceOrderError {
    /// No order was supplied at all. Not a business-rule finding.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// One or more business rules were violated.
    #[error(transparent)]
    InvalidOrder(#[from] InvalidOrder),

    /// The customer directory does not know the order's customer.
    #[error("customer {0} not found")]
    CustomerNotFound(CustomerId),

    /// Totals could not be computed (e.g. no tax entries for the location).
    #[error(transparent)]
    Totals(TotalsError),

    /// A collaborator failed; carried unchanged.
    #[error(transparent)]
    Boundary(#[from] anyhow::Error),
}

impl From<TotalsError> for PlaceOrderError {
    fn from(value: TotalsError) -> Self {
        match value {
            TotalsError::Boundary(e) => PlaceOrderError::Boundary(e),
            other => PlaceOrderError::Totals(other),
        }
    }
}

impl PlaceOrderError {
    /// Violations when this is an invalid-order failure.
    pub fn invalid_order(&self) -> Option<&InvalidOrder> {
        match self {
            PlaceOrderError::InvalidOrder(e) => Some(e),
            _ => None,
        }
    }
}
