//! Sales orders domain module.
//!
//! Order placement: business-rule validation, fulfillment, customer
//! notification and totals, composed by [`OrderService`]. Collaborators are
//! injected as boundary traits; this crate performs no IO of its own.

pub mod error;
pub mod fulfillment;
pub mod notification;
pub mod order;
pub mod placement;
pub mod summary;
pub mod totals;
pub mod validation;

pub use error::PlaceOrderError;
pub use fulfillment::{FulfillmentService, OrderConfirmation};
pub use notification::NotificationService;
pub use order::{DEFAULT_QUANTITY, Order, OrderItem};
pub use placement::OrderService;
pub use summary::OrderSummary;
pub use totals::{OrderTotals, TotalCalculator, TotalsError};
pub use validation::{InvalidOrder, OrderValidator, OrderViolation, ValidatedOrder};
