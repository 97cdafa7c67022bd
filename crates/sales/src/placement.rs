//! Order placement pipeline (application-level orchestration).
//!
//! `OrderService` composes the validation engine, the fulfillment and
//! notification boundaries and the total calculator into one operation:
//!
//! ```text
//! Option<&Order>
//!   ↓
//! 1. Null check            (InvalidArgument)
//!   ↓
//! 2. Validate              (InvalidOrder with every violated rule)
//!   ↓
//! 3. Fulfill               (OrderConfirmation)
//!   ↓
//! 4. Notify customer       (confirmation email)
//!   ↓
//! 5. Resolve customer, compute totals, assemble OrderSummary
//! ```
//!
//! Validation completes before any side-effecting call, so an invalid order
//! never reaches fulfillment or notification. Collaborator errors are returned
//! unchanged; nothing is retried here.

use tracing::{info, info_span, warn};
use uuid::Uuid;

use orderentry_accounting::TaxRateLookup;
use orderentry_parties::CustomerLookup;
use orderentry_products::ProductStockLookup;

use crate::error::PlaceOrderError;
use crate::fulfillment::FulfillmentService;
use crate::notification::NotificationService;
use crate::order::Order;
use crate::summary::OrderSummary;
use crate::totals::TotalCalculator;
use crate::validation::OrderValidator;

/// Places orders against a fixed set of collaborators.
///
/// Holds only shared references; each `place_order` call is independent.
pub struct OrderService<'a> {
    stock: &'a dyn ProductStockLookup,
    customers: &'a dyn CustomerLookup,
    taxes: &'a dyn TaxRateLookup,
    fulfillment: &'a dyn FulfillmentService,
    notifications: &'a dyn NotificationService,
}

impl<'a> OrderService<'a> {
    pub fn new(
        stock: &'a dyn ProductStockLookup,
        customers: &'a dyn CustomerLookup,
        taxes: &'a dyn TaxRateLookup,
        fulfillment: &'a dyn FulfillmentService,
        notifications: &'a dyn NotificationService,
    ) -> Self {
        Self {
            stock,
            customers,
            taxes,
            fulfillment,
            notifications,
        }
    }

    pub fn validator(&self) -> OrderValidator<'a> {
        OrderValidator::new(self.stock)
    }

    pub fn calculator(&self) -> TotalCalculator<'a> {
        TotalCalculator::new(self.taxes)
    }

    /// Validate, fulfill, notify and summarize one order.
    ///
    /// Accepts `&Order` directly or an `Option<&Order>`; `None` fails with
    /// [`PlaceOrderError::InvalidArgument`].
    pub fn place_order<'o>(
        &self,
        order: impl Into<Option<&'o Order>>,
    ) -> Result<OrderSummary, PlaceOrderError> {
        let placement_id = Uuid::now_v7();
        let span = info_span!("place_order", %placement_id);
        let _guard = span.enter();

        let Some(order) = order.into() else {
            warn!("place_order called without an order");
            return Err(PlaceOrderError::InvalidArgument("order must be provided"));
        };

        let validated = match self.validator().validate(order) {
            Ok(validated) => validated,
            Err(PlaceOrderError::InvalidOrder(invalid)) => {
                warn!(reasons = ?invalid.reasons(), "order rejected");
                return Err(invalid.into());
            }
            Err(e) => return Err(e),
        };
        let customer_id = validated.customer_id();

        let confirmation = self.fulfillment.fulfill(order)?;
        info!(
            order_id = %confirmation.order_id,
            order_number = %confirmation.order_number,
            "order fulfilled"
        );

        self.notifications
            .send_order_confirmation_email(customer_id, confirmation.order_id)?;

        let customer = self
            .customers
            .get(customer_id)?
            .ok_or(PlaceOrderError::CustomerNotFound(customer_id))?;
        let totals = self.calculator().totals(order, &customer)?;

        info!(
            order_id = %confirmation.order_id,
            %customer_id,
            net_total = %totals.net_total,
            total = %totals.total,
            "order placed"
        );

        Ok(OrderSummary::assemble(confirmation, order.items.clone(), totals))
    }
}
