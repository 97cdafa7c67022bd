//! Customer notification boundary.

use orderentry_core::{BoundaryResult, CustomerId, OrderId};

/// Sends the order confirmation email. Fire-and-forget for the caller: only
/// an error is looked at.
pub trait NotificationService {
    fn send_order_confirmation_email(
        &self,
        customer_id: CustomerId,
        order_id: OrderId,
    ) -> BoundaryResult<()>;
}

impl<T: NotificationService + ?Sized> NotificationService for &T {
    fn send_order_confirmation_email(
        &self,
        customer_id: CustomerId,
        order_id: OrderId,
    ) -> BoundaryResult<()> {
        (**self).send_order_confirmation_email(customer_id, order_id)
    }
}
