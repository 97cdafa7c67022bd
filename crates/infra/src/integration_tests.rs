//! Integration tests for the full placement pipeline.
//!
//! Tests: Order → OrderService → in-memory stock / fulfillment / notification
//! / customer / tax adapters → OrderSummary
//!
//! Verifies:
//! - Valid orders come back with confirmation fields and mean-rate totals
//! - Invalid orders report every violated rule and leave no side effects
//! - Each placement is independent (fresh ids, no shared state in the service)

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;
    use rust_decimal::Decimal;

    use orderentry_accounting::TaxEntry;
    use orderentry_core::{CustomerId, OrderId};
    use orderentry_parties::Customer;
    use orderentry_products::{Product, Sku};
    use orderentry_sales::{Order, OrderItem, OrderService, OrderSummary, PlaceOrderError};

    use crate::config::InfraConfig;
    use crate::in_memory::{
        InMemoryCustomerDirectory, InMemoryFulfillment, InMemoryStockLevels, InMemoryTaxTable,
        LoggingNotifier,
    };

    const CUSTOMER: CustomerId = CustomerId::new(42);

    struct Adapters {
        stock: InMemoryStockLevels,
        customers: InMemoryCustomerDirectory,
        taxes: InMemoryTaxTable,
        fulfillment: InMemoryFulfillment,
        notifier: LoggingNotifier,
    }

    impl Adapters {
        fn service(&self) -> OrderService<'_> {
            OrderService::new(
                &self.stock,
                &self.customers,
                &self.taxes,
                &self.fulfillment,
                &self.notifier,
            )
        }
    }

    fn setup() -> Adapters {
        orderentry_observability::init_test();

        let config = InfraConfig {
            delivery_lead_days: 3,
            first_order_id: 10,
            order_number_prefix: "X".to_string(),
        };

        let stock = InMemoryStockLevels::new();
        stock.set_units(sku("WIDGET"), 10);
        stock.set_units(sku("GIZMO"), 1);
        stock.set_units(sku("RETIRED"), 0);

        let customers = InMemoryCustomerDirectory::new();
        customers.upsert(Customer::new(CUSTOMER, "98101", "US").with_name("Ada"));

        let taxes = InMemoryTaxTable::new();
        taxes.add_entry("98101", "US", TaxEntry::new("sales tax", Decimal::new(8, 2)));

        Adapters {
            stock,
            customers,
            taxes,
            fulfillment: InMemoryFulfillment::from_config(&config),
            notifier: LoggingNotifier::new(),
        }
    }

    fn sku(raw: &str) -> Sku {
        Sku::new(raw).unwrap()
    }

    fn line(raw_sku: &str, price: Decimal, quantity: u32) -> OrderItem {
        let product = Product::new(sku(raw_sku), raw_sku.to_lowercase(), price)
            .unwrap()
            .with_description("integration test product");
        OrderItem::with_quantity(product, quantity)
    }

    fn two_item_order() -> Order {
        Order::new(Some(CUSTOMER))
            .with_item(line("WIDGET", Decimal::ONE, 5))
            .with_item(line("GIZMO", Decimal::from(3), 1))
    }

    #[test]
    fn valid_two_item_order_is_placed() {
        let adapters = setup();
        let order = two_item_order();

        let summary = adapters.service().place_order(&order).unwrap();

        assert_eq!(summary.order_id, OrderId::new(10));
        assert_eq!(summary.order_number, "X10");
        assert_eq!(summary.customer_id, CUSTOMER);
        assert_eq!(summary.net_total, Decimal::from(8));
        assert_eq!(summary.total, Decimal::new(864, 2));
        assert_eq!(summary.taxes, vec![TaxEntry::new("sales tax", Decimal::new(8, 2))]);
        assert!(summary.estimated_delivery_date > Utc::now());
        assert!(Arc::ptr_eq(&summary.items[0], &order.items()[0]));

        assert_eq!(adapters.fulfillment.fulfilled(), vec![(OrderId::new(10), order)]);
        assert_eq!(adapters.notifier.sent(), vec![(CUSTOMER, OrderId::new(10))]);
    }

    #[test]
    fn multiple_tax_entries_are_averaged() {
        let adapters = setup();
        adapters
            .taxes
            .add_entry("98101", "US", TaxEntry::new("city tax", Decimal::new(2, 2)));

        let summary = adapters.service().place_order(&two_item_order()).unwrap();

        // mean(0.08, 0.02) = 0.05 → 8 × 1.05
        assert_eq!(summary.total, Decimal::new(840, 2));
        assert_eq!(summary.taxes.len(), 2);
    }

    #[test]
    fn invalid_order_reports_all_reasons_and_has_no_side_effects() {
        let adapters = setup();
        let order = Order::new(None)
            .with_item(line("WIDGET", Decimal::ONE, 1))
            .with_item(line("WIDGET", Decimal::ONE, 1))
            .with_item(line("RETIRED", Decimal::ONE, 1));

        let err = adapters.service().place_order(&order).unwrap_err();

        let invalid = err.invalid_order().expect("Expected InvalidOrder");
        assert_eq!(
            invalid.reasons(),
            vec![
                "CustomerId Is Null".to_string(),
                "OrderItems Contains Duplicate Products".to_string(),
                "Item Not In Stock In OrderItems".to_string(),
            ]
        );
        assert!(adapters.fulfillment.fulfilled().is_empty());
        assert!(adapters.notifier.sent().is_empty());
    }

    #[test]
    fn missing_order_is_invalid_argument() {
        let adapters = setup();

        let err = adapters.service().place_order(None::<&Order>).unwrap_err();

        assert!(matches!(err, PlaceOrderError::InvalidArgument(_)));
        assert!(err.invalid_order().is_none());
    }

    #[test]
    fn customer_outside_tax_table_fails_totals() {
        let adapters = setup();
        adapters
            .customers
            .upsert(Customer::new(CustomerId::new(7), "00000", "ZZ"));
        let mut order = two_item_order();
        order.customer_id = Some(CustomerId::new(7));

        let err = adapters.service().place_order(&order).unwrap_err();

        assert!(matches!(err, PlaceOrderError::Totals(_)));
        assert!(err.to_string().contains("00000"));
    }

    #[test]
    fn consecutive_placements_are_independent() {
        let adapters = setup();
        let service = adapters.service();

        let first = service.place_order(&two_item_order()).unwrap();
        let second = service.place_order(&two_item_order()).unwrap();

        assert_eq!(first.order_id, OrderId::new(10));
        assert_eq!(second.order_id, OrderId::new(11));
        assert_eq!(first.total, second.total);
        assert_eq!(adapters.notifier.sent().len(), 2);
    }

    #[test]
    fn summary_serializes_with_string_decimals() {
        let adapters = setup();

        let summary = adapters.service().place_order(&two_item_order()).unwrap();
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["order_id"], 10);
        assert_eq!(json["net_total"], "8");
        assert_eq!(json["total"], "8.64");

        let back: OrderSummary = serde_json::from_value(json).unwrap();
        assert_eq!(back.total, summary.total);
    }
}
