#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::app_system::{DashboardConfig, DashboardSystem};
    use crate::clients::{OrderClient, ProductClient, SimulatedLatency};
    use crate::domain::{seed, Category, DeliveryStatus, LineItem, NewOrder, Order, PaymentStatus, Product, ProductField, ValidationError};
    use crate::forms::{Route, SubmitOutcome};
    use crate::mock_framework::{create_mock_client, expect_create, expect_list};
    use crate::order_actor::OrderError;
    use crate::view::{OrderColumn, OrderDetail, OrderMetrics, ProductFilter, ProductMetrics};

    fn config() -> DashboardConfig {
        DashboardConfig::default().without_latency()
    }

    fn new_order(items: Vec<LineItem>) -> NewOrder {
        NewOrder {
            client_name: "Grace Hopper".into(),
            items,
            payment_status: PaymentStatus::Paid,
            delivery_status: DeliveryStatus::Shipped,
            expected_delivery_date: NaiveDate::from_ymd_opt(2024, 11, 2).unwrap(),
            delivery_address: "1 Compiler Way".into(),
        }
    }

    #[tokio::test]
    async fn test_order_creation_flow() {
        // 1. Setup Mocks
        let (product_client_inner, mut product_rx) = create_mock_client::<Product>(10);
        let (order_client_inner, mut order_rx) = create_mock_client::<Order>(10);

        let product_client = ProductClient::new(product_client_inner, SimulatedLatency::NONE);
        let order_client = OrderClient::new(order_client_inner, product_client, SimulatedLatency::NONE);

        // 2. Execute Order Creation in background
        let order_task = tokio::spawn(async move {
            order_client
                .create_order(new_order(vec![LineItem::new("1", 1), LineItem::new("3", 3)]))
                .await
        });

        // 3. Expect the catalog lookup
        let responder = expect_list(&mut product_rx).await.expect("Expected Product List");
        responder.send(Ok(Arc::new(seed::products()))).unwrap();

        // 4. Expect Order Create, priced from the catalog
        let (payload, responder) = expect_create(&mut order_rx).await.expect("Expected Order Create");
        assert_eq!(payload.total_amount, dec!(219.96));
        assert_eq!(payload.order.client_name, "Grace Hopper");

        let order = Order::new(
            "ORD-000005",
            payload.order.client_name.clone(),
            payload.order.items.clone(),
            payload.total_amount,
            payload.order.expected_delivery_date,
            payload.order.delivery_address.clone(),
        );
        responder.send(Ok(order)).unwrap();

        // 5. Verify Result
        let created = order_task.await.unwrap().unwrap();
        assert_eq!(created.id, "ORD-000005");
        assert_eq!(created.total_amount, dec!(219.96));
    }

    #[tokio::test]
    async fn test_order_with_missing_product_never_reaches_order_store() {
        let (product_client_inner, mut product_rx) = create_mock_client::<Product>(10);
        let (order_client_inner, mut order_rx) = create_mock_client::<Order>(10);

        let product_client = ProductClient::new(product_client_inner, SimulatedLatency::NONE);
        let order_client = OrderClient::new(order_client_inner, product_client, SimulatedLatency::NONE);

        let order_task =
            tokio::spawn(async move { order_client.create_order(new_order(vec![LineItem::new("42", 1)])).await });

        let responder = expect_list(&mut product_rx).await.expect("Expected Product List");
        responder.send(Ok(Arc::new(seed::products()))).unwrap();

        assert_eq!(order_task.await.unwrap(), Err(OrderError::UnknownProduct("42".into())));
        // The client was dropped with the task, so the order channel is closed and empty.
        assert!(order_rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_overflowing_total_is_rejected_before_order_store() {
        let (product_client_inner, mut product_rx) = create_mock_client::<Product>(10);
        let (order_client_inner, mut order_rx) = create_mock_client::<Order>(10);

        let product_client = ProductClient::new(product_client_inner, SimulatedLatency::NONE);
        let order_client = OrderClient::new(order_client_inner, product_client, SimulatedLatency::NONE);

        let order_task = tokio::spawn(async move {
            order_client
                .create_order(new_order(vec![LineItem::new("1", 1_000_000_000)]))
                .await
        });

        let mut products = seed::products();
        products[0].price = Decimal::from_i128_with_scale(100_000_000_000_000_000_000, 0);
        let responder = expect_list(&mut product_rx).await.expect("Expected Product List");
        responder.send(Ok(Arc::new(products))).unwrap();

        assert!(matches!(order_task.await.unwrap(), Err(OrderError::Rejected(_))));
        assert!(order_rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_sku_through_the_store() {
        let system = DashboardSystem::new(config());

        let mut form = system.product_form();
        form.set_name("Wireless Headphones");
        form.set_sku("tech-001");
        form.set_category(Category::Electronics);
        form.set_price(Some(dec!(99.99)));
        form.set_stock(Some(3));

        assert_eq!(form.submit().await, SubmitOutcome::Invalid);
        assert_eq!(form.error(ProductField::Sku), Some(ValidationError::SkuTaken));
        assert!(form.notification().is_none());

        let products = system.product_client.snapshot().await.unwrap();
        assert_eq!(products.len(), 3);
        assert_eq!(products.iter().filter(|p| p.has_sku("TECH-001")).count(), 1);

        // A fresh SKU goes through and shows up in the list view
        form.set_sku("tech-002");
        let outcome = form.submit().await;
        let id = outcome.created_id().unwrap().to_string();

        let products = system.product_client.list_products().await.unwrap();
        assert_eq!(products.iter().find(|p| p.id == id).map(|p| p.sku.as_str()), Some("TECH-002"));
        let mut table = system.product_table();
        table.set_filter(ProductFilter::default().with_search("TECH-"));
        let page = table.render(&products);
        assert_eq!(page.total_count, 2);
        assert_eq!(ProductMetrics::compute(&products).categories, [Category::Electronics, Category::Furniture, Category::Clothing]);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_order_form_against_running_system() {
        let system = DashboardSystem::new(config());

        let mut form = system.order_form().await.unwrap();
        form.set_client_name("Grace Hopper");
        form.set_line_product(0, "1");
        form.set_line_quantity(0, 2);
        form.add_line_item();
        form.set_line_product(1, "3");
        form.set_expected_delivery_date(NaiveDate::from_ymd_opt(2024, 11, 2));
        form.set_delivery_address("1 Compiler Way");
        assert_eq!(form.total_amount(), Some(dec!(289.97)));

        let outcome = form.submit().await;
        let SubmitOutcome::Created { id, redirect } = outcome else {
            panic!("Unexpected outcome: {:?}", outcome);
        };
        assert_eq!(id, "ORD-000005");
        assert_eq!(redirect.to, Route::Orders);
        assert!(redirect.after.is_zero());

        let order = system.order_client.get_order(id.clone()).await.unwrap().unwrap();
        assert_eq!(order.total_amount, dec!(289.97));
        assert_eq!(order.delivery_progress, 0);

        // Deleting a product leaves the stored total alone
        system.product_client.delete_product("1".into()).await.unwrap();
        let products = system.product_client.snapshot().await.unwrap();
        let orders = system.order_client.snapshot().await.unwrap();
        let detail = OrderDetail::find(&id, &orders, &products).unwrap();
        assert_eq!(detail.order.total_amount, dec!(289.97));
        assert_eq!(detail.lines[0].product, None);
        assert_eq!(detail.current_value(), dec!(29.99));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_order_updates_list_and_metrics() {
        let system = DashboardSystem::new(config());

        let removed = system.order_client.delete_order("ORD-002".into()).await.unwrap();
        assert_eq!(removed.client_name, "Jane Smith");

        let orders = system.order_client.list_orders().await.unwrap();
        assert_eq!(orders.len(), 3);
        assert!(orders.iter().all(|o| o.id != "ORD-002"));
        assert_eq!(OrderMetrics::compute(&orders).total, 3);

        let mut table = system.order_table();
        table.toggle_sort(OrderColumn::Id);
        let page = table.render(&orders);
        let ids: Vec<_> = page.items.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["ORD-001", "ORD-003", "ORD-004"]);

        assert_eq!(
            system.order_client.delete_order("ORD-002".into()).await,
            Err(OrderError::NotFound("ORD-002".into()))
        );

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_status_actions() {
        let system = DashboardSystem::new(config());

        let progress = system
            .order_client
            .set_delivery_status("ORD-002".into(), DeliveryStatus::Delivered, None)
            .await
            .unwrap();
        assert_eq!(progress, 100);

        let previous = system
            .order_client
            .set_payment_status("ORD-002".into(), PaymentStatus::Paid)
            .await
            .unwrap();
        assert_eq!(previous, PaymentStatus::Pending);

        assert!(system.product_client.set_product_active("2".into(), false).await.unwrap());
        let products = system.product_client.snapshot().await.unwrap();
        assert_eq!(ProductMetrics::compute(&products).active, 2);

        let orders = system.order_client.snapshot().await.unwrap();
        assert_eq!(OrderMetrics::compute(&orders).completion_percent, Some(50));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_system_metrics() {
        let system = DashboardSystem::empty(config());
        let orders = system.order_client.list_orders().await.unwrap();
        let metrics = OrderMetrics::compute(&orders);
        assert_eq!(metrics.total, 0);
        assert_eq!(metrics.average_satisfaction, None);

        let page = system.order_table().render(&orders);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.range(), None);

        system.shutdown().await.unwrap();
    }
}
