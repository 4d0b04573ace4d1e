use chrono::{Days, Utc};
use rust_decimal_macros::dec;
use tracing::{error, info, warn, Instrument};

use order_dashboard::app_system::{setup_tracing, DashboardConfig, DashboardSystem};
use order_dashboard::domain::{Category, DeliveryStatus, PaymentStatus};
use order_dashboard::forms::SubmitOutcome;
use order_dashboard::view::{OrderColumn, OrderDetail, OrderFilter, OrderMetrics, ProductFilter, ProductMetrics};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = DashboardConfig::from_env();
    // Setup tracing once for the entire application
    setup_tracing(&config.log_filter);

    info!(page_size = config.page_size, "Starting dashboard with mock data");
    let system = DashboardSystem::new(config);

    // Product list: search + category facet
    let products = system.product_client.list_products().await.map_err(|e| e.to_string())?;
    let product_metrics = ProductMetrics::compute(&products);
    info!(
        total = product_metrics.total,
        active = product_metrics.active,
        categories = ?product_metrics.categories,
        "Product metrics"
    );

    let mut product_table = system.product_table();
    product_table.set_filter(ProductFilter::default().with_category(Category::Electronics));
    let page = product_table.render(&products);
    for product in &page.items {
        info!(sku = %product.sku, name = %product.name, price = %product.price, "Electronics");
    }
    info!("{}", page.summary());

    // Create a product; the second attempt collides on SKU
    let span = tracing::info_span!("product_creation");
    async {
        let mut form = system.product_form();
        form.set_name("Standing Desk");
        form.set_sku("furn-002");
        form.set_category(Category::Furniture);
        form.set_price(Some(dec!(399.00)));
        form.set_stock(Some(5));
        form.set_description("Height adjustable desk");

        match form.submit().await {
            SubmitOutcome::Created { id, redirect } => {
                info!(product_id = %id, to = redirect.to.path(), after = ?redirect.after, "Product created")
            }
            other => warn!(outcome = ?other, "Product was not created"),
        }

        let mut duplicate = system.product_form();
        duplicate.set_name("Another Desk");
        duplicate.set_sku("FURN-002");
        duplicate.set_category(Category::Furniture);
        duplicate.set_price(Some(dec!(10)));
        if let SubmitOutcome::Invalid = duplicate.submit().await {
            for (field, err) in duplicate.errors().iter() {
                info!(?field, error = %err, "Rejected as expected");
            }
        }
    }
    .instrument(span)
    .await;

    // Create an order priced from the catalog
    let span = tracing::info_span!("order_processing");
    let created_order = async {
        let mut form = system.order_form().await.map_err(|e| e.to_string())?;
        form.set_client_name("Grace Hopper");
        form.set_line_product(0, "1");
        form.set_line_quantity(0, 2);
        form.add_line_item();
        form.set_line_product(1, "3");
        form.set_line_quantity(1, 3);
        form.set_payment_status(PaymentStatus::Paid);
        form.set_expected_delivery_date(Utc::now().date_naive().checked_add_days(Days::new(7)));
        form.set_delivery_address("1 Compiler Way, Arlington");
        info!(total = ?form.total_amount(), "Order draft priced");

        match form.submit().await {
            SubmitOutcome::Created { id, .. } => Ok(Some(id)),
            other => {
                if let Some(notification) = form.notification() {
                    error!(description = %notification.description, "Order form error");
                }
                warn!(outcome = ?other, errors = %form.errors(), "Order was not created");
                Ok::<_, String>(None)
            }
        }
    }
    .instrument(span)
    .await?;

    if let Some(order_id) = created_order {
        let progress = system
            .order_client
            .set_delivery_status(order_id.clone(), DeliveryStatus::Shipped, None)
            .await
            .map_err(|e| e.to_string())?;
        info!(%order_id, progress, "Order shipped");

        let products = system.product_client.snapshot().await.map_err(|e| e.to_string())?;
        let orders = system.order_client.snapshot().await.map_err(|e| e.to_string())?;
        if let Some(detail) = OrderDetail::find(&order_id, &orders, &products) {
            for line in &detail.lines {
                let name = line.product.as_ref().map_or("(deleted product)", |p| p.name.as_str());
                info!(product = name, quantity = line.quantity, line_total = %line.line_total, "Line item");
            }
            info!(client = %detail.client_initials, total = %detail.order.total_amount, "Order detail");
        }
    }

    // Delete an order and show the refreshed list
    match system.order_client.delete_order("ORD-002".to_string()).await {
        Ok(order) => info!(order_id = %order.id, "Order deleted"),
        Err(e) => error!(error = %e, "Order deletion failed"),
    }

    let orders = system.order_client.list_orders().await.map_err(|e| e.to_string())?;
    let mut order_table = system.order_table();
    order_table.set_filter(OrderFilter::default().with_search("ord-"));
    order_table.toggle_sort(OrderColumn::TotalAmount);
    order_table.toggle_sort(OrderColumn::TotalAmount);
    let page = order_table.render(&orders);
    for order in &page.items {
        info!(
            order_id = %order.id,
            client = %order.client_name,
            total = %order.total_amount,
            delivery = %order.delivery_status,
            "Order"
        );
    }

    let metrics = OrderMetrics::compute(&orders);
    info!(
        total = metrics.total,
        shipped = metrics.shipped,
        delivered = metrics.delivered,
        satisfaction = %metrics.satisfaction_label(),
        completion = ?metrics.completion_percent,
        "Order metrics"
    );
    let json = serde_json::to_string(&page).map_err(|e| e.to_string())?;
    info!(bytes = json.len(), "Serialized order page");

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
