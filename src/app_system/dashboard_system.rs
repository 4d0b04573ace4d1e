use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::actor_framework::ResourceActor;
use crate::app_system::DashboardConfig;
use crate::clients::{OrderClient, ProductClient};
use crate::domain::{seed, Order, Product};
use crate::forms::{OrderForm, ProductForm};
use crate::view::{OrderTable, ProductTable};

/// The application system that owns both collections.
///
/// Starts one resource actor per entity, wires the clients together and
/// hands out forms and table views bound to them.
pub struct DashboardSystem {
    pub product_client: ProductClient,
    pub order_client: OrderClient,
    config: DashboardConfig,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl DashboardSystem {
    /// Starts with the mock dataset loaded.
    pub fn new(config: DashboardConfig) -> Self {
        Self::with_data(config, seed::products(), seed::orders())
    }

    /// Starts with empty collections.
    pub fn empty(config: DashboardConfig) -> Self {
        Self::with_data(config, Vec::new(), Vec::new())
    }

    pub fn with_data(config: DashboardConfig, products: Vec<Product>, orders: Vec<Order>) -> Self {
        info!(products = products.len(), orders = orders.len(), "Starting dashboard system");

        // 1. Product store: sequential ids continuing after the seed
        let product_id_counter = Arc::new(AtomicU64::new(next_sequence(&products, |p| p.id.parse().ok())));
        let next_product_id = move || product_id_counter.fetch_add(1, Ordering::SeqCst).to_string();

        let (product_actor, product_resource_client) =
            ResourceActor::<Product>::new(config.channel_buffer, next_product_id);
        let product_client = ProductClient::new(product_resource_client, config.latency());
        let product_handle = tokio::spawn(product_actor.seeded(products).run());

        // 2. Order store: ORD-NNNNNN ids
        let order_id_counter = Arc::new(AtomicU64::new(next_sequence(&orders, |o| {
            o.id.strip_prefix("ORD-").and_then(|n| n.parse().ok())
        })));
        let next_order_id = move || format!("ORD-{:06}", order_id_counter.fetch_add(1, Ordering::SeqCst));

        let (order_actor, order_resource_client) = ResourceActor::<Order>::new(config.channel_buffer, next_order_id);
        let order_client = OrderClient::new(order_resource_client, product_client.clone(), config.latency());
        let order_handle = tokio::spawn(order_actor.seeded(orders).run());

        Self {
            product_client,
            order_client,
            config,
            handles: vec![product_handle, order_handle],
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn product_form(&self) -> ProductForm {
        ProductForm::new(Arc::new(self.product_client.clone()), &self.config)
    }

    /// A new order form priced against the current catalog.
    pub async fn order_form(&self) -> Result<OrderForm, crate::product_actor::ProductError> {
        let catalog = self.product_client.snapshot().await?;
        Ok(OrderForm::new(Arc::new(self.order_client.clone()), catalog, &self.config))
    }

    pub fn product_table(&self) -> ProductTable {
        ProductTable::with_page_size(self.config.page_size)
    }

    pub fn order_table(&self) -> OrderTable {
        OrderTable::with_page_size(self.config.page_size)
    }

    /// Stops both actors and waits for them to exit.
    ///
    /// Forms and client clones handed out earlier may outlive the system;
    /// their requests fail with a communication error from here on.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        if let Err(e) = self.order_client.stop().await {
            warn!(error = %e, "Order actor already stopped");
        }
        if let Err(e) = self.product_client.stop().await {
            warn!(error = %e, "Product actor already stopped");
        }

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

/// One past the highest numeric id already present.
fn next_sequence<T>(items: &[T], number: impl Fn(&T) -> Option<u64>) -> u64 {
    items.iter().filter_map(number).max().map_or(1, |max| max + 1)
}
