use async_trait::async_trait;
use tracing::{debug, error, info, instrument};

use crate::actor_framework::{ResourceClient, Snapshot};
use crate::clients::port::{OrderPort, SimulatedLatency};
use crate::clients::ProductClient;
use crate::domain::{order_total, CustomerFeedback, DeliveryStatus, NewOrder, Order, OrderCreate, PaymentStatus};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};

/// Client for interacting with the Order actor.
///
/// Creation is orchestrated here: every line item is resolved against the
/// product store and the total is priced before the order actor sees it.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    product_client: ProductClient,
    latency: SimulatedLatency,
}

impl_client_methods!(OrderClient, Order, OrderError, order);

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, product_client: ProductClient, latency: SimulatedLatency) -> Self {
        Self {
            inner,
            product_client,
            latency,
        }
    }

    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Snapshot<Order>, OrderError> {
        debug!("Sending request");
        self.latency.before_list().await;
        let orders = self.inner.list().await?;
        debug!(count = orders.len(), "Listed orders");
        Ok(orders)
    }

    #[instrument(skip(self, order), fields(client_name = %order.client_name, lines = order.items.len()))]
    pub async fn create_order(&self, order: NewOrder) -> Result<Order, OrderError> {
        info!("Processing create_order request (Client Side)");
        self.latency.before_create().await;

        // Step 1: Resolve products against the current catalog
        let products = match self.product_client.snapshot().await {
            Ok(products) => products,
            Err(e) => {
                error!(error = %e, "Product lookup failed");
                return Err(OrderError::ActorCommunicationError(format!("Product lookup failed: {}", e)));
            }
        };

        if let Some(missing) = order
            .items
            .iter()
            .find(|item| !products.iter().any(|p| p.id == item.product_id))
        {
            error!(product_id = %missing.product_id, "Product not found");
            return Err(OrderError::UnknownProduct(missing.product_id.clone()));
        }

        // Step 2: Price the order; the total is frozen from here on
        let Some(total_amount) = order_total(
            order.items.iter().map(|item| (item.product_id.as_str(), item.quantity)),
            |id| products.iter().find(|p| p.id == id).map(|p| p.price),
        ) else {
            error!("Order total overflows");
            return Err(OrderError::Rejected("order total is too large".to_string()));
        };
        debug!(%total_amount, "Order priced");

        // Step 3: Create order in ResourceActor
        let created = self.inner.create(OrderCreate { order, total_amount }).await?;
        info!(order_id = %created.id, "Order created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn set_payment_status(&self, id: String, status: PaymentStatus) -> Result<PaymentStatus, OrderError> {
        debug!("Sending request");
        match self.inner.perform_action(id, OrderAction::SetPaymentStatus(status)).await? {
            OrderActionResult::SetPaymentStatus(previous) => Ok(previous),
            other => Err(OrderError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
        }
    }

    /// Returns the progress the order ended up with.
    #[instrument(skip(self))]
    pub async fn set_delivery_status(
        &self,
        id: String,
        status: DeliveryStatus,
        progress: Option<u8>,
    ) -> Result<u8, OrderError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, OrderAction::SetDeliveryStatus { status, progress })
            .await?
        {
            OrderActionResult::SetDeliveryStatus { progress, .. } => Ok(progress),
            other => Err(OrderError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
        }
    }

    #[instrument(skip(self))]
    pub async fn record_feedback(&self, id: String, feedback: CustomerFeedback) -> Result<CustomerFeedback, OrderError> {
        debug!("Sending request");
        match self.inner.perform_action(id, OrderAction::RecordFeedback(feedback)).await? {
            OrderActionResult::RecordFeedback(previous) => Ok(previous),
            other => Err(OrderError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
        }
    }
}

#[async_trait]
impl OrderPort for OrderClient {
    async fn list(&self) -> Result<Snapshot<Order>, OrderError> {
        self.list_orders().await
    }

    async fn create(&self, order: NewOrder) -> Result<Order, OrderError> {
        self.create_order(order).await
    }
}
