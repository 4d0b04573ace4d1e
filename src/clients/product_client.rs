use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use crate::actor_framework::{ResourceClient, Snapshot};
use crate::clients::port::{ProductPort, SimulatedLatency};
use crate::domain::{Product, ProductCreate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
    latency: SimulatedLatency,
}

impl_client_methods!(ProductClient, Product, ProductError, product);

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>, latency: SimulatedLatency) -> Self {
        Self { inner, latency }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Snapshot<Product>, ProductError> {
        debug!("Sending request");
        self.latency.before_list().await;
        let products = self.inner.list().await?;
        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    #[instrument(skip(self, params), fields(sku = %params.sku))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.latency.before_create().await;
        match self.inner.create(params).await {
            Ok(product) => {
                info!(product_id = %product.id, "Product created");
                Ok(product)
            }
            Err(e) => {
                let err = ProductError::from(e);
                warn!(error = %err, "Product creation failed");
                Err(err)
            }
        }
    }

    /// Returns whether the flag changed.
    #[instrument(skip(self))]
    pub async fn set_product_active(&self, id: String, active: bool) -> Result<bool, ProductError> {
        debug!("Sending request");
        let ProductActionResult::SetActive(changed) =
            self.inner.perform_action(id, ProductAction::SetActive(active)).await?;
        Ok(changed)
    }
}

#[async_trait]
impl ProductPort for ProductClient {
    async fn list(&self) -> Result<Snapshot<Product>, ProductError> {
        self.list_products().await
    }

    async fn create(&self, params: ProductCreate) -> Result<Product, ProductError> {
        self.create_product(params).await
    }
}
