//! Persistence ports the forms and views talk to.
//!
//! The dashboard has no backend; the actor-backed clients implement these
//! traits with a fixed artificial delay so the UI-facing code sees the same
//! suspension points a network call would have.

use std::time::Duration;

use async_trait::async_trait;

use crate::actor_framework::Snapshot;
use crate::domain::{NewOrder, Order, Product, ProductCreate};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;

/// Read and create access to the product collection.
#[async_trait]
pub trait ProductPort: Send + Sync {
    async fn list(&self) -> Result<Snapshot<Product>, ProductError>;
    async fn create(&self, params: ProductCreate) -> Result<Product, ProductError>;
}

/// Read and create access to the order collection.
#[async_trait]
pub trait OrderPort: Send + Sync {
    async fn list(&self) -> Result<Snapshot<Order>, OrderError>;
    async fn create(&self, order: NewOrder) -> Result<Order, OrderError>;
}

/// Artificial delay applied before each port call completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    pub list: Duration,
    pub create: Duration,
}

impl SimulatedLatency {
    pub const NONE: SimulatedLatency = SimulatedLatency {
        list: Duration::ZERO,
        create: Duration::ZERO,
    };

    pub async fn before_list(&self) {
        if !self.list.is_zero() {
            tokio::time::sleep(self.list).await;
        }
    }

    pub async fn before_create(&self) {
        if !self.create.is_zero() {
            tokio::time::sleep(self.create).await;
        }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(300),
            create: Duration::from_millis(500),
        }
    }
}
