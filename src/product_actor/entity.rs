use chrono::Utc;

use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::{normalize_sku, Product, ProductCreate};
use super::actions::{ProductAction, ProductActionResult};

impl Entity for Product {
    type Id = String;
    type CreateParams = ProductCreate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new Product from creation parameters.
    ///
    /// # Arguments
    /// * `id` - Sequential identifier assigned by the store
    /// * `params` - Validated product fields
    ///
    /// # Notes
    /// `created_at` is stamped here and never changes afterwards.
    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, FrameworkError> {
        let sku = normalize_sku(&params.sku);
        if sku.is_empty() {
            return Err(FrameworkError::Rejected("SKU is required".to_string()));
        }
        Ok(Self {
            id,
            name: params.name,
            sku,
            category: params.category,
            price: params.price,
            stock: params.stock,
            description: params.description,
            active: params.active,
            created_at: Utc::now(),
        })
    }

    /// SKUs must be unique across the catalog when a product is created.
    fn unique_key(&self) -> Option<String> {
        Some(normalize_sku(&self.sku))
    }

    /// Handles product-specific actions.
    ///
    /// # Actions
    /// - `SetActive(flag)`: Sets availability, reporting whether it changed
    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, FrameworkError> {
        match action {
            ProductAction::SetActive(active) => {
                let changed = self.active != active;
                self.active = active;
                Ok(ProductActionResult::SetActive(changed))
            }
        }
    }
}
