use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use tracing::{debug, error, info, instrument, warn};

use crate::app_system::DashboardConfig;
use crate::clients::ProductPort;
use crate::domain::{Category, ProductField, ProductInput, ValidationError, ValidationErrors};
use crate::forms::feedback::{Feedback, FeedbackCell};
use crate::forms::{Notification, Redirect, Route, SubmitGuard, SubmitOutcome};
use crate::product_actor::ProductError;

/// The "create product" form.
pub struct ProductForm {
    port: Arc<dyn ProductPort>,
    draft: ProductInput,
    feedback: FeedbackCell<ProductField>,
    guard: SubmitGuard,
    redirect_delay: Duration,
    notification_duration: Duration,
}

impl ProductForm {
    /// New forms start active with zero stock.
    pub fn new(port: Arc<dyn ProductPort>, config: &DashboardConfig) -> Self {
        Self {
            port,
            draft: ProductInput {
                stock: Some(0),
                active: Some(true),
                ..ProductInput::default()
            },
            feedback: FeedbackCell::default(),
            guard: SubmitGuard::default(),
            redirect_delay: config.redirect_delay,
            notification_duration: config.notification_duration,
        }
    }

    pub fn draft(&self) -> &ProductInput {
        &self.draft
    }

    pub fn set_name(&mut self, name: &str) {
        self.draft.name = name.to_string();
        self.touch(ProductField::Name);
    }

    pub fn set_sku(&mut self, sku: &str) {
        self.draft.sku = sku.to_string();
        self.touch(ProductField::Sku);
    }

    pub fn set_category(&mut self, category: Category) {
        self.set_category_label(category.as_str());
    }

    /// Free-text category, validated on submit.
    pub fn set_category_label(&mut self, label: &str) {
        self.draft.category = label.to_string();
        self.touch(ProductField::Category);
    }

    pub fn set_price(&mut self, price: Option<Decimal>) {
        self.draft.price = price;
        self.touch(ProductField::Price);
    }

    pub fn set_stock(&mut self, stock: Option<i64>) {
        self.draft.stock = stock;
        self.touch(ProductField::Stock);
    }

    pub fn set_description(&mut self, description: &str) {
        self.draft.description = Some(description.to_string());
        self.touch(ProductField::Description);
    }

    pub fn set_active(&mut self, active: bool) {
        self.draft.active = Some(active);
        self.touch(ProductField::Active);
    }

    pub fn errors(&self) -> ValidationErrors<ProductField> {
        self.feedback.lock().errors.clone()
    }

    pub fn error(&self, field: ProductField) -> Option<ValidationError> {
        self.feedback.lock().errors.get(field).cloned()
    }

    pub fn notification(&self) -> Option<Notification> {
        self.feedback.lock().notification.clone()
    }

    pub fn dismiss_notification(&self) {
        self.feedback.lock().notification = None;
    }

    pub fn feedback(&self) -> Feedback<ProductField> {
        self.feedback.snapshot()
    }

    /// Whether the submit button should be disabled.
    pub fn is_submitting(&self) -> bool {
        self.guard.is_submitting()
    }

    /// Validates the draft and creates the product.
    ///
    /// A SKU that already exists comes back as an error on the SKU field,
    /// not as a failure toast.
    #[instrument(skip(self), fields(sku = %self.draft.sku))]
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(_in_flight) = self.guard.try_begin() else {
            debug!("Submission already in flight");
            return SubmitOutcome::AlreadySubmitting;
        };

        let params = match self.draft.clone().validate() {
            Ok(params) => params,
            Err(errors) => {
                debug!(errors = errors.len(), "Product draft failed validation");
                self.feedback.lock().errors = errors;
                return SubmitOutcome::Invalid;
            }
        };

        {
            let mut feedback = self.feedback.lock();
            feedback.errors.clear();
            feedback.notification = None;
        }

        match self.port.create(params).await {
            Ok(product) => {
                info!(product_id = %product.id, "Product form submitted");
                self.feedback.lock().notification =
                    Some(Notification::success("Product created successfully", self.notification_duration));
                SubmitOutcome::Created {
                    id: product.id,
                    redirect: Redirect {
                        to: Route::Products,
                        after: self.redirect_delay,
                    },
                }
            }
            Err(ProductError::DuplicateSku(sku)) => {
                warn!(%sku, "SKU already in use");
                self.feedback.lock().errors.set(ProductField::Sku, ValidationError::SkuTaken);
                SubmitOutcome::Invalid
            }
            Err(e) => {
                error!(error = %e, "Failed to create product");
                self.feedback.lock().notification =
                    Some(Notification::error("Failed to create product", self.notification_duration));
                SubmitOutcome::Failed
            }
        }
    }

    fn touch(&mut self, field: ProductField) {
        self.feedback.get_mut().errors.clear_field(field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::Snapshot;
    use crate::domain::{Product, ProductCreate};
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    /// Records creates; optionally slow or failing.
    #[derive(Default)]
    struct FakeProducts {
        created: Mutex<Vec<ProductCreate>>,
        delay: Duration,
        fail_with: Option<ProductError>,
    }

    #[async_trait]
    impl ProductPort for FakeProducts {
        async fn list(&self) -> Result<Snapshot<Product>, ProductError> {
            Ok(Arc::new(Vec::new()))
        }

        async fn create(&self, params: ProductCreate) -> Result<Product, ProductError> {
            tokio::time::sleep(self.delay).await;
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }
            let mut created = self.created.lock().unwrap();
            created.push(params.clone());
            Ok(Product::new(
                created.len().to_string(),
                params.name,
                params.sku,
                params.category,
                params.price,
                params.stock,
            ))
        }
    }

    fn filled(port: Arc<FakeProducts>) -> ProductForm {
        let mut form = ProductForm::new(port, &DashboardConfig::default());
        form.set_name("Desk Lamp");
        form.set_sku("home-001");
        form.set_category(Category::Furniture);
        form.set_price(Some(dec!(39.50)));
        form.set_stock(Some(12));
        form
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_port() {
        let port = Arc::new(FakeProducts::default());
        let mut form = ProductForm::new(port.clone(), &DashboardConfig::default());
        form.set_name("ab");
        form.set_price(Some(dec!(-1)));

        assert_eq!(form.submit().await, SubmitOutcome::Invalid);
        assert_eq!(form.error(ProductField::Name), Some(ValidationError::NameTooShort));
        assert_eq!(form.error(ProductField::Sku), Some(ValidationError::SkuRequired));
        assert_eq!(form.error(ProductField::Price), Some(ValidationError::InvalidPrice));
        assert!(form.notification().is_none());
        assert!(port.created.lock().unwrap().is_empty());

        form.set_name("Lamp");
        assert_eq!(form.error(ProductField::Name), None);
        assert_eq!(form.error(ProductField::Sku), Some(ValidationError::SkuRequired));
    }

    #[tokio::test]
    async fn test_success_sets_notification_and_redirect() {
        let port = Arc::new(FakeProducts::default());
        let form = filled(port.clone());

        let outcome = form.submit().await;
        assert_eq!(
            outcome,
            SubmitOutcome::Created {
                id: "1".into(),
                redirect: Redirect {
                    to: Route::Products,
                    after: Duration::from_millis(1500),
                },
            }
        );
        assert_eq!(port.created.lock().unwrap()[0].sku, "HOME-001");

        let notification = form.notification().unwrap();
        assert_eq!(notification.description, "Product created successfully");
        assert_eq!(notification.auto_close, Duration::from_millis(4000));
        form.dismiss_notification();
        assert!(form.notification().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_submit_creates_once() {
        let port = Arc::new(FakeProducts {
            delay: Duration::from_millis(500),
            ..FakeProducts::default()
        });
        let form = filled(port.clone());

        let (first, second) = tokio::join!(form.submit(), form.submit());
        assert!(matches!(first, SubmitOutcome::Created { .. }));
        assert_eq!(second, SubmitOutcome::AlreadySubmitting);
        assert_eq!(port.created.lock().unwrap().len(), 1);
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_duplicate_sku_is_a_field_error() {
        let port = Arc::new(FakeProducts {
            fail_with: Some(ProductError::DuplicateSku("HOME-001".into())),
            ..FakeProducts::default()
        });
        let mut form = filled(port);

        assert_eq!(form.submit().await, SubmitOutcome::Invalid);
        assert_eq!(form.error(ProductField::Sku), Some(ValidationError::SkuTaken));
        assert!(form.notification().is_none());

        form.set_sku("HOME-002");
        assert!(form.errors().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_keeps_draft() {
        let port = Arc::new(FakeProducts {
            fail_with: Some(ProductError::ActorCommunicationError("Actor closed".into())),
            ..FakeProducts::default()
        });
        let form = filled(port);

        assert_eq!(form.submit().await, SubmitOutcome::Failed);
        let notification = form.notification().unwrap();
        assert!(notification.is_error());
        assert_eq!(notification.description, "Failed to create product");
        assert_eq!(form.draft().name, "Desk Lamp");
        assert!(!form.is_submitting());
    }
}
