use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

use crate::actor_framework::Snapshot;
use crate::app_system::DashboardConfig;
use crate::clients::OrderPort;
use crate::domain::{
    order_total, DeliveryStatus, LineItemInput, OrderField, OrderInput, PaymentStatus, Product, ValidationError,
    ValidationErrors,
};
use crate::forms::feedback::{Feedback, FeedbackCell};
use crate::forms::{Notification, Redirect, Route, SubmitGuard, SubmitOutcome};
use crate::order_actor::OrderError;

/// One editable row of the order form. The quantity is kept as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemDraft {
    pub product_id: String,
    pub quantity: i64,
}

impl Default for LineItemDraft {
    fn default() -> Self {
        Self {
            product_id: String::new(),
            quantity: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub client_name: String,
    pub items: Vec<LineItemDraft>,
    pub payment_status: PaymentStatus,
    pub delivery_status: DeliveryStatus,
    pub expected_delivery_date: Option<NaiveDate>,
    pub delivery_address: String,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            client_name: String::new(),
            items: vec![LineItemDraft::default()],
            payment_status: PaymentStatus::Pending,
            delivery_status: DeliveryStatus::Pending,
            expected_delivery_date: None,
            delivery_address: String::new(),
        }
    }
}

impl OrderDraft {
    fn to_input(&self) -> OrderInput {
        OrderInput {
            client_name: self.client_name.clone(),
            order_items: self
                .items
                .iter()
                .map(|line| LineItemInput {
                    product_id: line.product_id.clone(),
                    quantity: Some(line.quantity),
                })
                .collect(),
            payment_status: Some(self.payment_status),
            delivery_status: Some(self.delivery_status),
            expected_delivery_date: self.expected_delivery_date,
            delivery_address: self.delivery_address.clone(),
        }
    }
}

/// The "create order" form.
///
/// Line items are priced live against the catalog snapshot the form was
/// opened with. The store prices the order again when it is created.
pub struct OrderForm {
    port: Arc<dyn OrderPort>,
    catalog: Snapshot<Product>,
    draft: OrderDraft,
    feedback: FeedbackCell<OrderField>,
    guard: SubmitGuard,
    redirect_delay: Duration,
    notification_duration: Duration,
}

impl OrderForm {
    pub fn new(port: Arc<dyn OrderPort>, catalog: Snapshot<Product>, config: &DashboardConfig) -> Self {
        Self {
            port,
            catalog,
            draft: OrderDraft::default(),
            feedback: FeedbackCell::default(),
            guard: SubmitGuard::default(),
            redirect_delay: config.redirect_delay,
            notification_duration: config.notification_duration,
        }
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    /// Products offered in the line item pickers.
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn refresh_catalog(&mut self, catalog: Snapshot<Product>) {
        self.catalog = catalog;
    }

    /// Σ unit price × quantity at catalog prices. Rows without a known
    /// product or with a non-positive quantity add nothing. `None` when the
    /// total overflows.
    pub fn total_amount(&self) -> Option<Decimal> {
        let lines = self
            .draft
            .items
            .iter()
            .map(|line| (line.product_id.as_str(), u32::try_from(line.quantity).unwrap_or(0)));
        order_total(lines, |id| self.catalog.iter().find(|p| p.id == id).map(|p| p.price))
    }

    pub fn set_client_name(&mut self, name: &str) {
        self.draft.client_name = name.to_string();
        self.touch(OrderField::ClientName);
    }

    pub fn add_line_item(&mut self) {
        self.draft.items.push(LineItemDraft::default());
        self.touch(OrderField::Items);
    }

    /// Removes row `index`. Returns `false` if there is no such row.
    pub fn remove_line_item(&mut self, index: usize) -> bool {
        if index >= self.draft.items.len() {
            return false;
        }
        self.draft.items.remove(index);
        // Row indices shift, so per-row errors no longer line up.
        self.feedback
            .get_mut()
            .errors
            .retain(|field| !matches!(field, OrderField::LineProduct(_) | OrderField::LineQuantity(_)));
        true
    }

    pub fn set_line_product(&mut self, index: usize, product_id: &str) -> bool {
        let Some(line) = self.draft.items.get_mut(index) else {
            return false;
        };
        line.product_id = product_id.to_string();
        self.touch(OrderField::LineProduct(index));
        true
    }

    pub fn set_line_quantity(&mut self, index: usize, quantity: i64) -> bool {
        let Some(line) = self.draft.items.get_mut(index) else {
            return false;
        };
        line.quantity = quantity;
        self.touch(OrderField::LineQuantity(index));
        true
    }

    pub fn set_payment_status(&mut self, status: PaymentStatus) {
        self.draft.payment_status = status;
        self.touch(OrderField::PaymentStatus);
    }

    pub fn set_delivery_status(&mut self, status: DeliveryStatus) {
        self.draft.delivery_status = status;
        self.touch(OrderField::DeliveryStatus);
    }

    pub fn set_expected_delivery_date(&mut self, date: Option<NaiveDate>) {
        self.draft.expected_delivery_date = date;
        self.touch(OrderField::ExpectedDeliveryDate);
    }

    pub fn set_delivery_address(&mut self, address: &str) {
        self.draft.delivery_address = address.to_string();
        self.touch(OrderField::DeliveryAddress);
    }

    pub fn errors(&self) -> ValidationErrors<OrderField> {
        self.feedback.lock().errors.clone()
    }

    pub fn error(&self, field: OrderField) -> Option<ValidationError> {
        self.feedback.lock().errors.get(field).cloned()
    }

    pub fn notification(&self) -> Option<Notification> {
        self.feedback.lock().notification.clone()
    }

    pub fn dismiss_notification(&self) {
        self.feedback.lock().notification = None;
    }

    pub fn feedback(&self) -> Feedback<OrderField> {
        self.feedback.snapshot()
    }

    pub fn is_submitting(&self) -> bool {
        self.guard.is_submitting()
    }

    /// Validates the draft and creates the order.
    ///
    /// A line pointing at a product the store no longer has is reported on
    /// that line rather than as a failure toast.
    #[instrument(skip(self), fields(client_name = %self.draft.client_name, lines = self.draft.items.len()))]
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(_in_flight) = self.guard.try_begin() else {
            debug!("Submission already in flight");
            return SubmitOutcome::AlreadySubmitting;
        };

        let order = match self.draft.to_input().validate() {
            Ok(order) => order,
            Err(errors) => {
                debug!(errors = errors.len(), "Order draft failed validation");
                self.feedback.lock().errors = errors;
                return SubmitOutcome::Invalid;
            }
        };

        if self.total_amount().is_none() {
            warn!("Order total overflows");
            let mut feedback = self.feedback.lock();
            feedback.errors.clear();
            feedback.errors.set(OrderField::Items, ValidationError::TotalTooLarge);
            return SubmitOutcome::Invalid;
        }

        {
            let mut feedback = self.feedback.lock();
            feedback.errors.clear();
            feedback.notification = None;
        }

        match self.port.create(order).await {
            Ok(order) => {
                info!(order_id = %order.id, total = %order.total_amount, "Order form submitted");
                self.feedback.lock().notification =
                    Some(Notification::success("Order created successfully", self.notification_duration));
                SubmitOutcome::Created {
                    id: order.id,
                    redirect: Redirect {
                        to: Route::Orders,
                        after: self.redirect_delay,
                    },
                }
            }
            Err(OrderError::UnknownProduct(product_id)) => {
                warn!(%product_id, "Order references a missing product");
                let index = self
                    .draft
                    .items
                    .iter()
                    .position(|line| line.product_id.trim() == product_id)
                    .unwrap_or(0);
                self.feedback
                    .lock()
                    .errors
                    .set(OrderField::LineProduct(index), ValidationError::UnknownProduct(product_id));
                SubmitOutcome::Invalid
            }
            Err(e) => {
                error!(error = %e, "Failed to create order");
                self.feedback.lock().notification =
                    Some(Notification::error("Failed to create order", self.notification_duration));
                SubmitOutcome::Failed
            }
        }
    }

    fn touch(&mut self, field: OrderField) {
        self.feedback.get_mut().errors.clear_field(field);
    }
}
