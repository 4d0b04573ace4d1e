use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::catalog::{CustomerFeedback, DeliveryStatus, PaymentStatus};
use super::validation::{OrderField, ValidationError, ValidationErrors};

const MIN_ADDRESS_LEN: usize = 5;

/// A (product, quantity) pairing within an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: String,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// Represents a customer order.
///
/// `total_amount` is a snapshot taken when the order was created; later
/// product price changes do not touch it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub client_name: String,
    #[serde(rename = "orderItems")]
    pub items: Vec<LineItem>,
    pub total_amount: Decimal,
    pub payment_status: PaymentStatus,
    pub delivery_status: DeliveryStatus,
    pub delivery_progress: u8,
    pub expected_delivery_date: NaiveDate,
    pub delivery_address: String,
    pub customer_feedback: CustomerFeedback,
    pub created_at: DateTime<Utc>,
}

/// A validated order, before it has been priced.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub client_name: String,
    pub items: Vec<LineItem>,
    pub payment_status: PaymentStatus,
    pub delivery_status: DeliveryStatus,
    pub expected_delivery_date: NaiveDate,
    pub delivery_address: String,
}

/// Payload for creating a new order. Carries the priced total.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreate {
    pub order: NewOrder,
    pub total_amount: Decimal,
}

/// Raw line item input; the quantity may be anything the user typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineItemInput {
    pub product_id: String,
    pub quantity: Option<i64>,
}

/// Raw order form input, as submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderInput {
    pub client_name: String,
    pub order_items: Vec<LineItemInput>,
    pub payment_status: Option<PaymentStatus>,
    pub delivery_status: Option<DeliveryStatus>,
    pub expected_delivery_date: Option<NaiveDate>,
    pub delivery_address: String,
}

impl Order {
    /// Builds an order directly, bypassing validation. Used for seed data.
    pub fn new(
        id: impl Into<String>,
        client_name: impl Into<String>,
        items: Vec<LineItem>,
        total_amount: Decimal,
        expected_delivery_date: NaiveDate,
        delivery_address: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            client_name: client_name.into(),
            items,
            total_amount,
            payment_status: PaymentStatus::Pending,
            delivery_status: DeliveryStatus::Pending,
            delivery_progress: 0,
            expected_delivery_date,
            delivery_address: delivery_address.into(),
            customer_feedback: CustomerFeedback::Neutral,
            created_at: Utc::now(),
        }
    }

    pub fn with_statuses(mut self, payment: PaymentStatus, delivery: DeliveryStatus, progress: u8) -> Self {
        self.payment_status = payment;
        self.delivery_status = delivery;
        self.delivery_progress = progress.min(100);
        self
    }

    pub fn with_feedback(mut self, feedback: CustomerFeedback) -> Self {
        self.customer_feedback = feedback;
        self
    }

    pub fn created_on(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// Sums `unit price × quantity` over `items`.
///
/// Items whose product `price_of` cannot resolve contribute zero. Returns
/// `None` when the sum does not fit in a [`Decimal`].
pub fn order_total<'a>(
    items: impl IntoIterator<Item = (&'a str, u32)>,
    price_of: impl Fn(&str) -> Option<Decimal>,
) -> Option<Decimal> {
    items.into_iter().try_fold(Decimal::ZERO, |total, (product_id, quantity)| {
        let line = match price_of(product_id) {
            Some(price) => price.checked_mul(Decimal::from(quantity))?,
            None => Decimal::ZERO,
        };
        total.checked_add(line)
    })
}

/// Client initials, e.g. "Jane Smith" -> "JS".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

impl OrderInput {
    pub fn validate(self) -> Result<NewOrder, ValidationErrors<OrderField>> {
        let mut errors = ValidationErrors::new();

        let client_name = self.client_name.trim().to_string();
        if client_name.is_empty() {
            errors.add(OrderField::ClientName, ValidationError::ClientNameRequired);
        }

        if self.order_items.is_empty() {
            errors.add(OrderField::Items, ValidationError::NoProductsSelected);
        }

        let mut items = Vec::with_capacity(self.order_items.len());
        for (index, line) in self.order_items.into_iter().enumerate() {
            let product_id = line.product_id.trim().to_string();
            if product_id.is_empty() {
                errors.add(OrderField::LineProduct(index), ValidationError::ProductRequired);
            }
            match line.quantity.filter(|q| *q > 0).map(u32::try_from) {
                Some(Ok(quantity)) => items.push(LineItem { product_id, quantity }),
                _ => errors.add(OrderField::LineQuantity(index), ValidationError::InvalidQuantity),
            }
        }

        let delivery_address = self.delivery_address.trim().to_string();
        if delivery_address.chars().count() < MIN_ADDRESS_LEN {
            errors.add(OrderField::DeliveryAddress, ValidationError::AddressTooShort);
        }

        let Some(expected_delivery_date) = self.expected_delivery_date else {
            errors.add(OrderField::ExpectedDeliveryDate, ValidationError::DeliveryDateRequired);
            return Err(errors);
        };

        errors.into_result(NewOrder {
            client_name,
            items,
            payment_status: self.payment_status.unwrap_or(PaymentStatus::Pending),
            delivery_status: self.delivery_status.unwrap_or(DeliveryStatus::Pending),
            expected_delivery_date,
            delivery_address,
        })
    }
}
