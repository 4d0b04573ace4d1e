use chrono::Utc;

use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::{CustomerFeedback, Order, OrderCreate};
use super::actions::{OrderAction, OrderActionResult};

impl Entity for Order {
    type Id = String;
    type CreateParams = OrderCreate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new Order from a priced payload.
    ///
    /// # Arguments
    /// * `id` - Generated `ORD-NNNNNN` identifier
    /// * `params` - Validated order plus the total computed at pricing time
    ///
    /// # Notes
    /// Progress starts at the delivery status default and feedback at neutral.
    fn from_create_params(id: String, params: OrderCreate) -> Result<Self, FrameworkError> {
        let OrderCreate { order, total_amount } = params;
        if order.items.is_empty() {
            return Err(FrameworkError::Rejected("order has no line items".to_string()));
        }
        if order.items.iter().any(|item| item.quantity == 0) {
            return Err(FrameworkError::Rejected("line item quantity must be positive".to_string()));
        }
        Ok(Self {
            id,
            client_name: order.client_name,
            items: order.items,
            total_amount,
            payment_status: order.payment_status,
            delivery_progress: order.delivery_status.default_progress(),
            delivery_status: order.delivery_status,
            expected_delivery_date: order.expected_delivery_date,
            delivery_address: order.delivery_address,
            customer_feedback: CustomerFeedback::Neutral,
            created_at: Utc::now(),
        })
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, FrameworkError> {
        match action {
            OrderAction::SetPaymentStatus(status) => {
                let previous = std::mem::replace(&mut self.payment_status, status);
                Ok(OrderActionResult::SetPaymentStatus(previous))
            }
            OrderAction::SetDeliveryStatus { status, progress } => {
                let previous = std::mem::replace(&mut self.delivery_status, status);
                self.delivery_progress = progress.unwrap_or_else(|| status.default_progress()).min(100);
                Ok(OrderActionResult::SetDeliveryStatus {
                    previous,
                    progress: self.delivery_progress,
                })
            }
            OrderAction::RecordFeedback(feedback) => {
                let previous = std::mem::replace(&mut self.customer_feedback, feedback);
                Ok(OrderActionResult::RecordFeedback(previous))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DeliveryStatus, LineItem, NewOrder, PaymentStatus};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn params(items: Vec<LineItem>) -> OrderCreate {
        OrderCreate {
            order: NewOrder {
                client_name: "Ada Lovelace".into(),
                items,
                payment_status: PaymentStatus::Paid,
                delivery_status: DeliveryStatus::Shipped,
                expected_delivery_date: NaiveDate::from_ymd_opt(2024, 11, 2).unwrap(),
                delivery_address: "12 Analytical Row".into(),
            },
            total_amount: dec!(59.98),
        }
    }

    #[test]
    fn test_from_create_params_sets_defaults() {
        let order = Order::from_create_params("ORD-000005".into(), params(vec![LineItem::new("3", 2)])).unwrap();
        assert_eq!(order.delivery_progress, 50);
        assert_eq!(order.customer_feedback, CustomerFeedback::Neutral);
        assert_eq!(order.total_amount, dec!(59.98));
    }

    #[test]
    fn test_initial_progress_follows_initial_status() {
        for (status, progress) in [
            (DeliveryStatus::Pending, 0),
            (DeliveryStatus::Shipped, 50),
            (DeliveryStatus::Delivered, 100),
            (DeliveryStatus::Canceled, 0),
        ] {
            let mut create = params(vec![LineItem::new("3", 1)]);
            create.order.delivery_status = status;
            let order = Order::from_create_params("ORD-000006".into(), create).unwrap();
            assert_eq!(order.delivery_progress, progress, "{:?}", status);
        }
    }

    #[test]
    fn test_empty_items_rejected() {
        let err = Order::from_create_params("ORD-000005".into(), params(vec![])).unwrap_err();
        assert!(matches!(err, FrameworkError::Rejected(_)));
    }

    #[test]
    fn test_delivery_status_action_clamps_progress() {
        let mut order = Order::from_create_params("ORD-000005".into(), params(vec![LineItem::new("3", 2)])).unwrap();

        let result = order
            .handle_action(OrderAction::SetDeliveryStatus {
                status: DeliveryStatus::Delivered,
                progress: None,
            })
            .unwrap();
        assert_eq!(
            result,
            OrderActionResult::SetDeliveryStatus {
                previous: DeliveryStatus::Shipped,
                progress: 100
            }
        );

        order
            .handle_action(OrderAction::SetDeliveryStatus {
                status: DeliveryStatus::Shipped,
                progress: Some(180),
            })
            .unwrap();
        assert_eq!(order.delivery_progress, 100);

        let result = order.handle_action(OrderAction::SetPaymentStatus(PaymentStatus::Refunded)).unwrap();
        assert_eq!(result, OrderActionResult::SetPaymentStatus(PaymentStatus::Paid));
    }
}
