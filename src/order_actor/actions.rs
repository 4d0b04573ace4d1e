use crate::domain::{CustomerFeedback, DeliveryStatus, PaymentStatus};

/// Status changes an order can go through after it was placed.
#[derive(Debug, Clone)]
pub enum OrderAction {
    SetPaymentStatus(PaymentStatus),
    /// Moves delivery along. Without an explicit progress the status default is used.
    SetDeliveryStatus {
        status: DeliveryStatus,
        progress: Option<u8>,
    },
    RecordFeedback(CustomerFeedback),
}

/// Results from OrderActions - each reports the value it replaced
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    SetPaymentStatus(PaymentStatus),
    SetDeliveryStatus { previous: DeliveryStatus, progress: u8 },
    RecordFeedback(CustomerFeedback),
}
