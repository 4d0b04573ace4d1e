//! Fixed enumerations shared by products and orders.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Product category. The set is closed; unknown names are rejected at validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Furniture,
    Clothing,
    Books,
    Sports,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Furniture,
        Category::Clothing,
        Category::Books,
        Category::Sports,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Furniture => "Furniture",
            Category::Clothing => "Clothing",
            Category::Books => "Books",
            Category::Sports => "Sports",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Refunded,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [PaymentStatus::Paid, PaymentStatus::Pending, PaymentStatus::Refunded];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Refunded => "Refunded",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Pending,
    Shipped,
    Delivered,
    Canceled,
}

impl DeliveryStatus {
    pub const ALL: [DeliveryStatus; 4] = [
        DeliveryStatus::Pending,
        DeliveryStatus::Shipped,
        DeliveryStatus::Delivered,
        DeliveryStatus::Canceled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "Pending",
            DeliveryStatus::Shipped => "Shipped",
            DeliveryStatus::Delivered => "Delivered",
            DeliveryStatus::Canceled => "Canceled",
        }
    }

    /// Progress shown for an order whose status changed without an explicit value.
    pub fn default_progress(&self) -> u8 {
        match self {
            DeliveryStatus::Pending | DeliveryStatus::Canceled => 0,
            DeliveryStatus::Shipped => 50,
            DeliveryStatus::Delivered => 100,
        }
    }
}

/// Customer satisfaction as captured after delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerFeedback {
    Happy,
    Neutral,
    Unhappy,
}

impl CustomerFeedback {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerFeedback::Happy => "happy",
            CustomerFeedback::Neutral => "neutral",
            CustomerFeedback::Unhappy => "unhappy",
        }
    }

    /// Satisfaction score used by the order metrics.
    pub fn score(&self) -> u32 {
        match self {
            CustomerFeedback::Happy => 5,
            CustomerFeedback::Neutral => 3,
            CustomerFeedback::Unhappy => 1,
        }
    }
}

/// Error returned when a label does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! impl_label {
    ($ty:ident, $kind:literal, [$($variant:ident),+]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownVariant;

            /// Case-insensitive, surrounding whitespace ignored.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $(
                    if $ty::$variant.as_str().eq_ignore_ascii_case(wanted) {
                        return Ok($ty::$variant);
                    }
                )+
                Err(UnknownVariant { kind: $kind, value: s.to_string() })
            }
        }
    };
}

impl_label!(Category, "category", [Electronics, Furniture, Clothing, Books, Sports]);
impl_label!(PaymentStatus, "payment status", [Paid, Pending, Refunded]);
impl_label!(DeliveryStatus, "delivery status", [Pending, Shipped, Delivered, Canceled]);
impl_label!(CustomerFeedback, "customer feedback", [Happy, Neutral, Unhappy]);
